use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::Catalog;

/// Where exports land unless the caller says otherwise.
pub const DEFAULT_OUTPUT: &str = "results.html";

// ---------------------------------------------------------------------------
// HTML export
// ---------------------------------------------------------------------------

/// Serialize a search result view as a standalone HTML table.
///
/// An empty view writes nothing and returns `Ok(false)` so the caller can
/// tell the user no file was produced. Otherwise `path` is overwritten, the
/// writer is flushed before success is reported, and rows appear in exactly
/// the order of `indices`.
pub fn export_html(catalog: &Catalog, indices: &[usize], path: &Path) -> Result<bool> {
    if indices.is_empty() {
        log::info!("empty result set, nothing exported");
        return Ok(false);
    }

    let file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(
        out,
        "<head><meta charset=\"utf-8\"><title>Search results</title></head>"
    )?;
    writeln!(out, "<body>")?;
    writeln!(out, "<table border=\"1\">")?;
    writeln!(
        out,
        "<thead><tr><th>Name</th><th>Price</th><th>Weight</th>\
         <th>Unit price</th><th>Source file</th></tr></thead>"
    )?;
    writeln!(out, "<tbody>")?;
    for &idx in indices {
        let rec = &catalog.records[idx];
        writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&rec.name),
            rec.price,
            rec.weight,
            rec.unit_price,
            escape(&rec.source_file),
        )?;
    }
    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;

    out.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(true)
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PriceRecord;
    use std::fs;
    use tempfile::TempDir;

    fn record(name: &str, price: f64, weight: f64, file: &str) -> PriceRecord {
        PriceRecord {
            name: name.to_string(),
            price,
            weight,
            unit_price: price / weight,
            source_file: file.to_string(),
        }
    }

    #[test]
    fn writes_rows_in_view_order() {
        let catalog = Catalog {
            records: vec![
                record("Milk", 100.0, 2.0, "price1.csv"),
                record("Bread", 50.0, 1.0, "price1.csv"),
            ],
        };
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.html");

        let written = export_html(&catalog, &[1, 0], &path).unwrap();
        assert!(written);

        let html = fs::read_to_string(&path).unwrap();
        let bread = html.find("<td>Bread</td>").unwrap();
        let milk = html.find("<td>Milk</td>").unwrap();
        assert!(bread < milk);
        assert!(html.contains("<td>50</td><td>1</td><td>50</td>"));
        assert!(html.contains("<th>Unit price</th>"));
    }

    #[test]
    fn empty_view_writes_nothing() {
        let catalog = Catalog::default();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.html");

        let written = export_html(&catalog, &[], &path).unwrap();
        assert!(!written);
        assert!(!path.exists());
    }

    #[test]
    fn overwrites_an_existing_file() {
        let catalog = Catalog {
            records: vec![record("Milk", 100.0, 2.0, "price1.csv")],
        };
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.html");
        fs::write(&path, "stale").unwrap();

        export_html(&catalog, &[0], &path).unwrap();
        let html = fs::read_to_string(&path).unwrap();
        assert!(!html.contains("stale"));
        assert!(html.contains("<td>Milk</td>"));
    }

    #[test]
    fn escapes_html_in_cell_text() {
        let catalog = Catalog {
            records: vec![record("Chips <salted> & \"hot\"", 10.0, 1.0, "price1.csv")],
        };
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.html");

        export_html(&catalog, &[0], &path).unwrap();
        let html = fs::read_to_string(&path).unwrap();
        assert!(html.contains("Chips &lt;salted&gt; &amp; &quot;hot&quot;"));
        assert!(!html.contains("<salted>"));
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let catalog = Catalog {
            records: vec![record("Milk", 100.0, 2.0, "price1.csv")],
        };
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("results.html");
        assert!(export_html(&catalog, &[0], &path).is_err());
    }
}
