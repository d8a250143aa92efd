use std::io::{self, Write};

use crate::data::model::Catalog;

// ---------------------------------------------------------------------------
// Aligned console table for a result view
// ---------------------------------------------------------------------------

const HEADERS: [&str; 6] = ["#", "Name", "Price", "Weight", "Unit price", "Source file"];
/// Right-align numeric columns, left-align the rest.
const RIGHT_ALIGNED: [bool; 6] = [true, false, true, true, true, false];

/// Render the records selected by `indices`, in that order, as an aligned
/// table with a presentational 1-based row number.
pub fn render<W: Write>(out: &mut W, catalog: &Catalog, indices: &[usize]) -> io::Result<()> {
    let mut rows: Vec<[String; 6]> = Vec::with_capacity(indices.len());
    for (pos, &idx) in indices.iter().enumerate() {
        let rec = &catalog.records[idx];
        rows.push([
            (pos + 1).to_string(),
            rec.name.clone(),
            format!("{:.2}", rec.price),
            format!("{:.2}", rec.weight),
            format!("{:.2}", rec.unit_price),
            rec.source_file.clone(),
        ]);
    }

    // Column widths in characters, not bytes: names are mostly Cyrillic.
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (col, cell) in row.iter().enumerate() {
            widths[col] = widths[col].max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS.map(String::from), &widths)?;
    let rule: String = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(out, "{rule}")?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 6], widths: &[usize]) -> io::Result<()> {
    let mut line = String::new();
    for (col, cell) in cells.iter().enumerate() {
        if col > 0 {
            line.push_str("  ");
        }
        let pad = widths[col].saturating_sub(cell.chars().count());
        if RIGHT_ALIGNED[col] {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        } else {
            line.push_str(cell);
            // No trailing padding on the last column.
            if col < cells.len() - 1 {
                line.push_str(&" ".repeat(pad));
            }
        }
    }
    writeln!(out, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::PriceRecord;

    fn record(name: &str, price: f64, weight: f64) -> PriceRecord {
        PriceRecord {
            name: name.to_string(),
            price,
            weight,
            unit_price: price / weight,
            source_file: "price1.csv".to_string(),
        }
    }

    #[test]
    fn renders_rows_in_view_order_with_numbering() {
        let catalog = Catalog {
            records: vec![record("Milk", 100.0, 2.0), record("Bread", 50.0, 1.0)],
        };
        let mut buf = Vec::new();
        render(&mut buf, &catalog, &[1, 0]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("#  Name"));
        assert!(lines[2].contains("Bread"));
        assert!(lines[2].trim_start().starts_with('1'));
        assert!(lines[3].contains("Milk"));
        assert!(lines[3].contains("50.00")); // unit price column
    }

    #[test]
    fn pads_columns_to_the_widest_cell() {
        let catalog = Catalog {
            records: vec![record("Сгущёнка варёная", 95.5, 0.4)],
        };
        let mut buf = Vec::new();
        render(&mut buf, &catalog, &[0]).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        // Header and data rows line up on the price column.
        let name_width = "Сгущёнка варёная".chars().count();
        assert!(lines[0].chars().count() >= name_width);
        assert!(lines[2].contains("Сгущёнка варёная"));
        assert!(lines[2].contains("238.75"));
    }
}
