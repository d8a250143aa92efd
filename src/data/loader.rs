use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use super::model::{Catalog, Field, PriceRecord};

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Why a qualifying file contributed no rows. Both variants are recoverable:
/// the file is skipped and loading continues.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("no recognized '{0}' column")]
    SchemaMismatch(Field),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: '{value}' is not a number in the {field} column")]
    BadNumber {
        line: usize,
        field: Field,
        value: String,
    },
}

/// A file that qualified by name but was skipped during parsing.
#[derive(Debug)]
pub struct SkippedFile {
    pub file: String,
    pub reason: SkipReason,
}

/// A row excluded because its weight was zero or either numeric value was
/// not finite. `line` is the 1-based line in the source file.
#[derive(Debug)]
pub struct DroppedRow {
    pub file: String,
    pub line: usize,
}

/// Outcome of one folder scan: the merged catalog plus everything the user
/// should hear about. Threaded back to the caller as a plain return value;
/// there is no accumulator outside this struct.
#[derive(Debug, Default)]
pub struct LoadSummary {
    pub catalog: Catalog,
    /// Number of files whose name qualified, including skipped ones.
    pub files_considered: usize,
    pub skipped_files: Vec<SkippedFile>,
    pub dropped_rows: Vec<DroppedRow>,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Scan `folder` for price-list CSVs and merge them into one catalog.
///
/// A file qualifies when its name contains "price" case-insensitively and
/// its extension is `.csv`. Files are visited in directory listing order,
/// which is platform-dependent. A folder that yields zero qualifying files,
/// or whose every file is skipped, produces an empty catalog rather than an
/// error; only an unreadable folder fails.
pub fn load_folder(folder: &Path) -> Result<LoadSummary> {
    let entries = fs::read_dir(folder)
        .with_context(|| format!("reading directory {}", folder.display()))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", folder.display()))?;
        let path = entry.path();
        if is_price_list(&path) {
            files.push(path);
        }
    }

    let mut summary = LoadSummary {
        files_considered: files.len(),
        ..LoadSummary::default()
    };

    for path in &files {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        match load_file(path, &file_name, &mut summary.dropped_rows) {
            Ok(mut records) => summary.catalog.records.append(&mut records),
            Err(reason) => {
                log::warn!("skipping {file_name}: {reason}");
                summary.skipped_files.push(SkippedFile {
                    file: file_name,
                    reason,
                });
            }
        }
    }

    log::info!(
        "loaded {} records from {} file(s), {} skipped",
        summary.catalog.len(),
        summary.files_considered,
        summary.skipped_files.len()
    );
    Ok(summary)
}

fn is_price_list(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    name.to_lowercase().contains("price") && ext.eq_ignore_ascii_case("csv")
}

// ---------------------------------------------------------------------------
// Per-file loading
// ---------------------------------------------------------------------------

/// Parse one price list. Header resolution picks, for each canonical field,
/// the first header whose lowercase form is in the field's alias set; if any
/// field stays unresolved the whole file is skipped. Numeric parse failures
/// are also file-level: a list with garbage in a price column is rejected
/// outright rather than loaded with holes.
fn load_file(
    path: &Path,
    file_name: &str,
    dropped: &mut Vec<DroppedRow>,
) -> Result<Vec<PriceRecord>, SkipReason> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut columns = [0usize; 3];
    for field in Field::ALL {
        match headers.iter().position(|h| field.matches(h)) {
            Some(idx) => columns[field as usize] = idx,
            None => return Err(SkipReason::SchemaMismatch(field)),
        }
    }
    let [name_idx, price_idx, weight_idx] = columns;

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        // Header occupies line 1, first data row is line 2.
        let line = row_no + 2;

        let name = record.get(name_idx).unwrap_or("").to_string();
        let price = parse_number(&record, price_idx, line, Field::Price)?;
        let weight = parse_number(&record, weight_idx, line, Field::Weight)?;

        if weight == 0.0 || !weight.is_finite() || !price.is_finite() {
            log::warn!("{file_name} line {line}: zero or non-finite value, row dropped");
            dropped.push(DroppedRow {
                file: file_name.to_string(),
                line,
            });
            continue;
        }
        let unit_price = price / weight;

        records.push(PriceRecord {
            name,
            price,
            weight,
            unit_price,
            source_file: file_name.to_string(),
        });
    }

    Ok(records)
}

fn parse_number(
    record: &StringRecord,
    idx: usize,
    line: usize,
    field: Field,
) -> Result<f64, SkipReason> {
    let raw = record.get(idx).unwrap_or("");
    raw.parse::<f64>().map_err(|_| SkipReason::BadNumber {
        line,
        field,
        value: raw.to_string(),
    })
}
