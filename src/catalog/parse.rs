//! Catalog table parser
//!
//! Converts the box-drawing table text into structured records.

use crate::types::model::ModelRecord;

/// Parse the raw catalog table into records, preserving source order.
///
/// Only trimmed lines that start with the vertical bar glyph are data
/// rows; border decoration is discarded. Columns in order: repo, file,
/// params, size. Rows with fewer than four columns are skipped and
/// columns past the fourth are ignored.
pub fn parse_table(text: &str) -> Vec<ModelRecord> {
    let mut records = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        let Some(inner) = line.strip_prefix('│') else {
            continue;
        };
        let inner = inner.strip_suffix('│').unwrap_or(inner);
        let cols: Vec<&str> = inner.split('│').map(str::trim).collect();
        if cols.len() < 4 {
            continue;
        }
        records.push(ModelRecord {
            repo: cols[0].to_string(),
            filename: cols[1].to_string(),
            params_raw: cols[2].to_string(),
            size_raw: cols[3].to_string(),
        });
    }
    records
}
