//! CSV adapter for the tabular container
//!
//! Reads a CSV file into a [`Table`] and writes a table back out. This is the
//! I/O collaborator around the masking core: fatal read/write errors surface
//! here and abort the run before or after masking, never during it.
//!
//! Numeric-looking cells are stored as typed cells so the engine's
//! string-conversion step is meaningful, but only when the text round-trips
//! exactly (leading zeros and trailing decimal zeros stay text, otherwise a
//! phone number like `0123456789` would silently lose a digit).

use crate::domain::{Cell, Column, Result, Table, VeilError};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

/// Read a CSV file with a header row into a table
pub fn read_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| VeilError::Io(format!("Failed to read {}: {e}", path.display())))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| VeilError::Io(format!("Failed to read headers: {e}")))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut columns: Vec<Column> = headers
        .into_iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for record in reader.records() {
        let record =
            record.map_err(|e| VeilError::Io(format!("Failed to read record: {e}")))?;
        for (idx, column) in columns.iter_mut().enumerate() {
            let raw = record.get(idx).unwrap_or("");
            column.cells.push(parse_cell(raw));
        }
    }

    let table = Table::from_columns(columns)?;
    tracing::info!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "Read dataset"
    );
    Ok(table)
}

/// Write a table to a CSV file with a header row
pub fn write_table(table: &Table, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .map_err(|e| VeilError::Io(format!("Failed to write {}: {e}", path.display())))?;

    writer
        .write_record(table.column_names())
        .map_err(|e| VeilError::Io(format!("Failed to write headers: {e}")))?;

    for row in 0..table.row_count() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| column.cells[row].to_text())
            .collect();
        writer
            .write_record(&record)
            .map_err(|e| VeilError::Io(format!("Failed to write row {row}: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| VeilError::Io(format!("Failed to flush {}: {e}", path.display())))?;

    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        "Wrote dataset"
    );
    Ok(())
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Parse a raw cell, keeping the typed form only when it round-trips exactly
fn parse_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Cell::Empty;
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        if int.to_string() == trimmed {
            return Cell::Int(int);
        }
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        if float.to_string() == trimmed {
            return Cell::Float(float);
        }
    }
    Cell::Text(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_types() {
        assert_eq!(parse_cell(""), Cell::Empty);
        assert_eq!(parse_cell("  "), Cell::Empty);
        assert_eq!(parse_cell("42"), Cell::Int(42));
        assert_eq!(parse_cell("-7"), Cell::Int(-7));
        assert_eq!(parse_cell("3.5"), Cell::Float(3.5));
        assert_eq!(parse_cell("hello"), Cell::Text("hello".to_string()));
    }

    #[test]
    fn test_leading_zeros_stay_text() {
        assert_eq!(parse_cell("007"), Cell::Text("007".to_string()));
        assert_eq!(parse_cell("0123456789"), Cell::Text("0123456789".to_string()));
    }

    #[test]
    fn test_non_canonical_float_stays_text() {
        assert_eq!(parse_cell("1.50"), Cell::Text("1.50".to_string()));
    }

    #[test]
    fn test_round_trip() {
        use tempfile::tempdir;

        let dir = tempdir().unwrap();
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "name,phone\nAda,5551234\nBo,\n").unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column("phone").unwrap().cells[0], Cell::Int(5551234));
        assert_eq!(table.column("phone").unwrap().cells[1], Cell::Empty);

        let out = dir.path().join("out.csv");
        write_table(&table, &out).unwrap();
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, "name,phone\nAda,5551234\nBo,\n");
    }
}
