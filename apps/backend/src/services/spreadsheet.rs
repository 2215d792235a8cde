//! Spreadsheet decoding for content uploads.
//!
//! Reads the first sheet of an uploaded workbook (xlsx, xls, xlsb or ods,
//! detected from the bytes). The first row holds the field names; every
//! following non-empty row becomes a [`SheetRow`].

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use quiz_core::SheetRow;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpreadsheetError {
    #[error("not a readable workbook: {0}")]
    Open(String),
    #[error("workbook has no sheets")]
    NoSheet,
    #[error("failed to read sheet: {0}")]
    Read(String),
}

/// Decode uploaded workbook bytes into rows of named fields.
pub fn read_rows(bytes: Vec<u8>) -> Result<Vec<SheetRow>, SpreadsheetError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| SpreadsheetError::Open(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(SpreadsheetError::NoSheet)?
        .map_err(|e| SpreadsheetError::Read(e.to_string()))?;

    Ok(rows_from_range(&range))
}

/// Convert a cell range into rows, using its first row as headers.
pub fn rows_from_range(range: &Range<Data>) -> Vec<SheetRow> {
    // Sheet row number of the range's first row (1-indexed)
    let first_line = range.start().map(|(row, _)| row as usize + 1).unwrap_or(1);

    let mut rows = range.rows();
    let Some(header_cells) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<Option<String>> = header_cells
        .iter()
        .map(|cell| cell_to_string(cell).map(|h| h.trim().to_string()))
        .collect();

    rows.enumerate()
        .filter_map(|(idx, cells)| {
            let mut row = SheetRow::new(first_line + idx + 1);
            for (header, cell) in headers.iter().zip(cells) {
                if let (Some(name), Some(value)) = (header, cell_to_string(cell)) {
                    row.fields.insert(name.clone(), value);
                }
            }
            (!row.fields.is_empty()).then_some(row)
        })
        .collect()
}

/// Convert a cell to its text form; empty and error cells have none.
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => {
            // Whole numbers come back from spreadsheets as floats
            if f.fract() == 0.0 && f.is_finite() {
                Some(format!("{:.0}", f))
            } else {
                Some(f.to_string())
            }
        }
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}
