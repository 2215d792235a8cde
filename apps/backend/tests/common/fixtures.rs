//! Test fixtures and factory functions for creating uploads.

use std::io::Cursor;

use axum_test::multipart::{MultipartForm, Part};
use uuid::Uuid;

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Build an xlsx workbook with a single sheet.
///
/// The first row is the header. Numeric strings are written as numbers, like
/// a spreadsheet application would store them; empty strings leave the cell
/// blank.
pub fn xlsx_bytes(rows: &[Vec<String>]) -> Vec<u8> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_mut(&0).expect("default sheet");

    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            let cell = sheet.get_cell_mut(((c as u32) + 1, (r as u32) + 1));
            match value.parse::<f64>() {
                Ok(num) => {
                    cell.set_value_number(num);
                }
                Err(_) => {
                    cell.set_value(value.as_str());
                }
            }
        }
    }

    let mut buf = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut buf).expect("write xlsx");
    buf.into_inner()
}

/// Turn string slices into owned sheet rows.
pub fn sheet(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect()
}

/// Multipart form carrying a workbook in the `file` field.
pub fn upload_form(rows: &[Vec<String>]) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(xlsx_bytes(rows))
            .file_name("upload.xlsx")
            .mime_type(XLSX_MIME),
    )
}

/// Multipart form carrying arbitrary bytes in the `file` field.
pub fn raw_upload_form(bytes: &[u8], file_name: &str) -> MultipartForm {
    MultipartForm::new().add_part("file", Part::bytes(bytes.to_vec()).file_name(file_name))
}

/// Multipart form without a `file` field.
pub fn form_without_file() -> MultipartForm {
    MultipartForm::new().add_text("note", "no attachment")
}

/// Short unique tag for keeping test rows apart.
///
/// Only letters, so it never contains a numeric option of another test.
pub fn unique_tag(prefix: &str) -> String {
    let letters: String = Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .map(|c| match c.to_digit(16) {
            Some(d) => (b'g' + d as u8) as char,
            None => c,
        })
        .take(12)
        .collect();
    format!("{}{}", prefix, letters)
}
