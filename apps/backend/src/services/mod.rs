pub mod spreadsheet;
pub mod upload;
