pub mod bank;
pub mod upload;
