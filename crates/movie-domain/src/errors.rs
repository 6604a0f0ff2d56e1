// errors.rs
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum CatalogError {
  #[error("Validation error: {0}")]
  ValidationError(String),
  #[error("Storage error: {0}")]
  StorageError(String),
  #[error("Console error: {0}")]
  ConsoleError(String),
}

impl From<std::io::Error> for CatalogError {
  fn from(e: std::io::Error) -> Self {
    Self::ConsoleError(e.to_string())
  }
}
