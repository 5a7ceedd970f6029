//! Error types for KhaataKitab

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Ledger unavailable: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Ledger pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("SMS parse error: {0}")]
    SmsParse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
