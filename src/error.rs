use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("record has no `{0}` field")]
    MissingField(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
