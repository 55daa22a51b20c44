use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} not found, cannot parse contacts")]
    InputNotFound(PathBuf),

    #[error("Invalid contacts row at line {line}: {reason}")]
    Parse { line: u64, reason: String },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, Error>;
