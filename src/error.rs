use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV record on line {line} has {found} fields, header has {expected}")]
    ExtraFields { line: u64, found: usize, expected: usize },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input directory {} does not exist", .0.display())]
    InputDirMissing(PathBuf),
}

pub type Result<T> = std::result::Result<T, PrepError>;
