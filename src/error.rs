//! Error types for the formatter registry

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Unknown format: \"{name}\". Available formats: {}", .available.join(", "))]
    UnknownFormat {
        name: String,
        available: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, FormatError>;
