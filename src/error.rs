// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MapperError>;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Missing field in search response: {path}")]
    MissingField { path: String },

    #[error("Unexpected shape at {path}: expected {expected}")]
    UnexpectedShape { path: String, expected: &'static str },

    #[error("Index out of range at {path}: index {index} but length is {len}")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },

    #[error("Id range exhausted: {count} documents do not fit starting at id {start_id}")]
    IdOverflow { start_id: u64, count: u64 },

    #[error("Identifier missing from account table: {search_id}")]
    MissingAccountInfo { search_id: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MapperError {
    /// True for errors caused by a search response that does not have the expected
    /// structure. These skip one identifier; they never abort a batch.
    pub fn is_malformed_response(&self) -> bool {
        matches!(
            self,
            MapperError::MissingField { .. }
                | MapperError::UnexpectedShape { .. }
                | MapperError::IndexOutOfRange { .. }
        )
    }
}
