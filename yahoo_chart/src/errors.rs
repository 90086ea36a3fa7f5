//! Error types for chart payload extraction.

/// Errors that can occur while reading a chart result entry.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The entry does not match the expected chart shape.
    #[error("{0}")]
    Deserialize(#[from] serde_json::Error),
    /// A series that must hold at least one element is empty.
    #[error("{field} is empty")]
    EmptySeries { field: &'static str },
    /// The first element of a price series is null.
    #[error("{field} is null")]
    NullValue { field: &'static str },
    /// The epoch timestamp cannot be represented as a date.
    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),
}
