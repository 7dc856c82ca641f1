//! Error types for dose tracking.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    #[error("wrong shape, expected yyyy-MM-dd HH:mm: {0:?}")] WrongShape(String),
    #[error("field out of range: {0:?}")] OutOfRange(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecayError {
    #[error("{field} cannot be unset")] MissingTimestamp { field: &'static str },
    #[error("half-life must be finite and positive, got {0}")] InvalidHalfLife(f64),
    #[error("elapsed hours must be finite and non-negative, got {0}")] InvalidElapsed(f64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("I/O: {0}")] Io(String),
    #[error("corrupted preferences: {0}")] Corrupted(String),
    #[error("serialization: {0}")] Serialization(String),
}
