//! Error types for duty-dial operations.
//!
//! Illegal handle moves are not errors: the solver simply ignores them.
//! These variants cover bad configuration and misuse of the confirmation flow.

use thiserror::Error;

use crate::interval::Hour;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DialError {
    #[error("Invalid hour for {field}: {hour} (expected 0..=24)")]
    InvalidHour { field: &'static str, hour: Hour },

    #[error("Invalid dial geometry: {0}")]
    InvalidGeometry(String),

    #[error("No merge is awaiting confirmation")]
    NoPendingMerge,

    #[error("A merge is already awaiting confirmation")]
    MergePending,
}

pub type Result<T> = std::result::Result<T, DialError>;
