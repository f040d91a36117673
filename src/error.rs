//! Error types for kmergen.
//!
//! This module provides strongly-typed errors for every fallible operation in
//! the library. All of them are detected before any k-mer enumeration starts.

use thiserror::Error;

/// Errors that can occur in kmergen operations.
#[derive(Debug, Error)]
pub enum KmerGenError {
    /// Base set name is not one of `pure`, `dubious2`, `dubious3` or `full`.
    #[error("invalid base set '{name}': expected one of pure, dubious2, dubious3, full")]
    InvalidTier { name: String },

    /// An argument could not be interpreted (bad k-mer length, missing sequence).
    #[error("invalid argument: {details}")]
    InvalidArgument { details: String },

    /// K-mer length was not set before calling a counting method.
    #[error("k-mer length not set; call .k() first")]
    KmerLengthNotSet,

    /// Failed to write output.
    #[error("failed to write output: {source}")]
    WriteError {
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize JSON output.
    #[error("failed to serialize JSON: {source}")]
    JsonError {
        #[source]
        source: serde_json::Error,
    },
}

/// Error for invalid k-mer length.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("k-mer length {k} is out of range: must be at least {min}")]
pub struct KmerLengthError {
    /// The invalid k value that was provided.
    pub k: usize,
    /// Minimum valid k-mer length.
    pub min: usize,
}

impl From<std::io::Error> for KmerGenError {
    fn from(source: std::io::Error) -> Self {
        KmerGenError::WriteError { source }
    }
}

impl From<serde_json::Error> for KmerGenError {
    fn from(source: serde_json::Error) -> Self {
        KmerGenError::JsonError { source }
    }
}

impl From<KmerLengthError> for KmerGenError {
    fn from(err: KmerLengthError) -> Self {
        KmerGenError::InvalidArgument {
            details: err.to_string(),
        }
    }
}
