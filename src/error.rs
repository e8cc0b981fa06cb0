// src/error.rs

//! Error types for the mesonbridge library

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the library
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to parse a setting or option value
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Option name not in the recognized option table
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    /// The Conan cache-path query could not be run or reported failure
    #[error("Conan cache query failed: {0}")]
    CacheQuery(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
