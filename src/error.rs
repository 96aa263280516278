// src/error.rs

//! Error types for recipe loading and plan resolution

use thiserror::Error;

/// Result type for buildplan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a recipe or resolving a plan
///
/// Both kinds are fatal to their operation: a malformed recipe aborts the
/// load, and an unrecognized platform tag aborts resolution. There are no
/// partial-failure or retry semantics.
#[derive(Error, Debug)]
pub enum Error {
    /// Recipe configuration is malformed (bad TOML, empty names, or a
    /// version constraint outside the recognized grammar)
    #[error("invalid recipe configuration: {0}")]
    ConfigInvalid(String),

    /// Platform tag is not in the enumerated set
    #[error("unknown platform tag: {0}")]
    UnknownPlatform(String),
}
