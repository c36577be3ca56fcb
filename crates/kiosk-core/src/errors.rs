//! Error types for content set loading.
//!
//! Session operations themselves are total and never fail; the only thing
//! that can go wrong in this crate is reading a user-supplied content file.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("failed to read content file '{path}': {message}")]
    Io { path: String, message: String },
    #[error("failed to parse content file '{path}': {message}")]
    Parse { path: String, message: String },
    #[error("invalid content set: {0}")]
    Validation(String),
}
