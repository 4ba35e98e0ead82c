/*!
 * Error types for the pptranslate application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to the translation provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error reported by the API itself
    #[error("API responded with error: {code} - {message}")]
    ApiError {
        /// Provider error code
        code: String,
        /// Error message from the API
        message: String,
    },
}

/// Errors that can occur while opening, reading or saving a presentation.
///
/// These are fatal to a running job: a presentation that cannot be read or
/// persisted leaves nothing sensible to continue with.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file is not a readable ZIP archive
    #[error("Not a valid PPTX archive: {0}")]
    Archive(String),

    /// A required part is missing from the archive
    #[error("Missing archive part: {0}")]
    MissingPart(String),

    /// Slide XML could not be parsed or rewritten
    #[error("Slide XML error in {part}: {message}")]
    Xml {
        /// Archive part the error occurred in
        part: String,
        /// Underlying parser message
        message: String,
    },

    /// Error from a file operation
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors detected before a job is allowed to start.
///
/// Validation happens synchronously on the caller's thread; a job that fails
/// validation never transitions to running.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// App ID or secret key is missing or blank
    #[error("Missing credentials: both an app ID and a secret key are required")]
    MissingCredentials,

    /// The input presentation does not exist
    #[error("Input file does not exist: {0}")]
    InputNotFound(PathBuf),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from job validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Error from the document layer
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
