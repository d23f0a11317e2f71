use std::fmt;
use thiserror::Error;

/// The base error type for all Estatify errors.
///
/// This enum provides a common set of error variants that can be used across all crates.
/// Each crate can extend this by implementing From<SpecificError> for EstatifyError.
#[derive(Error, Debug)]
pub enum EstatifyError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication or authorization
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for EstatifyError {
    fn status_code(&self) -> u16 {
        match self {
            EstatifyError::HttpError(_) => 500,
            EstatifyError::ParseError(_) => 400,
            EstatifyError::ConfigError(_) => 500,
            EstatifyError::AuthError(_) => 401,
            EstatifyError::ValidationError(_) => 400,
            EstatifyError::DatabaseError(_) => 500,
            EstatifyError::NotFoundError(_) => 404,
            EstatifyError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
///
/// This trait can be implemented by error types to provide a consistent way
/// to add context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, EstatifyError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, EstatifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, EstatifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| EstatifyError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, EstatifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| EstatifyError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Common error conversions
impl From<reqwest::Error> for EstatifyError {
    fn from(err: reqwest::Error) -> Self {
        EstatifyError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for EstatifyError {
    fn from(err: serde_json::Error) -> Self {
        EstatifyError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for EstatifyError {
    fn from(err: std::io::Error) -> Self {
        EstatifyError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> EstatifyError {
    EstatifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> EstatifyError {
    EstatifyError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> EstatifyError {
    EstatifyError::NotFoundError(message.to_string())
}

pub fn auth_error<T: fmt::Display>(message: T) -> EstatifyError {
    EstatifyError::AuthError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> EstatifyError {
    EstatifyError::InternalError(message.to_string())
}
