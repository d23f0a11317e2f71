//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the external services the
//! appointment subsystem reads from. These traits allow for dependency
//! injection and easier testing by decoupling the application logic from
//! specific implementations of external services.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::models::{PropertySummary, UserSummary};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for resolving property and user references.
///
/// The property and user stores belong to the wider listing platform; the
/// appointment subsystem only reads display summaries from them when it
/// populates a listed appointment (a read-time join, nothing is stored).
pub trait DirectoryService: Send + Sync {
    /// Resolve a property reference to its display summary.
    fn get_property(&self, property_id: &str) -> BoxFuture<'_, PropertySummary, BoxedError>;

    /// Resolve a user reference to its display summary.
    fn get_user(&self, user_id: &str) -> BoxFuture<'_, UserSummary, BoxedError>;
}

/// A factory for creating service instances.
///
/// This trait provides methods for creating instances of external services.
/// It's used by the application to get access to the collaborators it needs.
pub trait ServiceFactory: Send + Sync {
    /// Get a directory service instance.
    fn directory_service(&self) -> Option<Arc<dyn DirectoryService>>;
}
