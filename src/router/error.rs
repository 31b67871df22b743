//! Router error types

use thiserror::Error;

/// A page factory failed to produce its page
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PageLoadError(pub String);

impl PageLoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors that can occur while building the table or navigating
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// Two records share the same name
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    /// No record has the requested name
    #[error("Unknown route name: {0}")]
    UnknownName(String),

    /// No record matched and the table has no catch-all
    #[error("No route matches {0}")]
    NoMatch(String),

    /// Redirects did not settle on a page
    #[error("Redirect loop while resolving {0}")]
    RedirectLoop(String),

    /// The matched page failed to load
    #[error("Failed to load page for {route}: {source}")]
    PageLoad {
        route: String,
        #[source]
        source: PageLoadError,
    },
}

/// Result type for router operations
pub type RouterResult<T> = Result<T, RouterError>;
