//! Errors reported by deep-link handlers.
//!
//! Navigator operations themselves never fail: popping an empty stack,
//! dismissing an empty slot, or switching to the active tab are no-ops.
//! The only fallible step is interpreting an incoming link, which is done
//! by caller-supplied handler code. This module defines what such a handler
//! returns:
//!
//! - [`NavigationError`] — why a handler could not act on a link.
//! - [`LinkOutcome`] — what [`TabNavigator::open_link`](crate::TabNavigator::open_link)
//!   reports back to the host (`Handled`, `Unhandled`, `Failed`).
//!
//! # Examples
//!
//! ```
//! use tab_navigator::{LinkOutcome, NavigationError};
//!
//! let outcome = LinkOutcome::Failed(NavigationError::unknown_tab("inbox"));
//! assert!(outcome.is_failed());
//! assert_eq!(outcome.error().unwrap().to_string(), "Unknown tab: inbox");
//! ```

use std::fmt;

// ============================================================================
// NavigationError
// ============================================================================

/// Why a deep-link handler could not act on a link.
///
/// Implements [`std::error::Error`] and [`Display`](std::fmt::Display).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The link names a tab that is not configured.
    UnknownTab { tab: String },

    /// The link is well-formed but does not map to any destination.
    UnrecognizedLink { link: String },

    /// The link could not be parsed.
    InvalidLink { message: String },

    /// Custom error
    Custom { message: String },
}

impl NavigationError {
    /// The link names a tab that is not configured.
    pub fn unknown_tab(tab: impl Into<String>) -> Self {
        Self::UnknownTab { tab: tab.into() }
    }

    /// The link does not map to any destination.
    pub fn unrecognized(link: impl Into<String>) -> Self {
        Self::UnrecognizedLink { link: link.into() }
    }

    /// The link could not be parsed.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidLink {
            message: message.into(),
        }
    }

    /// Free-form error.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom {
            message: message.into(),
        }
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::UnknownTab { tab } => write!(f, "Unknown tab: {}", tab),
            NavigationError::UnrecognizedLink { link } => {
                write!(f, "Unrecognized link: {}", link)
            }
            NavigationError::InvalidLink { message } => write!(f, "Invalid link: {}", message),
            NavigationError::Custom { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for NavigationError {}

// ============================================================================
// LinkOutcome
// ============================================================================

/// Result of forwarding an incoming link to the registered handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// The handler accepted the link.
    Handled,
    /// No handler is registered; the navigator was not touched.
    Unhandled,
    /// The handler rejected the link.
    ///
    /// Mutations the handler made before failing stay applied.
    Failed(NavigationError),
}

impl LinkOutcome {
    /// Check if the handler accepted the link
    pub fn is_handled(&self) -> bool {
        matches!(self, LinkOutcome::Handled)
    }

    /// Check if no handler was registered
    pub fn is_unhandled(&self) -> bool {
        matches!(self, LinkOutcome::Unhandled)
    }

    /// Check if the handler reported an error
    pub fn is_failed(&self) -> bool {
        matches!(self, LinkOutcome::Failed(_))
    }

    /// Get the handler's error, if it failed
    pub fn error(&self) -> Option<&NavigationError> {
        match self {
            LinkOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<Result<(), NavigationError>> for LinkOutcome {
    fn from(result: Result<(), NavigationError>) -> Self {
        match result {
            Ok(()) => LinkOutcome::Handled,
            Err(err) => LinkOutcome::Failed(err),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
