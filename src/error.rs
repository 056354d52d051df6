// SPDX-License-Identifier: PMPL-1.0-or-later

//! Failure taxonomy for content resolution and rendering.
//!
//! A malformed locale segment is not an error — the router self-corrects the
//! fragment and never surfaces it. Everything else that can go wrong between
//! "fragment parsed" and "HTML written" lands here and is caught at the load
//! boundary, where it becomes a visible, localized error block. The content
//! region is never left blank without explanation.

use thiserror::Error;

/// Errors raised while resolving or rendering a content resource.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The fetch surface reported the resource as absent.
    #[error("resource not found: {path}")]
    NotFound { path: String },

    /// Transport-level fetch failure (anything other than "absent").
    #[error("failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },

    /// Structured content (listing JSON, roster table) failed to parse.
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    /// Fetched content had an unexpected shape during rendering.
    #[error("render failure: {0}")]
    Render(String),
}

impl LoadError {
    /// Whether this failure should surface as "content not found" rather
    /// than the generic load-failure message.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }

    pub(crate) fn parse(path: &str, reason: impl std::fmt::Display) -> Self {
        LoadError::Parse {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }
}
