// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content fetcher adapter.
//!
//! The network (or filesystem) fetch primitive is an external capability:
//! the core only ever sees [`ContentFetcher`], which returns raw text or a
//! typed failure. Paths are relative resource identifiers of the form
//! `locales/<locale>/<resource>`.
//!
//! Two implementations ship with the crate: [`FsFetcher`] resolves paths
//! against a content directory on disk (authoring CLI, tests), and
//! [`MemoryFetcher`] serves from an in-memory map (hosts that embed their
//! content, integration tests). A browser host supplies its own adapter over
//! whatever fetch primitive it has.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Typed failure from the fetch surface.
///
/// `NotFound` is the only variant the load pipeline treats specially — it
/// surfaces as the localized "content not found" message instead of the
/// generic load failure.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Failed(String),
}

/// Capability interface over the external fetch primitive.
pub trait ContentFetcher {
    fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

/// Fetches resources from a content directory on disk.
#[derive(Debug, Clone)]
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentFetcher for FsFetcher {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full = self.root.join(path);
        std::fs::read_to_string(&full).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => FetchError::NotFound,
            _ => FetchError::Failed(format!("{}: {}", full.display(), err)),
        })
    }
}

/// Serves resources from an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    resources: HashMap<String, String>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource under its fetch path.
    pub fn insert(&mut self, path: impl Into<String>, body: impl Into<String>) -> &mut Self {
        self.resources.insert(path.into(), body.into());
        self
    }
}

impl ContentFetcher for MemoryFetcher {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.resources
            .get(path)
            .cloned()
            .ok_or(FetchError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fetcher_misses_are_not_found() {
        let mut fetcher = MemoryFetcher::new();
        fetcher.insert("locales/en/home.md", "# Home");

        assert_eq!(
            fetcher.fetch("locales/en/home.md").unwrap(),
            "# Home".to_string()
        );
        assert!(matches!(
            fetcher.fetch("locales/en/absent.md"),
            Err(FetchError::NotFound)
        ));
    }

    #[test]
    fn fs_fetcher_reports_missing_files_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FsFetcher::new(dir.path());
        assert!(matches!(
            fetcher.fetch("locales/en/home.md"),
            Err(FetchError::NotFound)
        ));

        let locale_dir = dir.path().join("locales/en");
        std::fs::create_dir_all(&locale_dir).unwrap();
        std::fs::write(locale_dir.join("home.md"), "# hello").unwrap();
        assert_eq!(fetcher.fetch("locales/en/home.md").unwrap(), "# hello");
    }
}
