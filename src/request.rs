//! The immutable per-invocation move request and its extension filter.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::errors::RequestError;

/// File extension filter, stored with its leading dot (".png").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter(String);

impl ExtensionFilter {
    pub fn new(ext: &str) -> Result<Self, RequestError> {
        let ext = ext.trim();
        // One extension only: `matches` compares against the last one.
        if !ext.starts_with('.') || ext.len() < 2 || ext[1..].contains(['.', '/', '\\']) {
            return Err(RequestError::InvalidFilter(ext.to_string()));
        }
        Ok(Self(ext.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Match the last extension of `name` (".gz" for "a.tar.gz"); dotfiles have none.
    pub fn matches(&self, name: &OsStr) -> bool {
        Path::new(name)
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.0.len() == ext.len() + 1 && self.0.ends_with(ext))
    }
}

/// What to move and where. Built once per invocation through [`MoveRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    source_path: PathBuf,
    target_path: PathBuf,
    extension_filter: Option<ExtensionFilter>,
}

impl MoveRequest {
    /// Validate and build a request. An empty filter string means "no filter".
    pub fn new(
        source_path: impl Into<PathBuf>,
        target_path: impl Into<PathBuf>,
        filter: Option<&str>,
    ) -> Result<Self, RequestError> {
        let source_path = source_path.into();
        let target_path = target_path.into();
        if source_path.as_os_str().is_empty() {
            return Err(RequestError::EmptySourcePath);
        }
        if target_path.as_os_str().is_empty() {
            return Err(RequestError::EmptyTargetPath);
        }
        let extension_filter = match filter.map(str::trim) {
            None | Some("") => None,
            Some(f) => Some(ExtensionFilter::new(f)?),
        };
        Ok(Self {
            source_path,
            target_path,
            extension_filter,
        })
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn extension_filter(&self) -> Option<&ExtensionFilter> {
        self.extension_filter.as_ref()
    }

    /// True if a file with this name should be relocated.
    pub fn accepts_file(&self, name: &OsStr) -> bool {
        self.extension_filter
            .as_ref()
            .is_none_or(|f| f.matches(name))
    }
}
