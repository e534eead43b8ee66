// Data types for Discovery module
#![allow(dead_code)]

use serde::Serialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A single resolution request
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Exact filename to look for (e.g. "putty.exe")
    target_name: String,
    /// Tool-specific roots searched before the catalog, in order
    extra_roots: Vec<PathBuf>,
}

impl SearchQuery {
    pub fn new(target_name: impl Into<String>, extra_roots: &[PathBuf]) -> Self {
        Self {
            target_name: target_name.into(),
            extra_roots: extra_roots.to_vec(),
        }
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn extra_roots(&self) -> &[PathBuf] {
        &self.extra_roots
    }

    /// Whether `file_name` names the target, using the host filesystem's case rules
    pub fn matches(&self, file_name: &OsStr) -> bool {
        let Some(name) = file_name.to_str() else {
            return false;
        };
        if cfg!(any(windows, target_os = "macos")) {
            name.eq_ignore_ascii_case(&self.target_name)
        } else {
            name == self.target_name
        }
    }
}

/// Outcome of a resolution: a found path or an explicit miss
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum SearchResult {
    Found(PathBuf),
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }
}
