// Executable resolver - orchestrates the full search order
#![allow(dead_code)]

use crate::discovery::catalog::{CatalogEntry, LocationCatalog};
use crate::discovery::config::DiscoveryConfig;
use crate::discovery::error::{DiscoveryError, Result};
use crate::discovery::path_search::search_path_var;
use crate::discovery::tree_search::candidate_files;
use crate::discovery::types::{SearchQuery, SearchResult};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

/// Where the resolver looks. `None` fields are read from the live process on every call.
#[derive(Debug, Clone, Default)]
pub struct SearchEnv {
    /// PATH-like value to scan instead of `PATH`
    pub path_var: Option<OsString>,
    /// Directory treated as the running program's own directory
    pub exe_dir: Option<PathBuf>,
    /// Catalog of broad fallback roots
    pub catalog: LocationCatalog,
}

impl SearchEnv {
    fn path_var(&self) -> Option<OsString> {
        self.path_var.clone().or_else(|| std::env::var_os("PATH"))
    }

    fn exe_dir(&self) -> Option<PathBuf> {
        self.exe_dir.clone().or_else(|| {
            std::env::current_exe()
                .ok()
                .and_then(|exe| exe.parent().map(Path::to_path_buf))
        })
    }
}

/// Finds executables by name; stateless between calls
#[derive(Debug, Clone, Default)]
pub struct ExecutableResolver {
    env: SearchEnv,
    config: DiscoveryConfig,
}

impl ExecutableResolver {
    pub fn new(env: SearchEnv, config: DiscoveryConfig) -> Self {
        Self { env, config }
    }

    /// Resolver bound to the real process environment
    pub fn from_env(config: DiscoveryConfig) -> Self {
        Self::new(SearchEnv::default(), config)
    }

    /// Resolve `target_name`, trying `extra_roots` ahead of the catalog
    pub fn resolve(&self, target_name: &str, extra_roots: &[PathBuf]) -> SearchResult {
        let never = AtomicBool::new(false);
        let query = SearchQuery::new(target_name, extra_roots);
        // Cannot be cancelled, so the walk always runs to an answer
        self.resolve_query(&query, &never)
            .unwrap_or(SearchResult::NotFound)
    }

    /// Like [`resolve`](Self::resolve), but returns `None` once `cancel` is set
    pub fn resolve_cancellable(
        &self,
        target_name: &str,
        extra_roots: &[PathBuf],
        cancel: &AtomicBool,
    ) -> Option<SearchResult> {
        let query = SearchQuery::new(target_name, extra_roots);
        self.resolve_query(&query, cancel)
    }

    /// Run a resolution on the blocking pool
    pub async fn resolve_async(
        &self,
        target_name: &str,
        extra_roots: &[PathBuf],
        cancel: Arc<AtomicBool>,
    ) -> Result<SearchResult> {
        let resolver = self.clone();
        let query = SearchQuery::new(target_name, extra_roots);
        let name = target_name.to_string();

        let outcome = tokio::task::spawn_blocking(move || resolver.resolve_query(&query, &cancel))
            .await
            .map_err(|e| DiscoveryError::TaskFailed(name.clone(), e.to_string()))?;

        outcome.ok_or(DiscoveryError::Cancelled(name))
    }

    fn resolve_query(&self, query: &SearchQuery, cancel: &AtomicBool) -> Option<SearchResult> {
        let target = query.target_name();
        debug!(target = %target, "resolving executable");

        // 1. PATH
        if cancelled(cancel, target) {
            return None;
        }
        if let Some(found) = search_path_var(self.env.path_var().as_deref(), target) {
            info!(target = %target, path = %found.display(), stage = "path", "executable found");
            return Some(SearchResult::Found(found));
        }

        // 2. Directory of the running program
        if cancelled(cancel, target) {
            return None;
        }
        if let Some(dir) = self.env.exe_dir() {
            let candidate = dir.join(target);
            if candidate.is_file() {
                info!(target = %target, path = %candidate.display(), stage = "local", "executable found");
                return Some(SearchResult::Found(candidate));
            }
        }

        // 3. Caller roots, then catalog roots
        let roots = query
            .extra_roots()
            .iter()
            .map(CatalogEntry::new)
            .chain(self.env.catalog.entries());

        for root in roots {
            if cancelled(cancel, target) {
                return None;
            }
            if !root.exists() {
                debug!(root = %root.path.display(), "skipping missing root");
                continue;
            }

            debug!(root = %root.path.display(), "searching tree");
            for file in candidate_files(&root.path, &self.config) {
                if cancelled(cancel, target) {
                    return None;
                }
                if file.file_name().is_some_and(|name| query.matches(name)) {
                    info!(target = %target, path = %file.display(), stage = "tree", "executable found");
                    return Some(SearchResult::Found(file));
                }
            }
        }

        info!(target = %target, "executable not found");
        Some(SearchResult::NotFound)
    }
}

fn cancelled(cancel: &AtomicBool, target: &str) -> bool {
    let stop = cancel.load(Ordering::Relaxed);
    if stop {
        debug!(target = %target, "resolution cancelled");
    }
    stop
}
