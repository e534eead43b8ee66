// Recursive file search under a single root
// Unreadable subtrees are dropped from the walk instead of aborting it

use crate::discovery::config::DiscoveryConfig;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Lazily yield every regular file below `root`
///
/// Entries the walker cannot read (permission denied, vanished directories,
/// symlink loops) are logged at debug level and skipped. Yield order is the
/// filesystem's enumeration order and carries no meaning.
pub fn candidate_files(root: &Path, config: &DiscoveryConfig) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| {
            let file_type = entry.file_type();
            file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
        })
        .map(walkdir::DirEntry::into_path)
}

