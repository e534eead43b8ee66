// PATH search - first matching segment wins

use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::debug;

/// Characters stripped from both ends of each PATH segment
const SEGMENT_TRIM: &[char] = &['"', '\'', ' ', '\t'];

/// Scan a PATH-like value for `target_name`, returning the first regular file found
pub fn search_path_var(path_var: Option<&OsStr>, target_name: &str) -> Option<PathBuf> {
    let path_var = path_var.filter(|v| !v.is_empty())?;

    for segment in std::env::split_paths(path_var) {
        let Some(dir) = clean_segment(segment) else {
            continue;
        };

        let candidate = dir.join(target_name);
        // is_file() swallows permission and length errors, so bad segments are skipped
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found in PATH");
            return Some(candidate);
        }
    }

    None
}

/// Trim quotes and whitespace; returns `None` for blank segments
fn clean_segment(segment: PathBuf) -> Option<PathBuf> {
    let cleaned = match segment.to_str() {
        Some(s) => PathBuf::from(s.trim_matches(SEGMENT_TRIM)),
        None => segment,
    };
    if cleaned.as_os_str().is_empty() {
        debug!("skipping blank PATH segment");
        return None;
    }
    Some(cleaned)
}
