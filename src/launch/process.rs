// Process launcher - fire-and-forget spawning

use crate::launch::error::{LaunchError, Result};
use crate::launch::types::CommandLine;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Seam for starting external processes
#[async_trait]
pub trait ProcessLauncher: Send + Sync {
    /// Start `path` with `args` without waiting for it.
    /// Returns the OS process id when available.
    async fn launch(&self, path: &Path, args: &CommandLine) -> Result<Option<u32>>;
}

/// Launcher backed by `tokio::process`
#[derive(Debug, Clone, Default)]
pub struct TokioLauncher;

#[async_trait]
impl ProcessLauncher for TokioLauncher {
    async fn launch(&self, path: &Path, args: &CommandLine) -> Result<Option<u32>> {
        let tool = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut command = Command::new(path);
        apply_args(&mut command, args);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(false);

        debug!(path = %path.display(), args = %args, "spawning process");

        let child = command.spawn().map_err(|e| {
            warn!(path = %path.display(), error = %e, "spawn failed");
            LaunchError::SpawnFailed {
                tool: tool.clone(),
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        let pid = child.id();
        info!(path = %path.display(), pid = ?pid, "process started");
        // Dropping the handle detaches the child; its lifetime is not supervised
        drop(child);
        Ok(pid)
    }
}

/// Windows programs parse their own command line, so pass it through untouched
#[cfg(windows)]
fn apply_args(command: &mut Command, args: &CommandLine) {
    if !args.text.is_empty() {
        command.raw_arg(&args.text);
    }
}

#[cfg(not(windows))]
fn apply_args(command: &mut Command, args: &CommandLine) {
    command.args(&args.argv);
}
