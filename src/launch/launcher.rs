// Port launcher - the per-port invocation surface
#![allow(dead_code)]

use crate::discovery::{ExecutableResolver, SearchResult};
use crate::launch::config::LaunchConfig;
use crate::launch::error::{LaunchError, Result};
use crate::launch::process::ProcessLauncher;
use crate::launch::profile::LaunchProfile;
use crate::launch::types::{Launched, ToolId};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tracing::{debug, info, warn};

/// Opens terminal tools on serial ports
pub struct PortLauncher<'a> {
    config: &'a LaunchConfig,
    resolver: ExecutableResolver,
    process: Arc<dyn ProcessLauncher>,
}

impl<'a> PortLauncher<'a> {
    pub fn new(
        config: &'a LaunchConfig,
        resolver: ExecutableResolver,
        process: Arc<dyn ProcessLauncher>,
    ) -> Self {
        Self {
            config,
            resolver,
            process,
        }
    }

    /// Open PuTTY on `port`
    pub async fn launch_putty(&self, port: &str) -> Result<Launched> {
        self.launch(ToolId::Putty, port).await
    }

    /// Open RealTerm on `port`
    pub async fn launch_realterm(&self, port: &str) -> Result<Launched> {
        self.launch(ToolId::RealTerm, port).await
    }

    /// Resolve the tool and start it bound to `port`
    pub async fn launch(&self, tool: ToolId, port: &str) -> Result<Launched> {
        let profile = LaunchProfile::for_tool(tool);
        let path = self.executable_for(tool).await?;
        let args = profile.command_line(port, self.config.baud_rate);

        info!(tool = %tool, port = %port, path = %path.display(), "launching terminal");

        let pid = self
            .process
            .launch(&path, &args)
            .await
            .map_err(|e| relabel(e, profile.display_name))?;

        Ok(Launched {
            tool,
            path,
            args: args.text,
            pid,
        })
    }

    /// Argument string `launch` would use for `tool` on `port`
    pub fn args_for(&self, tool: ToolId, port: &str) -> String {
        LaunchProfile::for_tool(tool).args(port, self.config.baud_rate)
    }

    /// Config override, then discovery, then the vendor default path
    pub async fn executable_for(&self, tool: ToolId) -> Result<PathBuf> {
        let profile = LaunchProfile::for_tool(tool);

        if let Some(path) = self.config.override_for(tool) {
            debug!(tool = %tool, path = %path.display(), "using configured path");
            return Ok(path.to_path_buf());
        }

        let found = self
            .resolver
            .resolve_async(
                profile.executable_name,
                &profile.install_roots(),
                Arc::new(AtomicBool::new(false)),
            )
            .await?;
        if let SearchResult::Found(path) = found {
            return Ok(path);
        }

        if let Some(default) = profile.default_path.map(Path::new) {
            if default.is_file() {
                debug!(tool = %tool, path = %default.display(), "using vendor default path");
                return Ok(default.to_path_buf());
            }
        }

        warn!(tool = %tool, "no executable resolved");
        Err(LaunchError::DiscoveryMiss {
            tool: profile.display_name.to_string(),
        })
    }
}

/// Report spawn errors under the tool's display name rather than its filename
fn relabel(err: LaunchError, display_name: &str) -> LaunchError {
    match err {
        LaunchError::SpawnFailed { path, message, .. } => LaunchError::SpawnFailed {
            tool: display_name.to_string(),
            path,
            message,
        },
        other => other,
    }
}
