// Launch module - turns a port identifier into a running terminal tool
#![allow(unused_imports)]

pub mod config;
pub mod error;
pub mod launcher;
pub mod process;
pub mod profile;
pub mod types;

pub use config::LaunchConfig;
pub use error::{ConfigError, LaunchError, Result};
pub use launcher::PortLauncher;
pub use process::{ProcessLauncher, TokioLauncher};
pub use profile::{LaunchProfile, find_putty, find_realterm, strip_com_prefix};
pub use types::{CommandLine, Launched, ToolId};
