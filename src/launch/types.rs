// Data types for Launch module

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Supported external terminal tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    /// Generic serial client
    Putty,
    /// Scripted terminal with send-strings
    RealTerm,
}

impl ToolId {
    pub const ALL: [ToolId; 2] = [ToolId::Putty, ToolId::RealTerm];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolId::Putty => "putty",
            ToolId::RealTerm => "realterm",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown tool '{}' (expected putty or realterm)", s))
    }
}

/// Arguments for one launch in both of the forms a platform may need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Flat command line, handed to Windows programs untouched
    pub text: String,
    /// One entry per argument, passed through `execve` without re-parsing
    pub argv: Vec<String>,
}

impl CommandLine {
    pub fn new(text: impl Into<String>, argv: Vec<String>) -> Self {
        Self {
            text: text.into(),
            argv,
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A successfully started process
#[derive(Debug, Clone, Serialize)]
pub struct Launched {
    pub tool: ToolId,
    pub path: PathBuf,
    pub args: String,
    /// OS process id, when the platform reports one
    pub pid: Option<u32>,
}
