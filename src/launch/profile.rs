// Launch profiles - per-tool executable names, install roots and argument grammar
#![allow(dead_code)]

use crate::discovery::{ExecutableResolver, SearchResult};
use crate::launch::types::{CommandLine, ToolId};
use std::fmt;
use std::path::PathBuf;

/// Static description of one external tool
pub struct LaunchProfile {
    pub tool: ToolId,
    pub display_name: &'static str,
    /// Filename searched for during discovery
    pub executable_name: &'static str,
    /// Vendor install location tried after a discovery miss
    pub default_path: Option<&'static str>,
    install_roots: fn() -> Vec<PathBuf>,
    build_command: fn(&str, u32) -> CommandLine,
}

impl LaunchProfile {
    pub fn for_tool(tool: ToolId) -> &'static LaunchProfile {
        match tool {
            ToolId::Putty => &PUTTY,
            ToolId::RealTerm => &REALTERM,
        }
    }

    /// Known install folders, searched ahead of the generic catalog
    pub fn install_roots(&self) -> Vec<PathBuf> {
        (self.install_roots)()
    }

    /// Command-line arguments for `port` at `baud`; pure and infallible
    pub fn args(&self, port: &str, baud: u32) -> String {
        self.command_line(port, baud).text
    }

    /// Flat text and argv for `port` at `baud`; the port is one argv entry, unmodified
    pub fn command_line(&self, port: &str, baud: u32) -> CommandLine {
        (self.build_command)(port, baud)
    }

    /// Run discovery with this tool's install roots
    pub fn locate(&self, resolver: &ExecutableResolver) -> SearchResult {
        resolver.resolve(self.executable_name, &self.install_roots())
    }
}

impl fmt::Debug for LaunchProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaunchProfile")
            .field("tool", &self.tool)
            .field("executable_name", &self.executable_name)
            .field("default_path", &self.default_path)
            .finish_non_exhaustive()
    }
}

pub static PUTTY: LaunchProfile = LaunchProfile {
    tool: ToolId::Putty,
    display_name: "PuTTY",
    executable_name: if cfg!(windows) { "putty.exe" } else { "putty" },
    default_path: None,
    install_roots: putty_roots,
    build_command: putty_command,
};

pub static REALTERM: LaunchProfile = LaunchProfile {
    tool: ToolId::RealTerm,
    display_name: "RealTerm",
    executable_name: if cfg!(windows) { "realterm.exe" } else { "realterm" },
    default_path: if cfg!(windows) {
        Some(r"C:\Program Files (x86)\BEL\Realterm\realterm.exe")
    } else {
        None
    },
    install_roots: realterm_roots,
    build_command: realterm_command,
};

/// Lookup preconfigured with PuTTY's install roots
pub fn find_putty(resolver: &ExecutableResolver) -> SearchResult {
    PUTTY.locate(resolver)
}

/// Lookup preconfigured with RealTerm's install roots
pub fn find_realterm(resolver: &ExecutableResolver) -> SearchResult {
    REALTERM.locate(resolver)
}

/// Remove a leading case-insensitive "COM" so "COM7" becomes "7"
pub fn strip_com_prefix(port: &str) -> &str {
    match port.get(..3) {
        Some(prefix) if prefix.eq_ignore_ascii_case("COM") => &port[3..],
        _ => port,
    }
}

fn putty_command(port: &str, baud: u32) -> CommandLine {
    let sercfg = format!("{},8,n,1,N", baud);
    CommandLine::new(
        format!("-serial {} -sercfg {}", port, sercfg),
        vec!["-serial".into(), port.into(), "-sercfg".into(), sercfg],
    )
}

fn realterm_command(port: &str, baud: u32) -> CommandLine {
    const SEND_STRINGS: [&str; 5] = [
        "controlModem -p",
        "controlModem -s",
        "updateModem -s",
        "updateModem",
        "test",
    ];

    let mut argv = vec![
        format!("PORT={}", strip_com_prefix(port)),
        format!("BAUD={}", baud),
        "DISPLAY=1".to_string(),
    ];
    let mut text = argv.join(" ");
    for s in SEND_STRINGS {
        text.push_str(&format!(" SENDSTR=\"{}\"", s));
        argv.push(format!("SENDSTR={}", s));
    }
    text.push_str(" CR=1 LF=1");
    argv.extend(["CR=1".to_string(), "LF=1".to_string()]);
    CommandLine::new(text, argv)
}

#[cfg(windows)]
fn putty_roots() -> Vec<PathBuf> {
    [
        r"C:\Program Files\PuTTY",
        r"C:\Program Files (x86)\PuTTY",
        r"C:\PuTTY",
        r"C:\tools\PuTTY",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(not(windows))]
fn putty_roots() -> Vec<PathBuf> {
    ["/opt/putty", "/usr/local/putty"]
        .into_iter()
        .map(PathBuf::from)
        .collect()
}

#[cfg(windows)]
fn realterm_roots() -> Vec<PathBuf> {
    [
        r"C:\Program Files\BEL\Realterm",
        r"C:\Program Files (x86)\BEL\Realterm",
        r"C:\Program Files\RealTerm",
        r"C:\Program Files (x86)\RealTerm",
        r"C:\RealTerm",
        r"C:\tools\RealTerm",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(not(windows))]
fn realterm_roots() -> Vec<PathBuf> {
    ["/opt/realterm", "/opt/BEL/Realterm"]
        .into_iter()
        .map(PathBuf::from)
        .collect()
}
