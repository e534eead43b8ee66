// Location catalog - broad install roots searched after PATH
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// A catalog location; existence is checked on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: PathBuf,
}

impl CatalogEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }
}

/// Source of catalog locations, re-evaluated on every resolution
#[derive(Debug, Clone, Default)]
pub enum LocationCatalog {
    /// Platform install roots, user folders and package-manager directories
    #[default]
    System,
    /// A caller-supplied list (tests, restricted environments)
    Fixed(Vec<PathBuf>),
}

impl LocationCatalog {
    /// Current catalog entries in search order
    pub fn entries(&self) -> Vec<CatalogEntry> {
        match self {
            LocationCatalog::System => system_locations(),
            LocationCatalog::Fixed(paths) => paths.iter().map(CatalogEntry::new).collect(),
        }
    }
}

fn system_locations() -> Vec<CatalogEntry> {
    let (primary, secondary) = program_roots();
    // Portable apps commonly live under local app data or the desktop
    let user_dirs = dirs::data_local_dir().into_iter().chain(dirs::desktop_dir());

    ordered_locations(primary, secondary, user_dirs.collect(), package_manager_dirs())
        .into_iter()
        .map(CatalogEntry::new)
        .collect()
}

/// Program roots, then user folders, then package-manager directories, without repeats
fn ordered_locations(
    primary: Option<PathBuf>,
    secondary: Option<PathBuf>,
    user_dirs: Vec<PathBuf>,
    package_dirs: Vec<PathBuf>,
) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = primary.into_iter().chain(secondary).collect();
    roots.extend(user_dirs);
    roots.extend(package_dirs);
    dedupe(roots)
}

#[cfg(windows)]
fn program_roots() -> (Option<PathBuf>, Option<PathBuf>) {
    let read = |name: &str| {
        std::env::var_os(name)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    };
    (read("ProgramFiles"), read("ProgramFiles(x86)"))
}

#[cfg(not(windows))]
fn program_roots() -> (Option<PathBuf>, Option<PathBuf>) {
    (Some(PathBuf::from("/opt")), Some(PathBuf::from("/usr/local")))
}

#[cfg(windows)]
fn package_manager_dirs() -> Vec<PathBuf> {
    let program_data = std::env::var_os("ProgramData")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"));
    vec![program_data.join("chocolatey").join("bin"), PathBuf::from(r"C:\tools")]
}

#[cfg(target_os = "macos")]
fn package_manager_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("/opt/homebrew/bin"), PathBuf::from("/opt/local/bin")]
}

#[cfg(all(unix, not(target_os = "macos")))]
fn package_manager_dirs() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/home/linuxbrew/.linuxbrew/bin"),
        PathBuf::from("/snap/bin"),
    ]
}

/// Drop repeated roots, keeping the first occurrence
fn dedupe(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::with_capacity(paths.len());
    for path in paths {
        if !out.iter().any(|seen: &PathBuf| same_root(seen, &path)) {
            out.push(path);
        }
    }
    out
}

fn same_root(a: &Path, b: &Path) -> bool {
    if cfg!(windows) {
        a.to_string_lossy().eq_ignore_ascii_case(&b.to_string_lossy())
    } else {
        a == b
    }
}
