// Discovery module - locates external executables on the host
#![allow(unused_imports)]
// Search order: PATH, co-located directory, caller roots, then the location catalog

pub mod catalog;
pub mod config;
pub mod error;
pub mod path_search;
pub mod resolver;
pub mod tree_search;
pub mod types;

pub use catalog::{CatalogEntry, LocationCatalog};
pub use config::DiscoveryConfig;
pub use error::{DiscoveryError, Result};
pub use resolver::{ExecutableResolver, SearchEnv};
pub use types::{SearchQuery, SearchResult};
