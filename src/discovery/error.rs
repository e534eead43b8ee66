// Error types for Discovery module
// Unreadable directories and PATH segments are skipped, never reported here

use thiserror::Error;

/// Discovery error types
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Resolution of '{0}' was cancelled")]
    Cancelled(String),

    #[error("Background resolution of '{0}' failed: {1}")]
    TaskFailed(String, String),
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
