// Discovery configuration

/// Default recursion cap for tree searches
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Tree search tuning
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Maximum descent below each search root
    pub max_depth: usize,
    /// Follow symlinked directories while walking (default: false)
    pub follow_links: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            follow_links: false,
        }
    }
}
