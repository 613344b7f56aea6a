//! Registry connection settings.
//!
//! # Design
//! Endpoint, API key and page size travel together as a plain value that is
//! injected at client construction. Tests point at the in-workspace mock
//! registry by building a config, not by patching a global.

/// Production endpoint of the registry's HTTP JSON API.
pub const DEFAULT_ENDPOINT: &str = "https://api.rescuegroups.org/http/v2.json";

/// Demo API key shipped with the original deployment.
pub const DEFAULT_API_KEY: &str = "tHFlqnHF";

/// Records requested per search page. One page is all the card view shows;
/// there is no pagination beyond it.
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Connection settings for one registry deployment.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub endpoint: String,
    pub api_key: String,
    pub page_size: u32,
}

impl RegistryConfig {
    /// Config pointing at `endpoint`, keeping the default key and page size.
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            ..Self::default()
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
