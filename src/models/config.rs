//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::services::search::CountStrategy;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Clone, Debug, Deserialize)]
/// Tuning for the member search endpoint.
pub struct SearchConfig {
    /// How the total number of matches is determined.
    #[serde(default)]
    pub count_strategy: CountStrategy,
    /// Page size used when the request does not specify one.
    #[serde(default = "default_per_page")]
    pub default_per_page: usize,
    /// Upper bound for a requested page size.
    #[serde(default = "max_per_page")]
    pub max_per_page: usize,
}

fn default_per_page() -> usize {
    20
}

fn max_per_page() -> usize {
    100
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            count_strategy: CountStrategy::default(),
            default_per_page: default_per_page(),
            max_per_page: max_per_page(),
        }
    }
}
