//! Pipeline configuration

use std::time::Duration;

use crate::constants;

/// Explanation pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainConfig {
    /// Base URL of the explanation API (no trailing slash)
    pub api_url: String,

    /// Number of ranked features kept (1..=5)
    pub top_k: usize,

    /// Number of metrics kept in the summary (1..=4)
    pub metrics_limit: usize,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ExplainConfig {
    fn default() -> Self {
        Self {
            api_url: constants::DEFAULT_API_URL.to_string(),
            top_k: constants::DEFAULT_TOP_K,
            metrics_limit: constants::DEFAULT_METRICS_LIMIT,
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ExplainConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: constants::get_api_url(),
            top_k: constants::get_top_k(),
            metrics_limit: constants::get_metrics_limit(),
            timeout_secs: constants::get_timeout_secs(),
        }
    }

    /// Full URL of the explain route
    pub fn explain_url(&self) -> String {
        format!("{}{}", self.api_url, constants::EXPLAIN_ENDPOINT)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = ExplainConfig::default();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.metrics_limit, 4);
        assert_eq!(config.explain_url(), "http://localhost:8000/api/modeling/explain");
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
