//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default explanation server, only edit this file.

/// Default explanation API server URL
///
/// This is the fallback URL when no environment variable is set.
/// For development: http://localhost:8000
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Route serving `{ explanation, feature_importance, metrics }`
pub const EXPLAIN_ENDPOINT: &str = "/api/modeling/explain";

/// Maximum number of ranked features shown
pub const DEFAULT_TOP_K: usize = 5;

/// Maximum number of metrics shown in the summary
pub const DEFAULT_METRICS_LIMIT: usize = 4;

/// Default HTTP timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Fraud Explain";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get explanation API URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var("EXPLAIN_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Get top-k bound from environment or use default.
/// Zero or values above the default are ignored.
pub fn get_top_k() -> usize {
    read_bounded("EXPLAIN_TOP_K", DEFAULT_TOP_K)
}

/// Get metrics summary bound from environment or use default
pub fn get_metrics_limit() -> usize {
    read_bounded("EXPLAIN_METRICS_LIMIT", DEFAULT_METRICS_LIMIT)
}

/// Get HTTP timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var("EXPLAIN_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

fn read_bounded(var: &str, default: usize) -> usize {
    std::env::var(var)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .filter(|n: &usize| (1..=default).contains(n))
        .unwrap_or(default)
}
