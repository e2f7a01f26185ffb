//! Logic Module - Explanation Pipeline
//!
//! Chứa các engines xử lý payload từ explanation service.
//!
//! ## Layout
//! - `explain/` - Importance ranking (fallback map, display names, top-k)
//! - `narrative/` - Ordered rewrite rules for the generated narrative
//! - `metrics` - Metrics summary extraction
//! - `payload`, `source`, `session` - Fetch seam and generation-guarded commit

pub mod config;
pub mod error;

pub mod explain;
pub mod narrative;
pub mod metrics;

pub mod payload;
pub mod source;
pub mod session;
