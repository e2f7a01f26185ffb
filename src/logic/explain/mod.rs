//! Explain Module - Feature Importance Ranking
//!
//! Chuyển feature importance map thành top-k list với labels và phần trăm.

pub mod types;
pub mod labels;
pub mod fallback;
pub mod engine;


pub use types::{FeatureWeight, ImportanceMap};
pub use labels::DisplayNameTable;
pub use fallback::default_importance;
pub use engine::ImportanceRanker;
