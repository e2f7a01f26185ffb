//! Fraud Explain Core
//!
//! Turns the explanation service payload (feature importance map, generated
//! narrative, model metrics) into display-ready artifacts.

pub mod constants;
pub mod logic;

pub use logic::config::ExplainConfig;
pub use logic::error::{ExplainError, ExplainResult};
pub use logic::explain::{DisplayNameTable, FeatureWeight, ImportanceMap, ImportanceRanker};
pub use logic::metrics::{MetricEntry, MetricSummaryEntry, MetricsSummary, ModelMetrics};
pub use logic::narrative::normalize;
pub use logic::payload::ExplainPayload;
pub use logic::session::{build_view, CommitOutcome, ExplainSession, ExplainView, RequestTicket};
pub use logic::source::{ExplainSource, HttpExplainSource, StaticExplainSource};
