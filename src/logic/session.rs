//! Explain Session - Generation-guarded commit
//!
//! Mỗi request lấy một ticket. Chỉ ticket mới nhất được commit kết quả;
//! stale completions are discarded instead of "last to resolve wins".

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use super::config::ExplainConfig;
use super::error::ExplainResult;
use super::explain::{DisplayNameTable, FeatureWeight, ImportanceRanker};
use super::metrics::MetricsSummary;
use super::narrative::normalize;
use super::payload::ExplainPayload;
use super::source::ExplainSource;

/// Display-ready artifacts derived from one payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainView {
    pub features: Vec<FeatureWeight>,
    pub markup: String,
    pub metrics: Option<MetricsSummary>,
    pub generated_at: i64,
}

/// Pure derivation; ranking and normalization are independent of each other.
/// The caller stamps the view.
pub fn build_view(
    payload: &ExplainPayload,
    ranker: &ImportanceRanker,
    config: &ExplainConfig,
    generated_at: i64,
) -> ExplainView {
    ExplainView {
        features: ranker.rank(&payload.importance()),
        markup: normalize(payload.narrative()),
        metrics: payload
            .metric_entries()
            .map(|entries| MetricsSummary::extract(&entries, config.metrics_limit)),
        generated_at,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    Superseded,
}

pub type NarrativeListener = Box<dyn Fn(&str) + Send + Sync>;

/// Last committed view and the generation that produced it
#[derive(Debug, Default)]
struct CommittedState {
    generation: u64,
    view: Option<ExplainView>,
}

pub struct ExplainSession {
    config: ExplainConfig,
    ranker: ImportanceRanker,
    generation: AtomicU64,
    state: RwLock<CommittedState>,
    // Serializes listener calls so a stale commit cannot notify after a newer one
    delivery: Mutex<()>,
    listener: Option<NarrativeListener>,
}

impl ExplainSession {
    pub fn new(config: ExplainConfig) -> Self {
        let ranker = ImportanceRanker::new(DisplayNameTable::standard(), config.top_k);
        Self::with_ranker(config, ranker)
    }

    pub fn with_ranker(config: ExplainConfig, ranker: ImportanceRanker) -> Self {
        Self {
            config,
            ranker,
            generation: AtomicU64::new(0),
            state: RwLock::new(CommittedState::default()),
            delivery: Mutex::new(()),
            listener: None,
        }
    }

    /// Receives the raw narrative once per committed, non-empty result
    pub fn on_narrative<F>(mut self, listener: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn config(&self) -> &ExplainConfig {
        &self.config
    }

    /// Start a request. Invalidates every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket { generation }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }

    /// Commit the view for `ticket`. A ticket commits at most once, and only
    /// while it is the latest one issued.
    pub fn complete(&self, ticket: RequestTicket, payload: &ExplainPayload) -> CommitOutcome {
        let view = build_view(payload, &self.ranker, &self.config, Utc::now().timestamp());

        {
            let mut state = self.state.write();
            if !self.is_current(ticket) || ticket.generation <= state.generation {
                log::info!(
                    "Discarding explanation for request #{} (latest is #{}, committed #{})",
                    ticket.generation,
                    self.generation.load(Ordering::SeqCst),
                    state.generation
                );
                return CommitOutcome::Superseded;
            }
            state.generation = ticket.generation;
            state.view = Some(view);
        }

        self.notify(ticket, payload.narrative());
        CommitOutcome::Committed
    }

    fn notify(&self, ticket: RequestTicket, narrative: &str) {
        let Some(listener) = &self.listener else {
            return;
        };
        if narrative.is_empty() {
            return;
        }

        let _delivery = self.delivery.lock();
        // A newer commit landed after ours; its own delivery carries the latest text
        if self.state.read().generation != ticket.generation {
            return;
        }
        listener(narrative);
    }

    /// begin + fetch + complete. A fetch failure leaves the last view intact.
    pub fn refresh(&self, source: &dyn ExplainSource) -> ExplainResult<CommitOutcome> {
        let ticket = self.begin();
        let payload = source.fetch().map_err(|e| {
            log::warn!("Explanation fetch failed (request #{}): {}", ticket.generation, e);
            e
        })?;
        Ok(self.complete(ticket, &payload))
    }

    /// Last committed view
    pub fn current(&self) -> Option<ExplainView> {
        self.state.read().view.clone()
    }
}
