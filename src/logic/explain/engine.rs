use std::cmp::Ordering;

use super::fallback::default_importance;
use super::labels::DisplayNameTable;
use super::types::{FeatureWeight, ImportanceMap};
use crate::constants::DEFAULT_TOP_K;

/// Normalizes an importance map into a bounded, sorted, labeled list
#[derive(Debug, Clone)]
pub struct ImportanceRanker {
    labels: DisplayNameTable,
    top_k: usize,
}

impl Default for ImportanceRanker {
    fn default() -> Self {
        Self::new(DisplayNameTable::standard(), DEFAULT_TOP_K)
    }
}

impl ImportanceRanker {
    /// `top_k` is clamped to 1..=5
    pub fn new(labels: DisplayNameTable, top_k: usize) -> Self {
        Self {
            labels,
            top_k: top_k.clamp(1, DEFAULT_TOP_K),
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn labels(&self) -> &DisplayNameTable {
        &self.labels
    }

    pub fn rank(&self, live: &ImportanceMap) -> Vec<FeatureWeight> {
        // Empty map -> whole fallback map. A non-empty map is never padded.
        let fallback;
        let map = if live.is_empty() {
            log::debug!("Feature importance empty - using default model importance");
            fallback = default_importance();
            &fallback
        } else {
            live
        };

        let mut weights: Vec<FeatureWeight> = map
            .iter()
            .map(|(key, &raw)| FeatureWeight {
                key: key.clone(),
                display_name: self.labels.label(key),
                weight_pct: raw * 100.0,
            })
            .collect();

        // Sort by weight DESC, ties by key ASC, NaN last
        weights.sort_by(|a, b| compare_desc(a.weight_pct, b.weight_pct).then_with(|| a.key.cmp(&b.key)));

        // Take top k
        weights.truncate(self.top_k);
        weights
    }
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
