//! Metrics Summary
//!
//! Model metrics keep the order the service sent them in. The summary shows
//! the first few, unsorted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One metric in source order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEntry {
    pub key: String,
    pub value: f64,
}

/// Ordered entries from the open payload map. Non-numeric values are skipped.
pub fn entries_from_map(map: &Map<String, Value>) -> Vec<MetricEntry> {
    map.iter()
        .filter_map(|(key, value)| {
            value.as_f64().map(|value| MetricEntry {
                key: key.clone(),
                value,
            })
        })
        .collect()
}

/// Typed view for the fixed key set the modeling service reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub roc_auc: Option<f64>,
}

impl ModelMetrics {
    /// `None` when any required key is missing
    pub fn from_entries(entries: &[MetricEntry]) -> Option<Self> {
        let get = |key: &str| entries.iter().find(|e| e.key == key).map(|e| e.value);
        Some(Self {
            accuracy: get("accuracy")?,
            precision: get("precision")?,
            recall: get("recall")?,
            f1_score: get("f1_score")?,
            roc_auc: get("roc_auc"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummaryEntry {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub display: String, // e.g. "91.5%"
}

impl MetricSummaryEntry {
    fn new(entry: &MetricEntry) -> Self {
        Self {
            key: entry.key.clone(),
            label: entry.key.replace('_', " "),
            value: entry.value,
            display: format_percent(entry.value),
        }
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub entries: Vec<MetricSummaryEntry>,
}

impl MetricsSummary {
    /// First `limit` entries in source order
    pub fn extract(entries: &[MetricEntry], limit: usize) -> Self {
        Self {
            entries: entries.iter().take(limit).map(MetricSummaryEntry::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
