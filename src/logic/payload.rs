//! Explanation Payload
//!
//! Response of `GET /api/modeling/explain`. Every field is optional; an
//! absent or `null` field is treated as empty.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ExplainResult;
use super::explain::ImportanceMap;
use super::metrics::{entries_from_map, MetricEntry};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplainPayload {
    pub feature_importance: Option<ImportanceMap>,
    pub explanation: Option<String>,
    pub metrics: Option<Map<String, Value>>,
}

impl ExplainPayload {
    pub fn from_json_str(json: &str) -> ExplainResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> ExplainResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> ExplainResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Missing map -> empty map (the ranker applies the fallback)
    pub fn importance(&self) -> ImportanceMap {
        self.feature_importance.clone().unwrap_or_default()
    }

    /// Missing narrative -> empty string
    pub fn narrative(&self) -> &str {
        self.explanation.as_deref().unwrap_or("")
    }

    /// Missing metrics -> `None` (summary omitted)
    pub fn metric_entries(&self) -> Option<Vec<MetricEntry>> {
        self.metrics.as_ref().map(entries_from_map)
    }
}
