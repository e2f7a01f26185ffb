use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw feature importance as returned by the model service.
/// Key = feature name, value = weight (nominally 0.0 - 1.0).
pub type ImportanceMap = HashMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub key: String,
    pub display_name: String,
    pub weight_pct: f64, // raw weight * 100, unclamped
}

impl FeatureWeight {
    /// Width hint for bar rendering, clamped to 0..=100
    pub fn bar_width(&self) -> f64 {
        if self.weight_pct.is_nan() {
            return 0.0;
        }
        self.weight_pct.clamp(0.0, 100.0)
    }
}
