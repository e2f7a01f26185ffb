//! Display Name Table
//!
//! Human labels cho các model features. Unknown keys fall back to the key
//! with underscores replaced by spaces.

use std::collections::HashMap;

/// Labels for every feature the fraud model is trained on
static STANDARD_LABELS: [(&str, &str); 14] = [
    ("transaction_amount", "Transaction Amount"),
    ("transaction_amount_log", "Transaction Amount (Log)"),
    ("account_age_days", "Account Age (Days)"),
    ("is_high_value", "High Value Transaction"),
    ("hour", "Transaction Hour"),
    ("weekday", "Day of Week"),
    ("month", "Transaction Month"),
    ("channel_ATM", "ATM Channel"),
    ("channel_Atm", "ATM Channel"),
    ("channel_Mobile", "Mobile Channel"),
    ("channel_Pos", "POS Channel"),
    ("channel_Web", "Web Channel"),
    ("kyc_verified_No", "KYC Not Verified"),
    ("kyc_verified_Yes", "KYC Verified"),
];

/// Immutable key -> label lookup, injected into the ranker
#[derive(Debug, Clone, Default)]
pub struct DisplayNameTable {
    labels: HashMap<String, String>,
}

impl DisplayNameTable {
    pub fn standard() -> Self {
        Self::with_entries(STANDARD_LABELS.iter().copied())
    }

    pub fn with_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            labels: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn label(&self, key: &str) -> String {
        match self.labels.get(key) {
            Some(label) => label.clone(),
            None => key.replace('_', " "),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.labels.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
