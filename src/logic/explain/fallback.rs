use super::types::ImportanceMap;

// Importance of the deployed model (v1.0.0), served when the live map is empty
static DEFAULT_IMPORTANCE: [(&str, f64); 9] = [
    ("transaction_amount", 0.245),
    ("transaction_amount_log", 0.198),
    ("account_age_days", 0.156),
    ("is_high_value", 0.132),
    ("hour", 0.089),
    ("channel_Mobile", 0.067),
    ("kyc_verified_No", 0.054),
    ("channel_ATM", 0.032),
    ("weekday", 0.027),
];

pub fn default_importance() -> ImportanceMap {
    DEFAULT_IMPORTANCE
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect()
}
