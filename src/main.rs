//! Fraud Explain - Main Entry Point
//!
//! Usage:
//!   fraud-explain <payload.json>   explain a saved payload
//!   fraud-explain --fetch          fetch from EXPLAIN_API_URL

use std::path::PathBuf;

use anyhow::{bail, Context};

use fraud_explain_core::constants;
use fraud_explain_core::{
    CommitOutcome, ExplainConfig, ExplainPayload, ExplainSession, ExplainSource, HttpExplainSource,
    StaticExplainSource,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    let config = ExplainConfig::from_env();
    let source: Box<dyn ExplainSource> = match std::env::args().nth(1).as_deref() {
        Some("--fetch") => {
            let http = HttpExplainSource::new(&config);
            log::info!("Explanation API: {}", http.url());
            Box::new(http)
        }
        Some(path) => {
            let path = PathBuf::from(path);
            let payload = ExplainPayload::from_path(&path)
                .with_context(|| format!("reading payload {}", path.display()))?;
            Box::new(StaticExplainSource::new(payload))
        }
        None => bail!("usage: fraud-explain <payload.json> | --fetch"),
    };

    let session = ExplainSession::new(config).on_narrative(|text| {
        log::info!("Narrative received ({} chars)", text.chars().count());
    });

    let outcome = session
        .refresh(source.as_ref())
        .context("backend may not be running")?;

    match (outcome, session.current()) {
        (CommitOutcome::Committed, Some(view)) => {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        _ => log::warn!("No explanation committed"),
    }

    Ok(())
}
