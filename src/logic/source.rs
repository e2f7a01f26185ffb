//! Explanation Source
//!
//! Seam to whoever fetches the payload. The core only consumes the result;
//! retries and loading states stay with the caller.

use super::config::ExplainConfig;
use super::error::ExplainResult;
use super::payload::ExplainPayload;

pub trait ExplainSource {
    fn fetch(&self) -> ExplainResult<ExplainPayload>;
}

/// Blocking HTTP client for the modeling API
pub struct HttpExplainSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpExplainSource {
    pub fn new(config: &ExplainConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout())
            .build();

        Self {
            url: config.explain_url(),
            agent,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ExplainSource for HttpExplainSource {
    fn fetch(&self) -> ExplainResult<ExplainPayload> {
        log::debug!("Fetching explanation from {}", self.url);
        let response = self.agent.get(&self.url).call()?;
        ExplainPayload::from_reader(response.into_reader())
    }
}

/// Fixed payload (offline files, tests)
#[derive(Debug, Clone, Default)]
pub struct StaticExplainSource {
    payload: ExplainPayload,
}

impl StaticExplainSource {
    pub fn new(payload: ExplainPayload) -> Self {
        Self { payload }
    }
}

impl ExplainSource for StaticExplainSource {
    fn fetch(&self) -> ExplainResult<ExplainPayload> {
        Ok(self.payload.clone())
    }
}
