use crate::domain::verdict::ScoringVerdict;
use thiserror::Error;

pub mod http;
pub mod mock;
pub mod response;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("invalid scorer url `{0}`")]
    InvalidUrl(String),
    #[error("unauthorized request: {body}")]
    Unauthorized { body: String },
    #[error("invalid request ({status}): {body}")]
    InvalidRequest { status: u16, body: String },
    #[error("scorer error ({status}): {body}")]
    Server { status: u16, body: String },
    #[error("scorer timed out after {0} ms")]
    Timeout(u64),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unparseable scorer response: {0}")]
    Parse(String),
    #[error("scorer returned an error: {0}")]
    Vendor(String),
}

#[async_trait::async_trait]
pub trait RiskScorer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn assess(&self, payload: &str) -> Result<ScoringVerdict, ScoringError>;
}
