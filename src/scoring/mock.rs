use crate::domain::verdict::ScoringVerdict;
use crate::scoring::{RiskScorer, ScoringError};

pub struct MockScorer {
    pub behavior: String,
}

#[async_trait::async_trait]
impl RiskScorer for MockScorer {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn assess(&self, _payload: &str) -> Result<ScoringVerdict, ScoringError> {
        match self.behavior.as_str() {
            "ALWAYS_TIMEOUT" => Err(ScoringError::Timeout(0)),
            "ALWAYS_ERROR" => Err(ScoringError::Server {
                status: 503,
                body: "mock outage".to_string(),
            }),
            code => Ok(ScoringVerdict {
                transaction_id: Some(format!("mock_txn_{}", uuid::Uuid::new_v4())),
                cross_reference: None,
                rules_tripped: None,
                total_score: Some("0".to_string()),
                recommendation_code: Some(code.to_string()),
                remarks: Some("mock verdict".to_string()),
                response_data: None,
            }),
        }
    }
}
