use serde::{Deserialize, Serialize};

pub const REJECT_RECOMMENDATION: &str = "REJECT";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringVerdict {
    pub transaction_id: Option<String>,
    pub cross_reference: Option<String>,
    pub rules_tripped: Option<String>,
    pub total_score: Option<String>,
    pub recommendation_code: Option<String>,
    pub remarks: Option<String>,
    pub response_data: Option<String>,
}

impl ScoringVerdict {
    pub fn recommends_rejection(&self) -> bool {
        self.recommendation_code.as_deref() == Some(REJECT_RECOMMENDATION)
    }
}
