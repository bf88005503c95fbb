use crate::domain::context::{PaymentControlContext, TransactionType};
use crate::domain::verdict::ScoringVerdict;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentOutcome {
    pub record_id: i64,
    pub account_id: Uuid,
    pub payment_external_key: String,
    pub transaction_external_key: String,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub currency: String,
    pub verdict: Option<ScoringVerdict>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub tenant_id: Uuid,
}

impl AssessmentOutcome {
    pub fn recommends_rejection(&self) -> bool {
        self.verdict
            .as_ref()
            .map(ScoringVerdict::recommends_rejection)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentDecision {
    pub abort_payment: bool,
    pub should_reject: bool,
    pub should_honor: bool,
    pub recommendation_code: Option<String>,
    pub context: PaymentControlContext,
}
