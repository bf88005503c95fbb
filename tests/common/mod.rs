#![allow(dead_code)]

use fraud_gate::domain::context::{PaymentControlContext, TransactionType};
use fraud_gate::domain::outcome::AssessmentOutcome;
use fraud_gate::domain::verdict::ScoringVerdict;
use fraud_gate::repo::outcomes_repo::{OutcomeStore, StoreError};
use fraud_gate::scoring::{RiskScorer, ScoringError};
use fraud_gate::service::tenant_config::ResolvedTenantConfig;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

pub const SUBJECT_PLUGIN: &str = "killbill-stripe";

pub enum ScriptedReply {
    Verdict(&'static str),
    Slow(Duration, &'static str),
    Fail,
    Hang,
}

/// Scorer double that records payloads and answers from a script.
pub struct ScriptedScorer {
    pub reply: ScriptedReply,
    pub payloads: Mutex<Vec<String>>,
}

impl ScriptedScorer {
    pub fn new(reply: ScriptedReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl RiskScorer for ScriptedScorer {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn assess(&self, payload: &str) -> Result<ScoringVerdict, ScoringError> {
        self.payloads.lock().unwrap().push(payload.to_string());
        match self.reply {
            ScriptedReply::Verdict(code) => Ok(ScoringVerdict {
                transaction_id: Some("aa".to_string()),
                recommendation_code: Some(code.to_string()),
                total_score: Some("42".to_string()),
                ..ScoringVerdict::default()
            }),
            ScriptedReply::Slow(delay, code) => {
                tokio::time::sleep(delay).await;
                Ok(ScoringVerdict {
                    recommendation_code: Some(code.to_string()),
                    ..ScoringVerdict::default()
                })
            }
            ScriptedReply::Fail => Err(ScoringError::Server {
                status: 500,
                body: "boom".to_string(),
            }),
            ScriptedReply::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Err(ScoringError::Timeout(30_000))
            }
        }
    }
}

/// In-memory outcome store; `failing` makes every call error.
#[derive(Default)]
pub struct MemoryStore {
    pub rows: Mutex<Vec<AssessmentOutcome>>,
    pub failing: bool,
    pub hanging: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn hanging() -> Self {
        Self {
            hanging: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<AssessmentOutcome> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl OutcomeStore for MemoryStore {
    async fn add_response(
        &self,
        context: &PaymentControlContext,
        verdict: Option<&ScoringVerdict>,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), StoreError> {
        if self.hanging {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        if self.failing {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        let mut rows = self.rows.lock().unwrap();
        let record_id = rows.len() as i64 + 1;
        rows.push(AssessmentOutcome {
            record_id,
            account_id: context.account_id,
            payment_external_key: context.payment_external_key.clone(),
            transaction_external_key: context.transaction_external_key.clone(),
            transaction_type: context.transaction_type,
            amount: context.amount,
            currency: context.currency.clone(),
            verdict: verdict.cloned(),
            created_at,
            tenant_id: context.tenant_id,
        });
        Ok(())
    }

    async fn list_for_payment(
        &self,
        payment_external_key: &str,
        tenant_id: Uuid,
    ) -> Result<Vec<AssessmentOutcome>, StoreError> {
        if self.failing {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self
            .rows()
            .into_iter()
            .filter(|r| r.payment_external_key == payment_external_key && r.tenant_id == tenant_id)
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

pub fn context(plugin: Option<&str>) -> PaymentControlContext {
    PaymentControlContext {
        account_id: Uuid::new_v4(),
        payment_external_key: "pay-001".to_string(),
        transaction_external_key: "pay-001-auth".to_string(),
        transaction_id: Some(Uuid::new_v4()),
        transaction_type: TransactionType::Authorize,
        amount: Decimal::from_str("12.44").unwrap(),
        currency: "USD".to_string(),
        payment_method_id: Uuid::new_v4(),
        payment_method_plugin_name: plugin.map(str::to_string),
        tenant_id: Uuid::new_v4(),
    }
}

pub fn tenant_config(scorer: Arc<dyn RiskScorer>) -> ResolvedTenantConfig {
    ResolvedTenantConfig {
        scorer,
        subject_plugins: Arc::new(HashSet::from([SUBJECT_PLUGIN.to_string()])),
        score_timeout: Duration::from_millis(200),
        persist_timeout: Duration::from_millis(200),
    }
}
