use crate::domain::context::{PaymentControlContext, TransactionType};
use crate::domain::outcome::AssessmentOutcome;
use crate::domain::verdict::ScoringVerdict;
use sqlx::{PgPool, Row};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("outcome {record_id} is unreadable: {reason}")]
    Corrupt { record_id: i64, reason: String },
}

#[async_trait::async_trait]
pub trait OutcomeStore: Send + Sync {
    async fn add_response(
        &self,
        context: &PaymentControlContext,
        verdict: Option<&ScoringVerdict>,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), StoreError>;

    async fn list_for_payment(
        &self,
        payment_external_key: &str,
        tenant_id: Uuid,
    ) -> Result<Vec<AssessmentOutcome>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct OutcomesRepo {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl OutcomeStore for OutcomesRepo {
    async fn add_response(
        &self,
        context: &PaymentControlContext,
        verdict: Option<&ScoringVerdict>,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO fraud_gate_responses (
                kb_account_id,
                kb_payment_external_key,
                kb_payment_transaction_external_key,
                transaction_type,
                amount,
                currency,
                scored,
                transaction_id,
                cross_reference,
                rules_tripped,
                total_score,
                recommendation_code,
                remarks,
                additional_data,
                created_date,
                kb_tenant_id
            ) VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13,$14,$15,$16)
            "#,
        )
        .bind(context.account_id)
        .bind(&context.payment_external_key)
        .bind(&context.transaction_external_key)
        .bind(context.transaction_type.as_str())
        .bind(context.amount)
        .bind(&context.currency)
        .bind(verdict.is_some())
        .bind(verdict.and_then(|v| v.transaction_id.clone()))
        .bind(verdict.and_then(|v| v.cross_reference.clone()))
        .bind(verdict.and_then(|v| v.rules_tripped.clone()))
        .bind(verdict.and_then(|v| v.total_score.clone()))
        .bind(verdict.and_then(|v| v.recommendation_code.clone()))
        .bind(verdict.and_then(|v| v.remarks.clone()))
        .bind(verdict.and_then(|v| v.response_data.clone()))
        .bind(created_at)
        .bind(context.tenant_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_for_payment(
        &self,
        payment_external_key: &str,
        tenant_id: Uuid,
    ) -> Result<Vec<AssessmentOutcome>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT record_id, kb_account_id, kb_payment_external_key,
                   kb_payment_transaction_external_key, transaction_type, amount, currency,
                   scored, transaction_id, cross_reference, rules_tripped, total_score,
                   recommendation_code, remarks, additional_data, created_date, kb_tenant_id
            FROM fraud_gate_responses
            WHERE kb_payment_external_key = $1 AND kb_tenant_id = $2
            ORDER BY record_id ASC
            "#,
        )
        .bind(payment_external_key)
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|r| {
                let record_id: i64 = r.get("record_id");
                let transaction_type: String = r.get("transaction_type");
                let transaction_type =
                    TransactionType::parse(&transaction_type).ok_or_else(|| StoreError::Corrupt {
                        record_id,
                        reason: format!("unknown transaction type `{transaction_type}`"),
                    })?;
                let scored: bool = r.get("scored");
                let verdict = scored.then(|| ScoringVerdict {
                    transaction_id: r.get("transaction_id"),
                    cross_reference: r.get("cross_reference"),
                    rules_tripped: r.get("rules_tripped"),
                    total_score: r.get("total_score"),
                    recommendation_code: r.get("recommendation_code"),
                    remarks: r.get("remarks"),
                    response_data: r.get("additional_data"),
                });

                Ok(AssessmentOutcome {
                    record_id,
                    account_id: r.get("kb_account_id"),
                    payment_external_key: r.get("kb_payment_external_key"),
                    transaction_external_key: r.get("kb_payment_transaction_external_key"),
                    transaction_type,
                    amount: r.get("amount"),
                    currency: r.get("currency"),
                    verdict,
                    created_at: r.get("created_date"),
                    tenant_id: r.get("kb_tenant_id"),
                })
            })
            .collect()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
