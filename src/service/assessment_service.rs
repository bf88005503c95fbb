use crate::domain::context::{scorer_entries, PaymentControlContext, PluginProperty};
use crate::domain::outcome::AssessmentDecision;
use crate::domain::verdict::ScoringVerdict;
use crate::repo::outcomes_repo::OutcomeStore;
use crate::request::builder::RequestBuilder;
use crate::request::path::PathError;
use crate::request::serializer::SerializationError;
use crate::service::rejection_policy;
use crate::service::tenant_config::ResolvedTenantConfig;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::timeout;

pub const SCORER_PROPERTY_PREFIX: &str = "accertify_";

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid property path: {0}")]
    Path(#[from] PathError),
    #[error("cannot serialize request: {0}")]
    Serialization(#[from] SerializationError),
}

pub fn build_payload(properties: &[PluginProperty], prefix: &str) -> Result<String, BuildError> {
    let mut builder = RequestBuilder::new();
    for (path, value) in scorer_entries(properties, prefix) {
        builder.insert(path, value)?;
    }
    Ok(builder.build()?)
}

#[derive(Clone)]
pub struct AssessmentService {
    pub outcome_store: Arc<dyn OutcomeStore>,
    pub property_prefix: String,
}

impl AssessmentService {
    pub fn new(outcome_store: Arc<dyn OutcomeStore>) -> Self {
        Self {
            outcome_store,
            property_prefix: SCORER_PROPERTY_PREFIX.to_string(),
        }
    }

    pub async fn assess(
        &self,
        config: &ResolvedTenantConfig,
        context: &PaymentControlContext,
        properties: &[PluginProperty],
    ) -> AssessmentDecision {
        let verdict = self.score_and_record(config, context, properties).await;

        let should_reject = verdict
            .as_ref()
            .map(ScoringVerdict::recommends_rejection)
            .unwrap_or(false);
        let should_honor = context
            .payment_method_plugin_name
            .as_deref()
            .map(|plugin| rejection_policy::should_honor(plugin, &config.subject_plugins))
            .unwrap_or(false);
        let abort_payment = should_reject && should_honor;

        tracing::info!(
            kb_payment_external_key = %context.payment_external_key,
            abort_payment,
            should_reject,
            should_honor,
            "fraud assessment result"
        );

        AssessmentDecision {
            abort_payment,
            should_reject,
            should_honor,
            recommendation_code: verdict.and_then(|v| v.recommendation_code),
            context: context.clone(),
        }
    }

    async fn score_and_record(
        &self,
        config: &ResolvedTenantConfig,
        context: &PaymentControlContext,
        properties: &[PluginProperty],
    ) -> Option<ScoringVerdict> {
        let payload = match build_payload(properties, &self.property_prefix) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(
                    kb_payment_external_key = %context.payment_external_key,
                    error = %e,
                    "error while creating the scoring payload"
                );
                return None;
            }
        };

        let verdict = match timeout(config.score_timeout, config.scorer.assess(&payload)).await {
            Ok(Ok(verdict)) => {
                tracing::info!(
                    kb_payment_transaction_id = ?context.transaction_id,
                    recommendation_code = verdict.recommendation_code.as_deref().unwrap_or(""),
                    total_score = verdict.total_score.as_deref().unwrap_or(""),
                    rules_tripped = verdict.rules_tripped.as_deref().unwrap_or(""),
                    remarks = verdict.remarks.as_deref().unwrap_or(""),
                    "scorer recommendation"
                );
                Some(verdict)
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    scorer = config.scorer.name(),
                    kb_payment_transaction_id = ?context.transaction_id,
                    error = %e,
                    "error while calling the scorer"
                );
                None
            }
            Err(_) => {
                tracing::warn!(
                    scorer = config.scorer.name(),
                    kb_payment_transaction_id = ?context.transaction_id,
                    timeout_ms = config.score_timeout.as_millis() as u64,
                    "scorer call timed out"
                );
                None
            }
        };

        let write = self
            .outcome_store
            .add_response(context, verdict.as_ref(), chrono::Utc::now());
        match timeout(config.persist_timeout, write).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(
                kb_payment_external_key = %context.payment_external_key,
                error = %e,
                "error while storing the assessment outcome"
            ),
            Err(_) => tracing::warn!(
                kb_payment_external_key = %context.payment_external_key,
                timeout_ms = config.persist_timeout.as_millis() as u64,
                "storing the assessment outcome timed out"
            ),
        }

        verdict
    }
}
