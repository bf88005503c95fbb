use crate::domain::context::{PaymentControlContext, PluginProperty};
use crate::domain::outcome::AssessmentOutcome;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct AssessPaymentRequest {
    pub context: PaymentControlContext,
    #[serde(default)]
    pub properties: Vec<PluginProperty>,
}

#[derive(Debug, Deserialize)]
pub struct TenantQuery {
    pub tenant_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct OutcomeView {
    #[serde(flatten)]
    pub outcome: AssessmentOutcome,
    pub recommends_rejection: bool,
}

pub async fn assess_payment(
    State(state): State<AppState>,
    Json(req): Json<AssessPaymentRequest>,
) -> impl IntoResponse {
    let config = state.tenant_configs.resolve(req.context.tenant_id).await;
    let decision = state
        .assessment_service
        .assess(&config, &req.context, &req.properties)
        .await;
    (axum::http::StatusCode::OK, Json(decision)).into_response()
}

pub async fn list_assessments(
    State(state): State<AppState>,
    Path(payment_external_key): Path<String>,
    Query(query): Query<TenantQuery>,
) -> impl IntoResponse {
    match state
        .assessment_service
        .outcome_store
        .list_for_payment(&payment_external_key, query.tenant_id)
        .await
    {
        Ok(items) => {
            let resp: Vec<OutcomeView> = items
                .into_iter()
                .map(|outcome| OutcomeView {
                    recommends_rejection: outcome.recommends_rejection(),
                    outcome,
                })
                .collect();
            (axum::http::StatusCode::OK, Json(resp)).into_response()
        }
        Err(e) => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
