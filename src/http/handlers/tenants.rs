use crate::scoring::http::{HttpScoringClient, ScorerSettings};
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub async fn set_tenant_scorer(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
    Json(settings): Json<ScorerSettings>,
) -> impl IntoResponse {
    match HttpScoringClient::new(&settings) {
        Ok(client) => {
            state
                .tenant_configs
                .set_scorer(
                    tenant_id,
                    Arc::new(client),
                    Duration::from_millis(settings.timeout_ms),
                )
                .await;
            tracing::info!(
                %tenant_id,
                url = %settings.url,
                timeout_ms = settings.timeout_ms,
                "tenant scorer configured"
            );
            (
                axum::http::StatusCode::OK,
                Json(serde_json::json!({"updated": true})),
            )
                .into_response()
        }
        Err(e) => (
            axum::http::StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

pub async fn clear_tenant_scorer(
    State(state): State<AppState>,
    Path(tenant_id): Path<Uuid>,
) -> impl IntoResponse {
    let removed = state.tenant_configs.clear_scorer(tenant_id).await;
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({"removed": removed})),
    )
        .into_response()
}
