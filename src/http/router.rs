use crate::http::handlers::{assessments, ops, tenants};
use crate::http::middleware::admin_auth::require_internal_api_key;
use crate::AppState;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;

pub fn build_router(state: AppState, admin_key: String) -> Router {
    let admin_routes = Router::new()
        .route(
            "/admin/tenants/:tenant_id/scorer",
            put(tenants::set_tenant_scorer).delete(tenants::clear_tenant_scorer),
        )
        .layer(from_fn_with_state(admin_key, require_internal_api_key));

    Router::new()
        .route("/health", get(ops::health))
        .route("/ops/liveness", get(ops::liveness))
        .route("/ops/readiness", get(ops::readiness))
        .route("/payments/assessments", post(assessments::assess_payment))
        .route(
            "/payments/:payment_external_key/assessments",
            get(assessments::list_assessments),
        )
        .merge(admin_routes)
        .with_state(state)
}
