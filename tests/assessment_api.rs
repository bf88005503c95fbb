mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{tenant_config, MemoryStore, ScriptedReply, ScriptedScorer, SUBJECT_PLUGIN};
use fraud_gate::http::middleware::admin_auth::ADMIN_KEY_HEADER;
use fraud_gate::http::router::build_router;
use fraud_gate::service::assessment_service::AssessmentService;
use fraud_gate::service::tenant_config::TenantConfigRegistry;
use fraud_gate::AppState;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

const ADMIN_KEY: &str = "test-admin-key";

fn app(store: Arc<MemoryStore>, reply: ScriptedReply) -> axum::Router {
    let state = AppState {
        assessment_service: AssessmentService::new(store),
        tenant_configs: TenantConfigRegistry::new(tenant_config(ScriptedScorer::new(reply))),
    };
    build_router(state, ADMIN_KEY.to_string())
}

fn assess_body(tenant_id: Uuid, plugin: &str) -> String {
    serde_json::json!({
        "context": {
            "account_id": Uuid::new_v4(),
            "payment_external_key": "pay-42",
            "transaction_external_key": "pay-42-auth",
            "transaction_type": "AUTHORIZE",
            "amount": "10.00",
            "currency": "EUR",
            "payment_method_id": Uuid::new_v4(),
            "payment_method_plugin_name": plugin,
            "tenant_id": tenant_id
        },
        "properties": [
            {"key": "accertify_ipAddress", "value": "127.0.0.1"},
            {"key": "accertify_totalAmount", "value": "10.00"}
        ]
    })
    .to_string()
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn assess_then_list_outcomes() {
    let store = Arc::new(MemoryStore::default());
    let app = app(store.clone(), ScriptedReply::Verdict("REJECT"));
    let tenant_id = Uuid::new_v4();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payments/assessments")
                .header("content-type", "application/json")
                .body(Body::from(assess_body(tenant_id, SUBJECT_PLUGIN)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let decision = json_body(resp).await;
    assert_eq!(decision["abort_payment"], true);
    assert_eq!(decision["recommendation_code"], "REJECT");
    assert_eq!(decision["context"]["payment_external_key"], "pay-42");

    let resp = app
        .oneshot(
            Request::builder()
                .uri(format!("/payments/pay-42/assessments?tenant_id={tenant_id}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let outcomes = json_body(resp).await;
    let outcomes = outcomes.as_array().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0]["recommends_rejection"], true);
    assert_eq!(outcomes[0]["verdict"]["recommendation_code"], "REJECT");
    assert_eq!(outcomes[0]["transaction_type"], "AUTHORIZE");
}

#[tokio::test]
async fn scorer_outage_returns_allow() {
    let store = Arc::new(MemoryStore::default());
    let app = app(store.clone(), ScriptedReply::Fail);

    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/payments/assessments")
                .header("content-type", "application/json")
                .body(Body::from(assess_body(Uuid::new_v4(), SUBJECT_PLUGIN)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["abort_payment"], false);
    assert_eq!(store.rows().len(), 1);
}

#[tokio::test]
async fn readiness_reflects_the_outcome_store() {
    let ok = app(Arc::new(MemoryStore::default()), ScriptedReply::Fail)
        .oneshot(Request::builder().uri("/ops/readiness").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(ok.status(), StatusCode::OK);

    let down = app(Arc::new(MemoryStore::failing()), ScriptedReply::Fail)
        .oneshot(Request::builder().uri("/ops/readiness").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(down.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json_body(down).await["ready"], false);
}

#[tokio::test]
async fn tenant_scorer_routes_require_the_admin_key() {
    let app = app(Arc::new(MemoryStore::default()), ScriptedReply::Fail);
    let uri = format!("/admin/tenants/{}/scorer", Uuid::new_v4());
    let settings = serde_json::json!({"url": "https://scorer.example.com/transactions"}).to_string();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(&uri)
                .header("content-type", "application/json")
                .body(Body::from(settings.clone()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(&uri)
                .header("content-type", "application/json")
                .header(ADMIN_KEY_HEADER, ADMIN_KEY)
                .body(Body::from(settings))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .header(ADMIN_KEY_HEADER, ADMIN_KEY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["removed"], true);
}

#[tokio::test]
async fn tenant_override_changes_the_scorer_for_that_tenant_only() {
    let store = Arc::new(MemoryStore::default());
    let state = AppState {
        assessment_service: AssessmentService::new(store),
        tenant_configs: TenantConfigRegistry::new(tenant_config(ScriptedScorer::new(
            ScriptedReply::Verdict("ACCEPT"),
        ))),
    };
    let overridden = Uuid::new_v4();
    state
        .tenant_configs
        .set_scorer(
            overridden,
            ScriptedScorer::new(ScriptedReply::Verdict("REJECT")),
            std::time::Duration::from_millis(200),
        )
        .await;
    let app = build_router(state, ADMIN_KEY.to_string());

    for (tenant_id, expected_abort) in [(overridden, true), (Uuid::new_v4(), false)] {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/payments/assessments")
                    .header("content-type", "application/json")
                    .body(Body::from(assess_body(tenant_id, SUBJECT_PLUGIN)))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(json_body(resp).await["abort_payment"], expected_abort);
    }
}
