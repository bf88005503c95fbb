use fraud_gate::config::AppConfig;
use fraud_gate::http::router::build_router;
use fraud_gate::repo::outcomes_repo::OutcomesRepo;
use fraud_gate::scoring::http::HttpScoringClient;
use fraud_gate::scoring::mock::MockScorer;
use fraud_gate::scoring::RiskScorer;
use fraud_gate::service::assessment_service::AssessmentService;
use fraud_gate::service::tenant_config::{ResolvedTenantConfig, TenantConfigRegistry};
use fraud_gate::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let scorer: Arc<dyn RiskScorer> = match &cfg.mock_recommendation {
        Some(behavior) => {
            tracing::warn!(%behavior, "using the mock scorer");
            Arc::new(MockScorer {
                behavior: behavior.clone(),
            })
        }
        None => Arc::new(HttpScoringClient::new(&cfg.scorer)?),
    };

    let tenant_configs = TenantConfigRegistry::new(ResolvedTenantConfig {
        scorer,
        subject_plugins: Arc::new(cfg.subject_plugins.clone()),
        score_timeout: Duration::from_millis(cfg.scorer.timeout_ms),
        persist_timeout: Duration::from_millis(cfg.persist_timeout_ms),
    });

    let outcomes_repo = OutcomesRepo { pool: pool.clone() };
    let state = AppState {
        assessment_service: AssessmentService::new(Arc::new(outcomes_repo)),
        tenant_configs,
    };

    let app = build_router(state, cfg.internal_api_key.clone());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(
        subject_plugins = cfg.subject_plugins.len(),
        "listening on {}",
        cfg.bind_addr
    );
    axum::serve(listener, app).await?;
    Ok(())
}
