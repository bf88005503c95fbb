use crate::scoring::RiskScorer;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone)]
pub struct ResolvedTenantConfig {
    pub scorer: Arc<dyn RiskScorer>,
    pub subject_plugins: Arc<HashSet<String>>,
    pub score_timeout: Duration,
    pub persist_timeout: Duration,
}

#[derive(Clone)]
struct ScorerOverride {
    scorer: Arc<dyn RiskScorer>,
    score_timeout: Duration,
}

#[derive(Clone)]
pub struct TenantConfigRegistry {
    default: ResolvedTenantConfig,
    overrides: Arc<RwLock<HashMap<Uuid, ScorerOverride>>>,
}

impl TenantConfigRegistry {
    pub fn new(default: ResolvedTenantConfig) -> Self {
        Self {
            default,
            overrides: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn resolve(&self, tenant_id: Uuid) -> ResolvedTenantConfig {
        let read = self.overrides.read().await;
        match read.get(&tenant_id) {
            Some(o) => ResolvedTenantConfig {
                scorer: o.scorer.clone(),
                score_timeout: o.score_timeout,
                ..self.default.clone()
            },
            None => self.default.clone(),
        }
    }

    pub async fn set_scorer(
        &self,
        tenant_id: Uuid,
        scorer: Arc<dyn RiskScorer>,
        score_timeout: Duration,
    ) {
        let mut write = self.overrides.write().await;
        write.insert(
            tenant_id,
            ScorerOverride {
                scorer,
                score_timeout,
            },
        );
    }

    pub async fn clear_scorer(&self, tenant_id: Uuid) -> bool {
        let mut write = self.overrides.write().await;
        write.remove(&tenant_id).is_some()
    }
}
