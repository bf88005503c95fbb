pub mod config;
pub mod domain {
    pub mod context;
    pub mod outcome;
    pub mod verdict;
}
pub mod http {
    pub mod handlers {
        pub mod assessments;
        pub mod ops;
        pub mod tenants;
    }
    pub mod middleware {
        pub mod admin_auth;
    }
    pub mod router;
}
pub mod repo {
    pub mod outcomes_repo;
}
pub mod request {
    pub mod builder;
    pub mod path;
    pub mod serializer;
    pub mod tree;
}
pub mod scoring;
pub mod service {
    pub mod assessment_service;
    pub mod rejection_policy;
    pub mod tenant_config;
}

#[derive(Clone)]
pub struct AppState {
    pub assessment_service: service::assessment_service::AssessmentService,
    pub tenant_configs: service::tenant_config::TenantConfigRegistry,
}
