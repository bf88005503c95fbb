use crate::domain::verdict::ScoringVerdict;
use crate::scoring::response::parse_verdict;
use crate::scoring::{RiskScorer, ScoringError};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;

const APPLICATION_XML: &str = "application/xml";
const USER_AGENT: &str = "fraud-gate/1.0";

#[derive(Debug, Clone, Deserialize)]
pub struct ScorerSettings {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub proxy_host: Option<String>,
    pub proxy_port: Option<u16>,
    #[serde(default = "default_strict_ssl")]
    pub strict_ssl: bool,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_strict_ssl() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    10_000
}

pub struct HttpScoringClient {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

impl HttpScoringClient {
    pub fn new(settings: &ScorerSettings) -> Result<Self, ScoringError> {
        reqwest::Url::parse(&settings.url)
            .map_err(|_| ScoringError::InvalidUrl(settings.url.clone()))?;

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(!settings.strict_ssl);

        if let (Some(host), Some(port)) = (&settings.proxy_host, settings.proxy_port) {
            let proxy_url = format!("http://{host}:{port}");
            let proxy = reqwest::Proxy::all(&proxy_url)
                .map_err(|_| ScoringError::InvalidUrl(proxy_url.clone()))?;
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            url: settings.url.clone(),
            username: settings.username.clone(),
            password: settings.password.clone(),
            timeout_ms: settings.timeout_ms,
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl RiskScorer for HttpScoringClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn assess(&self, payload: &str) -> Result<ScoringVerdict, ScoringError> {
        let mut request = self
            .client
            .post(&self.url)
            .header(ACCEPT, APPLICATION_XML)
            .header(CONTENT_TYPE, format!("{APPLICATION_XML}; charset=utf-8"))
            .body(payload.to_string())
            .timeout(std::time::Duration::from_millis(self.timeout_ms));

        if self.username.is_some() || self.password.is_some() {
            request = request.basic_auth(
                self.username.clone().unwrap_or_default(),
                self.password.clone(),
            );
        }

        let resp = match request.send().await {
            Ok(r) => r,
            Err(e) if e.is_timeout() => return Err(ScoringError::Timeout(self.timeout_ms)),
            Err(e) => return Err(ScoringError::Transport(e)),
        };

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Err(ScoringError::Timeout(self.timeout_ms)),
            Err(e) => return Err(ScoringError::Transport(e)),
        };

        if status == StatusCode::UNAUTHORIZED {
            return Err(ScoringError::Unauthorized { body });
        }
        if status.is_server_error() {
            return Err(ScoringError::Server {
                status: status.as_u16(),
                body,
            });
        }
        if status.is_client_error() {
            return Err(ScoringError::InvalidRequest {
                status: status.as_u16(),
                body,
            });
        }

        parse_verdict(&body)
    }
}
