use async_trait::async_trait;
use biz_service::entitys::nav_entity::NavConfig;
use biz_service::nav::{SchemaError, schema};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unreadable response: {0}")]
    Decode(String),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("not signed in as an admin")]
    Unauthorized,
}

impl SyncError {
    /// 本地没有令牌，或服务端返回 401/403
    pub fn is_auth(&self) -> bool {
        match self {
            SyncError::Unauthorized => true,
            SyncError::Status { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        SyncError::Transport(e.to_string())
    }
}

/// `GET`/`PUT /navigation` 成功时的响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationEnvelope {
    pub name: String,
    pub config: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// 远端配置存储，配置以原始 JSON 传输，由调用方自行校验
#[async_trait]
pub trait NavigationApi: Send + Sync {
    /// 名称下没有文档时返回 `Ok(None)`
    async fn fetch(&self, name: &str) -> Result<Option<Value>, SyncError>;
    /// 整体覆盖，返回服务端保存后的配置
    async fn store(&self, name: &str, config: &NavConfig, token: &str) -> Result<Value, SyncError>;
}

pub struct HttpNavigationApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpNavigationApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SyncError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn url(&self) -> String {
        format!("{}/navigation", self.base_url)
    }

    async fn read_envelope(response: reqwest::Response) -> Result<NavigationEnvelope, SyncError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body).map(|b| b.error).unwrap_or(body);
            return Err(SyncError::Status { status: status.as_u16(), message });
        }
        serde_json::from_str(&body).map_err(|e| SyncError::Decode(e.to_string()))
    }
}

#[async_trait]
impl NavigationApi for HttpNavigationApi {
    async fn fetch(&self, name: &str) -> Result<Option<Value>, SyncError> {
        debug!("GET {} name={}", self.url(), name);
        let response = self.client.get(self.url()).query(&[("name", name)]).send().await?;
        let envelope = Self::read_envelope(response).await?;
        Ok(envelope.config.filter(|c| !c.is_null()))
    }

    async fn store(&self, name: &str, config: &NavConfig, token: &str) -> Result<Value, SyncError> {
        debug!("PUT {} name={}", self.url(), name);
        let response = self
            .client
            .put(self.url())
            .query(&[("name", name)])
            .bearer_auth(token)
            .json(config)
            .send()
            .await?;
        let envelope = Self::read_envelope(response).await?;
        envelope.config.ok_or_else(|| SyncError::Decode("response has no config".to_string()))
    }
}

/// 读取并校验，不合法的文档报 [`SyncError::Schema`]
pub async fn fetch_config(api: &dyn NavigationApi, name: &str) -> Result<Option<NavConfig>, SyncError> {
    match api.fetch(name).await? {
        Some(raw) => Ok(Some(schema::validate(&raw)?)),
        None => Ok(None),
    }
}
