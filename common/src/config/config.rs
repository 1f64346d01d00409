use ::config::Config;
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub database: Option<DatabaseConfig>,
    pub server: Option<ServerConfig>,
    pub sys: Option<SysConfig>,
    pub auth: Option<AuthConfig>,
}

impl AppConfig {
    /// 从配置文件加载，`APP_` 前缀的环境变量覆盖文件中的同名字段
    pub fn new(file: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(::config::File::with_name(file).required(true))
            .add_source(::config::Environment::with_prefix("APP").separator("_"))
            .build()
            .with_context(|| format!("Failed to build configuration from {}", file))?;
        let cfg = config.try_deserialize::<AppConfig>().context("Failed to deserialize configuration")?;
        Ok(cfg)
    }

    pub fn init(file: &str) -> Result<()> {
        let instance = Self::new(file)?;
        INSTANCE
            .set(Arc::new(instance))
            .map_err(|_| anyhow::anyhow!("AppConfig already initialized"))
    }

    pub fn get_database(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }
    pub fn get_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
    pub fn get_sys(&self) -> SysConfig {
        self.sys.clone().unwrap_or_default()
    }
    pub fn get_auth(&self) -> AuthConfig {
        self.auth.clone().unwrap_or_default()
    }

    /// 获取单例
    pub fn get() -> Arc<Self> {
        INSTANCE.get().expect("AppConfig is not initialized").clone()
    }
}
static INSTANCE: OnceCell<Arc<AppConfig>> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub db_name: String,
    /// 为 true 时使用内存存储，不连接 MongoDB
    #[serde(default)]
    pub in_memory: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: "mongodb://127.0.0.1:27017".to_string(), db_name: "game_night".to_string(), in_memory: false }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SysConfig {
    //全局日志级别
    pub log_level: String,
}

impl Default for SysConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080 }
    }
}

/// 预置的访问令牌及其角色
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub tokens: Vec<TokenGrant>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenGrant {
    pub token: String,
    pub role: String,
}
