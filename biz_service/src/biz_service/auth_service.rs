use crate::biz_service::cache_service::CacheService;
use common::config::AuthConfig;
use common::errors::AppError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

/// 校验 Bearer 令牌并返回角色
#[derive(Debug, Clone)]
pub struct AuthService {
    sessions: CacheService<Role>,
}

impl AuthService {
    pub fn new(config: &AuthConfig) -> Self {
        let service = Self { sessions: CacheService::unbounded_ttl(10_000) };
        for grant in &config.tokens {
            match Role::from_str(&grant.role) {
                Ok(role) => service.grant(&grant.token, role),
                Err(_) => warn!("ignoring token with unknown role `{}`", grant.role),
            }
        }
        service
    }

    pub fn grant(&self, token: &str, role: Role) {
        self.sessions.insert(token, role);
    }

    pub fn revoke(&self, token: &str) {
        self.sessions.remove(token);
    }

    pub fn verify(&self, token: &str) -> Option<Role> {
        self.sessions.get(token)
    }

    /// 解析 `Authorization` 头：缺失或无效为 401，非管理员为 403
    pub fn require_admin(&self, authorization: Option<&str>) -> Result<Role, AppError> {
        let header = authorization.ok_or_else(|| AppError::Unauthorized("missing bearer token".to_string()))?;
        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Unauthorized("malformed authorization header".to_string()))?;
        match self.verify(token) {
            Some(Role::Admin) => Ok(Role::Admin),
            Some(role) => {
                debug!("rejecting {} token for admin operation", role);
                Err(AppError::Forbidden)
            }
            None => Err(AppError::Unauthorized("invalid bearer token".to_string())),
        }
    }
}
