use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;

/// 保存时附带的 Bearer 令牌来源
pub trait CredentialProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

impl<F> CredentialProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// 从浏览器会话存储快照中查找令牌
///
/// 键名形如 `sb-<project>-auth-token`，值为带 `access_token` 的 JSON
/// （可能嵌在 `currentSession` 下），或直接是令牌字符串
#[derive(Debug, Clone, Default)]
pub struct SessionStorageCredentials {
    entries: BTreeMap<String, String>,
}

impl SessionStorageCredentials {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self { entries: entries.into_iter().collect() }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

fn is_session_key(key: &str) -> bool {
    lazy_static! {
        static ref SESSION_KEY: Regex = Regex::new(r"^sb-[A-Za-z0-9_-]+-auth-token$").unwrap();
    }
    SESSION_KEY.is_match(key)
}

fn access_token(raw: &str) -> Option<String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(session)) => session
            .get("access_token")
            .or_else(|| session.get("currentSession").and_then(|s| s.get("access_token")))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
        Ok(Value::String(token)) if !token.is_empty() => Some(token),
        Ok(_) => None,
        Err(_) => {
            let token = raw.trim();
            (!token.is_empty()).then(|| token.to_string())
        }
    }
}

impl CredentialProvider for SessionStorageCredentials {
    fn token(&self) -> Option<String> {
        self.entries
            .iter()
            .filter(|(key, _)| is_session_key(key))
            .find_map(|(_, value)| access_token(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_under_session_shaped_key() {
        let mut storage = SessionStorageCredentials::default();
        storage.insert("theme", "dark");
        storage.insert("sb-abcd1234-auth-token", r#"{"access_token":"tok-1","refresh_token":"r"}"#);
        assert_eq!(storage.token().as_deref(), Some("tok-1"));
    }

    #[test]
    fn accepts_nested_and_bare_sessions() {
        let nested = SessionStorageCredentials::new([(
            "sb-proj-auth-token".to_string(),
            r#"{"currentSession":{"access_token":"tok-2"}}"#.to_string(),
        )]);
        assert_eq!(nested.token().as_deref(), Some("tok-2"));
        let bare = SessionStorageCredentials::new([("sb-proj-auth-token".to_string(), "tok-3".to_string())]);
        assert_eq!(bare.token().as_deref(), Some("tok-3"));
    }

    #[test]
    fn ignores_other_keys_and_empty_sessions() {
        let storage = SessionStorageCredentials::new([
            ("auth-token".to_string(), "nope".to_string()),
            ("sb-proj-auth-token".to_string(), r#"{"user":null}"#.to_string()),
        ]);
        assert_eq!(storage.token(), None);
    }

    #[test]
    fn closures_are_providers() {
        let provider = || Some("closure-token".to_string());
        assert_eq!(CredentialProvider::token(&provider).as_deref(), Some("closure-token"));
        assert_eq!(StaticCredentials::anonymous().token(), None);
    }
}
