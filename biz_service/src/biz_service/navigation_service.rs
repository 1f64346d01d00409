use crate::entitys::nav_entity::NavConfig;
use crate::entitys::navigation_doc::NavigationDoc;
use crate::nav::schema;
use async_trait::async_trait;
use common::errors::AppError;
use common::repository_util::{BaseRepository, Repository};
use common::util::date_util::now;
use log::info;
use mongodb::Database;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 导航配置文档存储，按名称整体读写
#[async_trait]
pub trait NavigationStore: Send + Sync {
    async fn load(&self, name: &str) -> Result<Option<NavigationDoc>, AppError>;
    async fn save(&self, doc: &NavigationDoc) -> Result<(), AppError>;
}

pub struct MongoNavigationStore {
    dao: BaseRepository<NavigationDoc>,
}

impl MongoNavigationStore {
    pub fn new(db: Database) -> Self {
        let collection = db.collection("navigation_config");
        Self { dao: BaseRepository::new(db, collection) }
    }
}

#[async_trait]
impl NavigationStore for MongoNavigationStore {
    async fn load(&self, name: &str) -> Result<Option<NavigationDoc>, AppError> {
        Ok(self.dao.find_by_id(name).await?)
    }

    async fn save(&self, doc: &NavigationDoc) -> Result<(), AppError> {
        self.dao.upsert(&doc.id, doc).await?;
        Ok(())
    }
}

/// 本地开发与测试用
#[derive(Default)]
pub struct MemoryNavigationStore {
    docs: RwLock<HashMap<String, NavigationDoc>>,
}

impl MemoryNavigationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NavigationStore for MemoryNavigationStore {
    async fn load(&self, name: &str) -> Result<Option<NavigationDoc>, AppError> {
        Ok(self.docs.read().await.get(name).cloned())
    }

    async fn save(&self, doc: &NavigationDoc) -> Result<(), AppError> {
        self.docs.write().await.insert(doc.id.clone(), doc.clone());
        Ok(())
    }
}

#[derive(Clone)]
pub struct NavigationService {
    store: Arc<dyn NavigationStore>,
}

impl NavigationService {
    pub fn new(store: Arc<dyn NavigationStore>) -> Self {
        Self { store }
    }

    /// 名称不存在时返回 `None`
    pub async fn get_config(&self, name: &str) -> Result<Option<NavConfig>, AppError> {
        Ok(self.store.load(name).await?.map(|doc| doc.config))
    }

    /// 重新校验请求体后整体覆盖，后写者胜
    pub async fn save_config(&self, name: &str, raw: &Value) -> Result<NavConfig, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("navigation name must not be empty".to_string()));
        }
        let config = schema::validate(raw).map_err(|e| AppError::Validation(e.to_string()))?;
        let doc = NavigationDoc::new(name, config, now());
        self.store.save(&doc).await?;
        info!(
            "navigation `{}` saved: {} links, {} menus",
            name,
            doc.config.primary_links.len(),
            doc.config.mega_menus.len()
        );
        Ok(doc.config)
    }
}
