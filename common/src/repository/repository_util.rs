use async_trait::async_trait;
use mongodb::bson::{Document, doc};
use mongodb::error::Result;
use mongodb::{Collection, Database};
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;

#[async_trait]
pub trait Repository<T> {
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;
    async fn find_one(&self, filter: Document) -> Result<Option<T>>;
    /// 按 `_id` 整体替换，不存在则插入
    async fn upsert(&self, id: &str, entity: &T) -> Result<()>;
}

#[allow(dead_code)]
pub struct BaseRepository<T: Send + Sync> {
    pub collection: Collection<T>,
    pub db: Database,
    _marker: PhantomData<T>,
}

impl<T: Send + Sync> BaseRepository<T> {
    pub fn new(db: Database, collection: Collection<T>) -> Self {
        Self { collection, db, _marker: Default::default() }
    }
}

#[async_trait]
impl<T> Repository<T> for BaseRepository<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        self.find_one(doc! { "_id": id }).await
    }

    async fn find_one(&self, filter: Document) -> Result<Option<T>> {
        let result = self.collection.find_one(filter).await?;
        Ok(result)
    }

    async fn upsert(&self, id: &str, entity: &T) -> Result<()> {
        self.collection.replace_one(doc! { "_id": id }, entity).upsert(true).await?;
        Ok(())
    }
}
