use moka::sync::Cache;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CacheService<T: Clone + Send + Sync + 'static> {
    cache: Cache<String, T>,
}

impl<T: Clone + Send + Sync + 'static> CacheService<T> {
    /// 创建带有 TTL 和最大容量的缓存服务
    pub fn new(ttl_secs: u64, max_capacity: u64) -> Self {
        let cache = Cache::builder().time_to_live(Duration::from_secs(ttl_secs)).max_capacity(max_capacity).build();
        CacheService { cache }
    }

    /// 不过期，仅受容量限制
    pub fn unbounded_ttl(max_capacity: u64) -> Self {
        CacheService { cache: Cache::builder().max_capacity(max_capacity).build() }
    }

    /// 插入缓存项
    pub fn insert(&self, key: impl AsRef<str>, value: T) {
        self.cache.insert(key.as_ref().to_string(), value);
    }

    /// 获取缓存项
    pub fn get(&self, key: impl AsRef<str>) -> Option<T> {
        self.cache.get(key.as_ref())
    }

    /// 删除缓存项
    pub fn remove(&self, key: &str) {
        self.cache.invalidate(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let cache: CacheService<u32> = CacheService::new(60, 16);
        cache.insert("a", 1);
        assert_eq!(cache.get("a"), Some(1));
        cache.remove("a");
        assert_eq!(cache.get("a"), None);
    }
}
