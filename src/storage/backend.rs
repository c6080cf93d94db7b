use redis::{Client as RedisClient, Commands};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::StoreError;

/// 键值存储后端
///
/// 值总是 JSON 文本，写入是同步的，写后立即可读。
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// 进程内存储
///
/// 克隆出的实例共享同一份数据，相当于同一个浏览器上下文里的多个视图。
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Redis 存储，每次操作获取一个同步连接
pub struct RedisStore {
    redis_client: RedisClient,
}

impl RedisStore {
    /// 解析连接地址，不会立即建立连接
    pub fn open(redis_url: &str) -> Result<Self, StoreError> {
        Ok(Self {
            redis_client: RedisClient::open(redis_url)?,
        })
    }
}

impl KeyValueStore for RedisStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut conn = self.redis_client.get_connection()?;
        let value: Option<String> = conn.get(key)?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut conn = self.redis_client.get_connection()?;
        let _: () = conn.set(key, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut conn = self.redis_client.get_connection()?;
        let _: () = conn.del(key)?;
        Ok(())
    }
}
