use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use super::backend::{KeyValueStore, MemoryStore, RedisStore};
use super::keys::{CURRENT_USER_KEY, Collection, INITIALIZED_KEY};
use super::record::Record;
use crate::config::{Config, StorageBackend};
use crate::error::StoreError;
use crate::fixtures;
use crate::models::User;

/// 数据访问层
///
/// 以整体读写集合的方式封装键值存储。没有可用后端时（脱离浏览器上下文），
/// 读取返回种子数据，写入被忽略。后端和解析错误只记录日志，不会返回给调用方。
#[derive(Clone, Default)]
pub struct DataStore {
    backend: Option<Arc<dyn KeyValueStore>>,
}

impl fmt::Debug for DataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStore")
            .field("available", &self.is_available())
            .finish()
    }
}

impl DataStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Some(Arc::new(backend)),
        }
    }

    pub fn from_backend(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// 没有后端的存储
    pub fn detached() -> Self {
        Self { backend: None }
    }

    /// 按配置打开存储
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        let store = match &config.storage {
            StorageBackend::Memory => Self::new(MemoryStore::new()),
            StorageBackend::Redis(url) => Self::new(RedisStore::open(url)?),
            StorageBackend::Detached => Self::detached(),
        };
        tracing::debug!("Opened {} storage backend", config.storage);
        Ok(store)
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    fn get_raw(&self, key: &str) -> Option<String> {
        let backend = self.backend.as_ref()?;
        match backend.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", key, e);
                None
            }
        }
    }

    fn set_raw(&self, key: &str, value: &str) {
        let Some(backend) = self.backend.as_ref() else {
            tracing::debug!("Storage unavailable, dropping write to {}", key);
            return;
        };
        if let Err(e) = backend.set(key, value) {
            tracing::warn!("Failed to write {}: {}", key, e);
        }
    }

    fn remove_raw(&self, key: &str) {
        let Some(backend) = self.backend.as_ref() else {
            return;
        };
        if let Err(e) = backend.remove(key) {
            tracing::warn!("Failed to remove {}: {}", key, e);
        }
    }

    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.set_raw(key, &json),
            Err(e) => tracing::warn!("Failed to serialize {}: {}", key, e),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = self.get_raw(key)?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Corrupt value under {}: {}", key, e);
                None
            }
        }
    }

    /// 读取整个集合，缺失或损坏时返回种子数据
    pub fn read<T: Record>(&self) -> Vec<T> {
        self.get_json(&T::COLLECTION.key())
            .unwrap_or_else(T::seed)
    }

    /// 整体替换集合
    pub fn write<T: Record>(&self, records: &[T]) {
        self.set_json(&T::COLLECTION.key(), records);
    }

    /// 按ID线性查找
    pub fn find<T: Record>(&self, id: &str) -> Option<T> {
        self.read::<T>().into_iter().find(|r| r.id() == id)
    }

    /// 追加到集合末尾
    pub fn append<T: Record>(&self, record: T) {
        let mut records = self.read::<T>();
        records.push(record);
        self.write(&records);
    }

    /// 插入到集合开头
    pub fn prepend<T: Record>(&self, record: T) {
        let mut records = self.read::<T>();
        records.insert(0, record);
        self.write(&records);
    }

    /// 原地更新一条记录并返回更新后的副本，ID不存在时什么也不做
    pub fn update<T, F>(&self, id: &str, f: F) -> Option<T>
    where
        T: Record,
        F: FnOnce(&mut T),
    {
        let mut records = self.read::<T>();
        let record = records.iter_mut().find(|r| r.id() == id)?;
        f(record);
        let updated = record.clone();
        self.write(&records);
        Some(updated)
    }

    /// 对所有匹配的记录应用同一个更新，返回匹配数量，不存在的ID被忽略
    pub fn update_many<T, I, S, F>(&self, ids: I, mut f: F) -> usize
    where
        T: Record,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&mut T),
    {
        let ids: HashSet<String> = ids.into_iter().map(|id| id.as_ref().to_string()).collect();
        if ids.is_empty() {
            return 0;
        }

        let mut records = self.read::<T>();
        let mut matched = 0;
        for record in records.iter_mut().filter(|r| ids.contains(r.id())) {
            f(record);
            matched += 1;
        }

        if matched > 0 {
            self.write(&records);
        }
        matched
    }

    /// 删除一条记录，返回是否存在
    pub fn remove<T: Record>(&self, id: &str) -> bool {
        let mut records = self.read::<T>();
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return false;
        }
        self.write(&records);
        true
    }

    /// 当前会话用户，存储内容损坏时清除并视为未登录
    pub fn session_user(&self) -> Option<User> {
        let json = self.get_raw(CURRENT_USER_KEY)?;
        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding corrupt session user: {}", e);
                self.remove_raw(CURRENT_USER_KEY);
                None
            }
        }
    }

    pub fn put_session_user(&self, user: &User) {
        self.set_json(CURRENT_USER_KEY, user);
    }

    pub fn clear_session_user(&self) {
        self.remove_raw(CURRENT_USER_KEY);
    }

    pub fn is_initialized(&self) -> bool {
        self.get_raw(INITIALIZED_KEY).is_some()
    }

    /// 首次调用时写入全部种子数据，之后的调用不做任何事
    pub fn initialize(&self) {
        if !self.is_available() || self.is_initialized() {
            return;
        }

        self.write(&fixtures::clubs());
        self.write(&fixtures::posts());
        self.write(&fixtures::requests());
        self.write(&fixtures::events());
        self.write(&fixtures::users());
        self.set_raw(INITIALIZED_KEY, "true");

        tracing::info!(
            "Seeded {} collections with fixture data",
            Collection::ALL.len()
        );
    }

    /// 清除初始化标记和会话用户，然后重新写入种子数据
    ///
    /// 破坏性操作，会丢弃所有修改，只应在用户确认后调用。
    pub fn reset(&self) {
        tracing::info!("Resetting all collections to fixture data");
        self.remove_raw(INITIALIZED_KEY);
        self.remove_raw(CURRENT_USER_KEY);
        self.initialize();
    }
}
