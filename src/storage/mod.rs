/// 存储模块
/// 包含键定义、存储后端、数据访问层和读穿缓存
pub mod backend;
pub mod cache;
pub mod keys;
pub mod record;
mod store;

pub use backend::{KeyValueStore, MemoryStore, RedisStore};
pub use cache::CollectionView;
pub use keys::{CURRENT_USER_KEY, Collection, INITIALIZED_KEY};
pub use record::Record;
pub use store::DataStore;
