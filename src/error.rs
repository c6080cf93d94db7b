use thiserror::Error;

/// 存储后端错误
///
/// 只在后端与数据访问层之间传递，数据访问层记录日志后降级为默认值。
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("in-memory store lock poisoned")]
    Poisoned,
}
