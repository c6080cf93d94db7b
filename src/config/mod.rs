use std::env;
use std::fmt;

use thiserror::Error;

/// 存储后端选择
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// 进程内存储
    #[default]
    Memory,
    /// Redis 存储，附带连接地址
    Redis(String),
    /// 没有可用存储，读取返回种子数据，写入被忽略
    Detached,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => f.write_str("memory"),
            StorageBackend::Redis(_) => f.write_str("redis"),
            StorageBackend::Detached => f.write_str("detached"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown storage backend `{0}`, expected memory, redis or none")]
    UnknownStorage(String),
    #[error("REDIS_URL must be set when UBCLUBS_STORAGE=redis")]
    MissingRedisUrl,
    #[error("invalid value for {key}: `{value}`")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub storage: StorageBackend,
    /// 启动时重置为种子数据
    pub reset_on_start: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源读取配置
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage = match lookup("UBCLUBS_STORAGE")
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
        {
            None | Some("") | Some("memory") => StorageBackend::Memory,
            Some("redis") => {
                let url = lookup("REDIS_URL")
                    .filter(|url| !url.trim().is_empty())
                    .ok_or(ConfigError::MissingRedisUrl)?;
                StorageBackend::Redis(url)
            }
            Some("none") => StorageBackend::Detached,
            Some(other) => return Err(ConfigError::UnknownStorage(other.to_string())),
        };

        let reset_on_start = match lookup("UBCLUBS_RESET") {
            None => false,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "" | "0" | "false" | "no" => false,
                "1" | "true" | "yes" => true,
                _ => {
                    return Err(ConfigError::InvalidFlag {
                        key: "UBCLUBS_RESET",
                        value,
                    });
                }
            },
        };

        Ok(Config {
            storage,
            reset_on_start,
        })
    }
}
