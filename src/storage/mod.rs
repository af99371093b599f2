pub mod file;
pub mod memory;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::{AppError, AppResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;

pub use file::FileStore;
pub use memory::MemoryStore;

/// 存储键
pub mod keys {
    /// 人员名单（含中奖状态）
    pub const PARTICIPANTS: &str = "lottery_participants";
    /// 奖项配置
    pub const PRIZES: &str = "lottery_prizes";
    /// 全局设置
    pub const SETTINGS: &str = "lottery_settings";
    /// 中奖记录
    pub const WINNER_RECORDS: &str = "lottery_winner_records";
    /// 完整系统数据
    pub const SYSTEM_DATA: &str = "lottery_system_data";
    /// 旧版组合配置（含 prizes）
    pub const LEGACY_CONFIG: &str = "lottery_config";

    pub const ALL: [&str; 5] = [PARTICIPANTS, PRIZES, SETTINGS, WINNER_RECORDS, SYSTEM_DATA];
}

/// 同步键值存储
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

pub fn create_store(config: &StorageConfig) -> AppResult<SharedStore> {
    let store: SharedStore = match config.backend {
        StorageBackend::File => Arc::new(FileStore::open(&config.dir)?),
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
    };
    Ok(store)
}

/// 读取原始值；空字符串与读取失败都视为不存在
pub fn read_raw(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(Some(raw)) if !raw.is_empty() => Some(raw),
        Ok(_) => None,
        Err(e) => {
            log::error!("Failed to read {key}: {e}");
            None
        }
    }
}

/// 解析 JSON，失败时记录日志并返回 None
pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Failed to decode {key}: {e}");
            None
        }
    }
}

pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    read_raw(store, key).and_then(|raw| decode(key, &raw))
}

pub fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).map_err(|e| {
        log::error!("Failed to save {key}: {e}");
        match e {
            AppError::StorageError(_) => e,
            other => AppError::StorageError(other.to_string()),
        }
    })
}
