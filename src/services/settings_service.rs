use crate::draw::algorithm_info;
use crate::error::AppResult;
use crate::models::{AlgorithmInfo, Settings};
use crate::storage::{SharedStore, keys, read_json, write_json};

#[derive(Clone)]
pub struct SettingsService {
    store: SharedStore,
}

impl SettingsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// 读取设置；未配置或格式错误时为 None，抽奖按等概率处理
    pub fn load(&self) -> Option<Settings> {
        read_json(&*self.store, keys::SETTINGS)
    }

    pub fn save(&self, settings: &Settings) -> AppResult<()> {
        write_json(&*self.store, keys::SETTINGS, settings)
    }

    pub fn algorithm_info(&self) -> AlgorithmInfo {
        algorithm_info(self.load().as_ref())
    }
}
