use crate::error::AppResult;
use crate::models::{ImportRequest, ReadinessReport, SNAPSHOT_VERSION, SystemSnapshot};
use crate::services::{ParticipantService, PrizeService, RecordService, SettingsService};
use crate::storage::{SharedStore, keys, read_json, write_json};
use chrono::Utc;

/// 备份、恢复与整体状态检查
#[derive(Clone)]
pub struct SystemService {
    store: SharedStore,
    participant_service: ParticipantService,
    prize_service: PrizeService,
    record_service: RecordService,
    settings_service: SettingsService,
}

impl SystemService {
    pub fn new(
        store: SharedStore,
        participant_service: ParticipantService,
        prize_service: PrizeService,
        record_service: RecordService,
        settings_service: SettingsService,
    ) -> Self {
        Self {
            store,
            participant_service,
            prize_service,
            record_service,
            settings_service,
        }
    }

    /// 检查人员名单与奖项是否已配置
    pub fn check_ready(&self) -> ReadinessReport {
        let mut missing_items = Vec::new();
        if self.participant_service.load().is_empty() {
            missing_items.push("participants".to_string());
        }
        if self.prize_service.load().is_empty() {
            missing_items.push("prizes".to_string());
        }
        ReadinessReport {
            is_ready: missing_items.is_empty(),
            missing_items,
        }
    }

    pub fn export(&self) -> SystemSnapshot {
        SystemSnapshot {
            version: SNAPSHOT_VERSION.to_string(),
            export_time: Utc::now(),
            participants: self.participant_service.load(),
            prizes: self.prize_service.load(),
            settings: self.settings_service.load(),
            winner_records: self.record_service.load(),
        }
    }

    /// 导入数据，只覆盖请求中出现的部分
    ///
    /// 先校验全部出现的部分，任一部分不合法则不写入任何数据。
    pub fn import(&self, data: &ImportRequest) -> AppResult<()> {
        if let Some(participants) = &data.participants {
            ParticipantService::check(participants)?;
        }
        if let Some(prizes) = &data.prizes {
            PrizeService::check(prizes)?;
        }

        if let Some(participants) = &data.participants {
            self.participant_service.save(participants)?;
        }
        if let Some(prizes) = &data.prizes {
            self.prize_service.save(prizes)?;
        }
        if let Some(settings) = &data.settings {
            self.settings_service.save(settings)?;
        }
        if let Some(records) = &data.winner_records {
            self.record_service.save(records)?;
        }
        log::info!("System data imported");
        Ok(())
    }

    /// 清除所有数据（旧版组合配置保留）
    pub fn clear_all(&self) -> AppResult<()> {
        for key in keys::ALL {
            self.store.remove(key)?;
        }
        log::warn!("All lottery data cleared");
        Ok(())
    }

    pub fn load_system_data(&self) -> Option<SystemSnapshot> {
        read_json(&*self.store, keys::SYSTEM_DATA)
    }

    /// 将当前数据写入组合缓存，供大屏一次性加载
    pub fn save_system_data(&self) -> AppResult<SystemSnapshot> {
        let snapshot = self.export();
        write_json(&*self.store, keys::SYSTEM_DATA, &snapshot)?;
        Ok(snapshot)
    }
}
