use crate::error::{AppError, AppResult};
use crate::models::{EntityId, Prize, PrizeProgress};
use crate::services::RecordService;
use crate::storage::{SharedStore, decode, keys, read_raw, write_json};
use serde::Deserialize;
use std::collections::HashSet;

/// 旧版组合配置，只关心其中的奖项
#[derive(Debug, Deserialize)]
struct LegacyConfig {
    #[serde(default)]
    prizes: Vec<Prize>,
}

#[derive(Clone)]
pub struct PrizeService {
    store: SharedStore,
    record_service: RecordService,
}

impl PrizeService {
    pub fn new(store: SharedStore, record_service: RecordService) -> Self {
        Self {
            store,
            record_service,
        }
    }

    /// 读取奖项配置
    ///
    /// 新键不存在时尝试旧版组合配置，找到非空奖项列表则一次性迁移到新键。
    pub fn load(&self) -> Vec<Prize> {
        if let Some(raw) = read_raw(&*self.store, keys::PRIZES) {
            return decode(keys::PRIZES, &raw).unwrap_or_default();
        }

        let Some(legacy) = read_raw(&*self.store, keys::LEGACY_CONFIG)
            .and_then(|raw| decode::<LegacyConfig>(keys::LEGACY_CONFIG, &raw))
        else {
            return Vec::new();
        };
        if legacy.prizes.is_empty() {
            return Vec::new();
        }

        match write_json(&*self.store, keys::PRIZES, &legacy.prizes) {
            Ok(()) => log::info!("Migrated {} prizes from legacy config", legacy.prizes.len()),
            Err(e) => log::error!("Failed to migrate legacy prizes: {e}"),
        }
        legacy.prizes
    }

    /// 每个奖项至少 1 个名额，ID 不重复
    pub fn check(prizes: &[Prize]) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(prizes.len());
        for prize in prizes {
            if prize.count < 1 {
                return Err(AppError::ValidationError(format!(
                    "Prize {} must award at least one winner",
                    prize.name
                )));
            }
            if !seen.insert(&prize.id) {
                return Err(AppError::ValidationError(format!(
                    "Duplicate prize id: {}",
                    prize.id
                )));
            }
        }
        Ok(())
    }

    pub fn save(&self, prizes: &[Prize]) -> AppResult<()> {
        Self::check(prizes)?;
        write_json(&*self.store, keys::PRIZES, prizes)
    }

    pub fn find(&self, id: &EntityId) -> AppResult<Prize> {
        self.load()
            .into_iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Prize {id} not found")))
    }

    /// 按路径参数查找（数字与字符串 ID 都按文本比较）
    pub fn find_by_key(&self, key: &str) -> AppResult<Prize> {
        self.load()
            .into_iter()
            .find(|p| p.id.to_string() == key)
            .ok_or_else(|| AppError::NotFound(format!("Prize {key} not found")))
    }

    pub fn draw_count(&self, prize_id: &EntityId) -> usize {
        self.record_service.count_for_prize(prize_id)
    }

    /// 中奖记录数达到配置人数即视为抽取完毕
    pub fn is_completed(&self, prize: &Prize) -> bool {
        self.draw_count(&prize.id) >= prize.count as usize
    }

    pub fn progress(&self, prize: Prize) -> PrizeProgress {
        let drawn = self.draw_count(&prize.id);
        let total = prize.count as usize;
        PrizeProgress {
            drawn,
            remaining: total.saturating_sub(drawn),
            completed: drawn >= total,
            prize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Participant;
    use crate::services::ParticipantService;
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn setup(store: Arc<MemoryStore>) -> (PrizeService, RecordService) {
        let store: SharedStore = store;
        let records = RecordService::new(store.clone(), ParticipantService::new(store.clone()));
        (PrizeService::new(store, records.clone()), records)
    }

    fn prize(id: i64, count: u32) -> Prize {
        Prize {
            id: EntityId::Int(id),
            name: format!("P{id}"),
            level: 0,
            count,
        }
    }

    #[test]
    fn test_legacy_migration() {
        let store = Arc::new(MemoryStore::with_entries([(
            keys::LEGACY_CONFIG,
            r#"{"prizes":[{"id":1,"name":"P1","count":1}],"title":"Gala"}"#,
        )]));
        let (service, _) = setup(store.clone());

        let loaded = service.load();
        assert_eq!(loaded, vec![prize(1, 1)]);

        let migrated: serde_json::Value =
            serde_json::from_str(&store.get(keys::PRIZES).unwrap().unwrap()).unwrap();
        assert_eq!(
            migrated,
            serde_json::json!([{"id":1,"name":"P1","level":0,"count":1}])
        );
        assert_eq!(service.load(), loaded);
    }

    #[test]
    fn test_legacy_without_prizes_is_ignored() {
        let store = Arc::new(MemoryStore::with_entries([(
            keys::LEGACY_CONFIG,
            r#"{"prizes":[]}"#,
        )]));
        let (service, _) = setup(store.clone());
        assert!(service.load().is_empty());
        assert!(store.get(keys::PRIZES).unwrap().is_none());
    }

    #[test]
    fn test_corrupt_new_key_does_not_migrate() {
        let store = Arc::new(MemoryStore::with_entries([
            (keys::PRIZES, "oops"),
            (
                keys::LEGACY_CONFIG,
                r#"{"prizes":[{"id":1,"name":"P1","count":1}]}"#,
            ),
        ]));
        let (service, _) = setup(store);
        assert!(service.load().is_empty());
    }

    #[test]
    fn test_save_validates_count_and_ids() {
        let (service, _) = setup(Arc::new(MemoryStore::new()));
        assert!(matches!(
            service.save(&[prize(1, 0)]),
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            service.save(&[prize(1, 1), prize(1, 2)]),
            Err(AppError::ValidationError(_))
        ));
        service.save(&[prize(1, 1), prize(2, 3)]).unwrap();
        assert_eq!(service.load().len(), 2);
    }

    #[test]
    fn test_completion_tracks_records() {
        let (service, records) = setup(Arc::new(MemoryStore::new()));
        let p = prize(1, 2);
        service.save(std::slice::from_ref(&p)).unwrap();
        assert!(!service.is_completed(&p));

        records.add(&Participant::new(1, "Alice"), &p).unwrap();
        let progress = service.progress(p.clone());
        assert_eq!((progress.drawn, progress.remaining), (1, 1));
        assert!(!progress.completed);

        records.add(&Participant::new(2, "Bob"), &p).unwrap();
        assert!(service.is_completed(&p));
        assert_eq!(service.find_by_key("1").unwrap(), p);
        assert!(service.find(&EntityId::from("1")).is_err());
    }
}
