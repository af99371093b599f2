use crate::error::AppResult;
use crate::models::{EntityId, Participant, ParticipantStatus, Prize, UndoSummary, WinnerRecord};
use crate::services::ParticipantService;
use crate::storage::{SharedStore, keys, read_json, write_json};
use chrono::Utc;

/// 中奖记录（最新的在最前）
#[derive(Clone)]
pub struct RecordService {
    store: SharedStore,
    participant_service: ParticipantService,
}

impl RecordService {
    pub fn new(store: SharedStore, participant_service: ParticipantService) -> Self {
        Self {
            store,
            participant_service,
        }
    }

    pub fn load(&self) -> Vec<WinnerRecord> {
        read_json(&*self.store, keys::WINNER_RECORDS).unwrap_or_default()
    }

    pub fn save(&self, records: &[WinnerRecord]) -> AppResult<()> {
        write_json(&*self.store, keys::WINNER_RECORDS, records)
    }

    /// 为一名中奖者生成记录并插入到最前
    pub fn add(&self, winner: &Participant, prize: &Prize) -> AppResult<WinnerRecord> {
        let mut added = self.add_batch(std::slice::from_ref(winner), prize)?;
        Ok(added.remove(0))
    }

    /// 为同一奖项的一批中奖者生成记录，只写入一次
    ///
    /// 返回的记录按中奖顺序排列；日志中最后抽出的排在最前。
    pub fn add_batch(&self, winners: &[Participant], prize: &Prize) -> AppResult<Vec<WinnerRecord>> {
        let mut records = self.load();
        let now = Utc::now();
        // 记录 ID 取毫秒时间戳，同一毫秒内递增
        let mut next_id = records
            .iter()
            .map(|r| r.id + 1)
            .max()
            .unwrap_or(0)
            .max(now.timestamp_millis());

        let added: Vec<WinnerRecord> = winners
            .iter()
            .map(|winner| {
                let record = WinnerRecord::new(next_id, winner, prize, now);
                next_id += 1;
                record
            })
            .collect();

        for record in &added {
            records.insert(0, record.clone());
        }
        self.save(&records)?;
        Ok(added)
    }

    pub fn count_for_prize(&self, prize_id: &EntityId) -> usize {
        self.load().iter().filter(|r| &r.prize_id == prize_id).count()
    }

    /// 撤销某奖项（按名称）的全部中奖结果
    ///
    /// 先把相关人员恢复为未中奖，再删除这些记录。人员匹配以 ID 为准，
    /// ID 找不到时按 (姓名, 部门) 匹配，以兼容没有稳定 ID 的旧数据。
    pub fn delete_by_prize_name(&self, prize_name: &str) -> AppResult<UndoSummary> {
        let records = self.load();
        let (removed, kept): (Vec<WinnerRecord>, Vec<WinnerRecord>) = records
            .into_iter()
            .partition(|r| r.prize_name == prize_name);

        let mut participants = self.participant_service.load();
        let now = Utc::now();
        let mut participants_reset = 0;
        for record in &removed {
            let idx = participants
                .iter()
                .position(|p| record.matches_by_id(p))
                .or_else(|| participants.iter().position(|p| record.matches_by_name(p)));
            match idx {
                Some(idx) => {
                    participants[idx].transition(ParticipantStatus::Pending, now);
                    participants_reset += 1;
                }
                None => log::warn!(
                    "No participant found for record {} ({})",
                    record.id,
                    record.winner_name
                ),
            }
        }
        self.participant_service.save(&participants)?;
        self.save(&kept)?;

        log::info!(
            "Undo prize {prize_name}: {} records deleted, {participants_reset} participants reset",
            removed.len()
        );
        Ok(UndoSummary {
            deleted_count: removed.len(),
            participants_reset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn setup() -> (ParticipantService, RecordService) {
        let store: SharedStore = Arc::new(MemoryStore::new());
        let participants = ParticipantService::new(store.clone());
        let records = RecordService::new(store, participants.clone());
        (participants, records)
    }

    fn prize(id: i64, name: &str) -> Prize {
        Prize {
            id: EntityId::Int(id),
            name: name.to_string(),
            level: id as u32,
            count: 2,
        }
    }

    #[test]
    fn test_add_prepends_with_unique_ids() {
        let (_, records) = setup();
        let grand = prize(1, "Grand Prize");
        let a = records.add(&Participant::new(1, "Alice"), &grand).unwrap();
        let batch = records
            .add_batch(
                &[Participant::new(2, "Bob"), Participant::new(3, "Carol")],
                &grand,
            )
            .unwrap();

        let log = records.load();
        assert_eq!(log.len(), 3);
        assert_eq!(log[0].winner_name, "Carol");
        assert_eq!(log[2].id, a.id);
        assert!(batch[0].id > a.id);
        assert!(batch[1].id > batch[0].id);
        assert_eq!(log[0].prize_level, 1);
        assert_eq!(records.count_for_prize(&grand.id), 3);
        assert_eq!(records.count_for_prize(&EntityId::Int(9)), 0);
    }

    #[test]
    fn test_undo_prize_reverts_only_its_winners() {
        let (participants, records) = setup();
        let roster = vec![
            Participant::new(1, "Alice").with_department("R&D"),
            Participant::new(2, "Bob").with_department("HR"),
            Participant::new(3, "Carol").with_department("Ops"),
        ];
        participants.save(&roster).unwrap();

        let grand = prize(1, "Grand Prize");
        let second = prize(2, "Second Prize");
        records.add_batch(&roster[..2], &grand).unwrap();
        records.add(&roster[2], &second).unwrap();
        participants
            .mark_won(&[EntityId::Int(1), EntityId::Int(2), EntityId::Int(3)])
            .unwrap();

        let summary = records.delete_by_prize_name("Grand Prize").unwrap();
        assert_eq!(
            summary,
            UndoSummary {
                deleted_count: 2,
                participants_reset: 2
            }
        );

        let after = participants.load();
        assert!(!after[0].is_won() && after[0].win_time.is_none());
        assert!(!after[1].is_won() && after[1].win_time.is_none());
        assert!(after[2].is_won());

        let remaining = records.load();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].prize_name, "Second Prize");
    }

    #[test]
    fn test_undo_falls_back_to_name_and_department() {
        let (participants, records) = setup();
        let grand = prize(1, "Grand Prize");
        // 记录中的 ID 来自旧名单，当前名单已重新编号
        records
            .add(&Participant::new("legacy-7", "Dave").with_department("Ops"), &grand)
            .unwrap();
        let mut dave = Participant::new(70, "Dave").with_department("Ops");
        dave.transition(ParticipantStatus::Won, Utc::now());
        let other_dave = Participant::new(71, "Dave").with_department("Sales");
        participants.save(&[other_dave, dave]).unwrap();

        let summary = records.delete_by_prize_name("Grand Prize").unwrap();
        assert_eq!(summary.participants_reset, 1);
        let after = participants.load();
        assert_eq!(after[1].status, ParticipantStatus::Pending);
        assert!(records.load().is_empty());
    }

    #[test]
    fn test_undo_unknown_prize_is_noop() {
        let (_, records) = setup();
        records
            .add(&Participant::new(1, "Alice"), &prize(1, "Grand Prize"))
            .unwrap();
        let summary = records.delete_by_prize_name("Nothing").unwrap();
        assert_eq!(summary.deleted_count, 0);
        assert_eq!(records.load().len(), 1);
    }
}
