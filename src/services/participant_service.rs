use crate::error::{AppError, AppResult};
use crate::models::{EntityId, Participant, ParticipantStats, ParticipantStatus, Settings};
use crate::storage::{SharedStore, keys, read_json, write_json};
use chrono::Utc;
use std::collections::{BTreeMap, HashSet};

/// 统计时缺少部门 / 职级的分组名
pub const UNASSIGNED: &str = "Unassigned";

#[derive(Clone)]
pub struct ParticipantService {
    store: SharedStore,
}

impl ParticipantService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// 读取人员名单；不存在或解析失败时为空
    pub fn load(&self) -> Vec<Participant> {
        read_json(&*self.store, keys::PARTICIPANTS).unwrap_or_default()
    }

    /// 同一名单内 ID 不允许重复
    pub fn check(participants: &[Participant]) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(participants.len());
        if let Some(dup) = participants.iter().find(|p| !seen.insert(&p.id)) {
            return Err(AppError::ValidationError(format!(
                "Duplicate participant id: {}",
                dup.id
            )));
        }
        Ok(())
    }

    /// 保存人员名单
    pub fn save(&self, participants: &[Participant]) -> AppResult<()> {
        Self::check(participants)?;
        write_json(&*self.store, keys::PARTICIPANTS, participants)
    }

    /// 可参与抽奖的人员：允许重复中奖时为全部人员，否则排除已中奖者
    pub fn eligible(&self, settings: Option<&Settings>) -> Vec<Participant> {
        let participants = self.load();
        if settings.is_some_and(|s| s.allow_repeat_wins) {
            return participants;
        }
        participants.into_iter().filter(|p| !p.is_won()).collect()
    }

    /// 更新单个人员状态（won 记录中奖时间，pending 清除中奖时间）
    ///
    /// 状态相同则不写入；人员不存在返回 NotFound。
    pub fn update_status(&self, id: &EntityId, status: ParticipantStatus) -> AppResult<Participant> {
        let mut participants = self.load();
        let participant = participants
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Participant {id} not found")))?;

        let changed = participant.transition(status, Utc::now());
        let updated = participant.clone();
        if changed {
            self.save(&participants)?;
        }
        Ok(updated)
    }

    /// 批量标记中奖，只写入一次
    pub fn mark_won(&self, ids: &[EntityId]) -> AppResult<usize> {
        let mut participants = self.load();
        let now = Utc::now();
        let mut changed = 0;
        for p in participants.iter_mut().filter(|p| ids.contains(&p.id)) {
            if p.transition(ParticipantStatus::Won, now) {
                changed += 1;
            }
        }
        if changed > 0 {
            self.save(&participants)?;
        }
        Ok(changed)
    }

    /// 重置所有人员为未中奖
    pub fn reset_all(&self) -> AppResult<usize> {
        let mut participants = self.load();
        let now = Utc::now();
        let reset = participants
            .iter_mut()
            .map(|p| p.transition(ParticipantStatus::Pending, now))
            .filter(|changed| *changed)
            .count();
        self.save(&participants)?;
        log::info!("Reset {reset} participants to pending");
        Ok(reset)
    }

    pub fn stats(&self) -> ParticipantStats {
        let participants = self.load();
        ParticipantStats {
            total: participants.len(),
            departments: department_stats(&participants),
            positions: position_stats(&participants),
        }
    }
}

fn group_count<'a>(values: impl Iterator<Item = Option<&'a str>>) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    for value in values {
        let key = value.filter(|v| !v.is_empty()).unwrap_or(UNASSIGNED);
        *stats.entry(key.to_string()).or_insert(0) += 1;
    }
    stats
}

pub fn department_stats(participants: &[Participant]) -> BTreeMap<String, usize> {
    group_count(participants.iter().map(|p| p.department.as_deref()))
}

pub fn position_stats(participants: &[Participant]) -> BTreeMap<String, usize> {
    group_count(participants.iter().map(|p| p.position.as_deref()))
}
