use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{EntityId, Participant, Prize};

/// 中奖记录（创建后不再修改）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinnerRecord {
    /// 创建时间戳（毫秒），同一毫秒内递增保证唯一
    pub id: i64,
    #[schema(value_type = String)]
    pub winner_id: EntityId,
    pub winner_name: String,
    #[serde(default)]
    pub winner_dept: Option<String>,
    #[serde(default)]
    pub winner_avatar: Option<String>,
    #[schema(value_type = String)]
    pub prize_id: EntityId,
    pub prize_name: String,
    #[serde(default)]
    pub prize_level: u32,
    pub draw_time: DateTime<Utc>,
}

impl WinnerRecord {
    pub fn new(id: i64, winner: &Participant, prize: &Prize, draw_time: DateTime<Utc>) -> Self {
        Self {
            id,
            winner_id: winner.id.clone(),
            winner_name: winner.name.clone(),
            winner_dept: winner.department.clone(),
            winner_avatar: winner.avatar.clone(),
            prize_id: prize.id.clone(),
            prize_name: prize.name.clone(),
            prize_level: prize.level,
            draw_time,
        }
    }

    /// 撤销时匹配人员：ID 优先；旧数据缺少稳定 ID 时退回按 (姓名, 部门) 匹配
    pub fn matches_by_id(&self, participant: &Participant) -> bool {
        participant.id == self.winner_id
    }

    pub fn matches_by_name(&self, participant: &Participant) -> bool {
        participant.name == self.winner_name && participant.department == self.winner_dept
    }
}
