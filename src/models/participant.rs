use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::EntityId;

/// 参与人员中奖状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    #[default]
    Pending,
    Won,
}

/// 参与人员
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", from = "StoredParticipant")]
pub struct Participant {
    #[schema(value_type = String)]
    pub id: EntityId,
    pub name: String,
    pub department: Option<String>,
    /// 职级 / 职位（旧数据字段名为 jobTitle）
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub status: ParticipantStatus,
    pub win_time: Option<DateTime<Utc>>,
}

/// 存储 / 请求中的人员原始形态
///
/// 旧数据可能同时带有 position 与 jobTitle，读取后合并：
/// position 非空时优先，否则取 jobTitle。
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredParticipant {
    id: EntityId,
    name: String,
    #[serde(default)]
    department: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    job_title: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    status: ParticipantStatus,
    #[serde(default)]
    win_time: Option<DateTime<Utc>>,
}

impl From<StoredParticipant> for Participant {
    fn from(raw: StoredParticipant) -> Self {
        let position = raw
            .position
            .filter(|p| !p.is_empty())
            .or(raw.job_title.filter(|t| !t.is_empty()));
        Self {
            id: raw.id,
            name: raw.name,
            department: raw.department,
            position,
            avatar: raw.avatar,
            status: raw.status,
            win_time: raw.win_time,
        }
    }
}

impl Participant {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            department: None,
            position: None,
            avatar: None,
            status: ParticipantStatus::Pending,
            win_time: None,
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn is_won(&self) -> bool {
        self.status == ParticipantStatus::Won
    }

    /// 切换状态；状态未变化时保持原样（重复调用无副作用），返回是否发生变化
    pub fn transition(&mut self, status: ParticipantStatus, at: DateTime<Utc>) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.win_time = match status {
            ParticipantStatus::Won => Some(at),
            ParticipantStatus::Pending => None,
        };
        true
    }
}

/// 更新单个人员状态
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    #[schema(value_type = String)]
    pub id: EntityId,
    pub status: ParticipantStatus,
}
