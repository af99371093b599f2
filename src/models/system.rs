use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::{Participant, Prize, Settings, WinnerRecord};

pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// 系统是否已完成基础配置
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub is_ready: bool,
    pub missing_items: Vec<String>,
}

/// 完整系统数据（备份导出 / 组合缓存）
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SystemSnapshot {
    pub version: String,
    pub export_time: DateTime<Utc>,
    pub participants: Vec<Participant>,
    pub prizes: Vec<Prize>,
    pub settings: Option<Settings>,
    pub winner_records: Vec<WinnerRecord>,
}

/// 导入数据，缺省的部分保持不变
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    #[serde(default)]
    pub participants: Option<Vec<Participant>>,
    #[serde(default)]
    pub prizes: Option<Vec<Prize>>,
    #[serde(default)]
    pub settings: Option<Settings>,
    #[serde(default)]
    pub winner_records: Option<Vec<WinnerRecord>>,
}

impl From<SystemSnapshot> for ImportRequest {
    fn from(s: SystemSnapshot) -> Self {
        Self {
            participants: Some(s.participants),
            prizes: Some(s.prizes),
            settings: s.settings,
            winner_records: Some(s.winner_records),
        }
    }
}

/// 部门 / 职级人数统计
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStats {
    pub total: usize,
    pub departments: BTreeMap<String, usize>,
    pub positions: BTreeMap<String, usize>,
}
