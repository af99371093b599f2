use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{EntityId, Participant, Prize, Settings, WinnerRecord};

/// 抽奖请求
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawRequest {
    #[schema(value_type = String)]
    pub prize_id: EntityId,
    pub count: usize,
}

/// 抽奖结果
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult {
    pub prize: Prize,
    /// 实际请求人数（已按奖项剩余名额截断）
    pub requested: usize,
    pub winners: Vec<Participant>,
    pub records: Vec<WinnerRecord>,
    /// 可抽人员不足，中奖人数少于请求人数
    pub partial: bool,
    pub validation: ValidationReport,
}

/// 结果校验请求（对任意名单做事后审计）
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub participants: Vec<Participant>,
    pub winners: Vec<Participant>,
    #[serde(default)]
    pub settings: Option<Settings>,
}

/// 公平性校验结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_participants: Option<usize>,
}

impl ValidationReport {
    pub fn valid(winner_count: usize, total_participants: usize) -> Self {
        Self {
            is_valid: true,
            reason: None,
            winner_count: Some(winner_count),
            total_participants: Some(total_participants),
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            reason: Some(reason.into()),
            winner_count: None,
            total_participants: None,
        }
    }
}
