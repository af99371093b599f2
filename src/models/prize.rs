use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::EntityId;

/// 奖项配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    #[schema(value_type = String)]
    pub id: EntityId,
    pub name: String,
    /// 奖项等级，数字越小越重要（缺省为 0）
    #[serde(default)]
    pub level: u32,
    /// 该奖项的中奖人数，至少为 1
    pub count: u32,
}

/// 奖项抽取进度
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrizeProgress {
    pub prize: Prize,
    pub drawn: usize,
    pub remaining: usize,
    pub completed: bool,
}

/// 按奖项名称撤销中奖结果
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UndoPrizeRequest {
    pub prize_name: String,
}

/// 撤销结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UndoSummary {
    pub deleted_count: usize,
    pub participants_reset: usize,
}
