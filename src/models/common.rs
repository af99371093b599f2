use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// 错误响应体中的 error 字段
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// 人员 / 奖项 ID
///
/// 历史数据中 ID 既可能是数字也可能是字符串，两种形式按原样保存。
/// 数字 `1` 与字符串 `"1"` 视为不同 ID。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(v) => write!(f, "{v}"),
            EntityId::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for EntityId {
    fn from(v: i64) -> Self {
        EntityId::Int(v)
    }
}

impl From<&str> for EntityId {
    fn from(v: &str) -> Self {
        EntityId::Text(v.to_string())
    }
}

impl From<String> for EntityId {
    fn from(v: String) -> Self {
        EntityId::Text(v)
    }
}
