use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 抽奖模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    #[default]
    Random,
    Weighted,
}

/// 加权依据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WeightedBy {
    Department,
    Position,
}

/// 全局抽奖设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub draw_mode: DrawMode,
    /// 仅在 drawMode = weighted 时生效
    #[serde(default)]
    pub weighted_by: Option<WeightedBy>,
    #[serde(default)]
    pub allow_repeat_wins: bool,
}

impl Settings {
    /// 实际生效的加权依据；非加权模式或未配置时为 None
    pub fn effective_weighting(&self) -> Option<WeightedBy> {
        match self.draw_mode {
            DrawMode::Weighted => self.weighted_by,
            DrawMode::Random => None,
        }
    }
}

/// 当前算法说明
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    pub draw_mode: DrawMode,
    pub weighted_by: Option<WeightedBy>,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_fill_defaults() {
        let s: Settings = serde_json::from_str(r#"{"drawMode":"weighted"}"#).unwrap();
        assert_eq!(s.draw_mode, DrawMode::Weighted);
        assert_eq!(s.weighted_by, None);
        assert!(!s.allow_repeat_wins);
        assert_eq!(s.effective_weighting(), None);
    }

    #[test]
    fn test_effective_weighting() {
        let s = Settings {
            draw_mode: DrawMode::Weighted,
            weighted_by: Some(WeightedBy::Position),
            allow_repeat_wins: false,
        };
        assert_eq!(s.effective_weighting(), Some(WeightedBy::Position));

        let s = Settings {
            draw_mode: DrawMode::Random,
            ..s
        };
        assert_eq!(s.effective_weighting(), None);
    }

    #[test]
    fn test_malformed_mode_is_rejected() {
        assert!(serde_json::from_str::<Settings>(r#"{"drawMode":"lucky"}"#).is_err());
    }
}
