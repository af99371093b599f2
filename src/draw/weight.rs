//! 加权策略
//!
//! 权重总是基于“当前剩余”的候选人计算：每抽出一人后重新构建加权池，
//! 这样部门人数权重会随着该部门有人中奖离场而变化。

use std::collections::HashMap;

use crate::models::{Participant, WeightedBy};

pub const BASE_WEIGHT: f64 = 1.0;

/// 未匹配到任何职级关键字时的权重
pub const DEFAULT_POSITION_WEIGHT: f64 = 1.0;

/// 职级关键字表
///
/// 按顺序匹配，首个命中的关键字生效。中文关键字做子串匹配；英文关键字不区分大小写，
/// 且必须是完整单词（“Internal Audit” 不命中 intern）。顺序固定：
/// 技术序列（实习生 → 专家）在前，管理序列（主管 → 总裁）在后，
/// “副总裁 / vice president” 必须排在 “总裁 / president” 之前。
pub const POSITION_TIERS: &[(&[&str], f64)] = &[
    (&["实习生", "intern"], 1.5),
    (&["初级", "junior"], 1.2),
    (&["中级", "mid"], 1.0),
    (&["高级", "senior"], 0.8),
    (&["资深", "principal"], 0.6),
    (&["专家", "expert"], 0.4),
    (&["主管", "supervisor"], 0.8),
    (&["经理", "manager"], 0.6),
    (&["总监", "director"], 0.4),
    (&["副总裁", "vice president"], 0.2),
    (&["总裁", "president"], 0.1),
];

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// 部门权重 = 基础权重 × sqrt(总人数 / 部门人数)，保留两位小数
///
/// 部门人数为 0 时返回基础权重。
pub fn department_weight(dept_count: usize, total: usize, base_weight: f64) -> f64 {
    if dept_count == 0 {
        return base_weight;
    }
    round2(base_weight * (total as f64 / dept_count as f64).sqrt())
}

/// 英文关键字前后不能紧邻字母或数字
fn contains_word(text: &str, word: &str) -> bool {
    text.match_indices(word).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + word.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

fn keyword_matches(text: &str, keyword: &str) -> bool {
    if keyword.is_ascii() {
        contains_word(text, keyword)
    } else {
        text.contains(keyword)
    }
}

pub fn position_weight(position: Option<&str>) -> f64 {
    let lower = position.unwrap_or_default().to_lowercase();
    POSITION_TIERS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| keyword_matches(&lower, k)))
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_POSITION_WEIGHT)
}

fn department_counts(pool: &[Participant]) -> HashMap<Option<&str>, usize> {
    let mut counts = HashMap::new();
    for p in pool {
        *counts.entry(p.department.as_deref()).or_insert(0) += 1;
    }
    counts
}

/// 加权池中的一项（不持久化）
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPoolEntry<'a> {
    pub participant: &'a Participant,
    pub weight: f64,
    pub cumulative_weight: f64,
}

/// 按输入顺序构建累加权重数组，累加值单调不减
pub fn build_weighted_pool(pool: &[Participant], weighted_by: WeightedBy) -> Vec<WeightedPoolEntry<'_>> {
    let counts = match weighted_by {
        WeightedBy::Department => department_counts(pool),
        WeightedBy::Position => HashMap::new(),
    };

    let mut cumulative_weight = 0.0;
    pool.iter()
        .map(|participant| {
            let weight = match weighted_by {
                WeightedBy::Department => {
                    let dept_count = counts
                        .get(&participant.department.as_deref())
                        .copied()
                        .unwrap_or(0);
                    department_weight(dept_count, pool.len(), BASE_WEIGHT)
                }
                WeightedBy::Position => position_weight(participant.position.as_deref()),
            };
            cumulative_weight += weight;
            WeightedPoolEntry {
                participant,
                weight,
                cumulative_weight,
            }
        })
        .collect()
}

/// 二分查找第一个累加权重 ≥ target 的下标（相等时取较小下标）
pub fn locate(pool: &[WeightedPoolEntry<'_>], target: f64) -> Option<usize> {
    if pool.is_empty() {
        return None;
    }
    let idx = pool.partition_point(|e| e.cumulative_weight < target);
    Some(idx.min(pool.len() - 1))
}
