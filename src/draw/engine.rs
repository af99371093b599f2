use super::weight::{build_weighted_pool, locate};
use super::{OsRandom, RandomSource, shuffle};
use crate::error::AppResult;
use crate::models::{AlgorithmInfo, DrawMode, Participant, Settings, WeightedBy};

/// 抽奖引擎：不放回的随机 / 加权抽取
///
/// 候选池为空时返回空结果而不是错误；返回人数少于请求人数表示可抽人员不足，
/// 由调用方按“名额不足”处理。
pub struct DrawEngine<R: RandomSource> {
    rng: R,
}

impl DrawEngine<OsRandom> {
    pub fn secure() -> Self {
        Self::new(OsRandom)
    }
}

impl<R: RandomSource> DrawEngine<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn source(&self) -> &R {
        &self.rng
    }

    /// 等概率抽取：洗牌后取前 count 个
    pub fn random_draw(
        &mut self,
        participants: &[Participant],
        count: usize,
    ) -> AppResult<Vec<Participant>> {
        if participants.is_empty() {
            return Ok(Vec::new());
        }
        if count >= participants.len() {
            return Ok(participants.to_vec());
        }

        let mut shuffled = shuffle(participants, &mut self.rng)?;
        shuffled.truncate(count);
        Ok(shuffled)
    }

    /// 加权抽取：每抽一人都基于剩余人员重建加权池
    pub fn weighted_draw(
        &mut self,
        participants: &[Participant],
        count: usize,
        weighted_by: WeightedBy,
    ) -> AppResult<Vec<Participant>> {
        if participants.is_empty() {
            return Ok(Vec::new());
        }
        if count >= participants.len() {
            return Ok(participants.to_vec());
        }

        let mut remaining = participants.to_vec();
        let mut winners = Vec::with_capacity(count);

        for _ in 0..count {
            if remaining.is_empty() {
                break;
            }

            let winner = {
                let pool = build_weighted_pool(&remaining, weighted_by);
                let total_weight = pool.last().map(|e| e.cumulative_weight).unwrap_or(0.0);
                // 随机目标精确到 0.01
                let bound = ((total_weight * 100.0).floor() as u64).max(1);
                let target = self.rng.next(bound)? as f64 / 100.0;
                let Some(idx) = locate(&pool, target) else {
                    break;
                };
                pool[idx].participant.clone()
            };

            // 按 ID 移除，而不是按位置
            if let Some(pos) = remaining.iter().position(|p| p.id == winner.id) {
                remaining.remove(pos);
            }
            winners.push(winner);
        }

        if winners.len() < count {
            log::warn!(
                "Weighted draw returned {} of {} requested winners: pool exhausted",
                winners.len(),
                count
            );
        }

        Ok(winners)
    }

    /// 统一入口：仅当 drawMode = weighted 且配置了 weightedBy 时加权抽取，
    /// 其余情况（包括缺少设置）一律等概率抽取
    pub fn draw(
        &mut self,
        participants: &[Participant],
        count: usize,
        settings: Option<&Settings>,
    ) -> AppResult<Vec<Participant>> {
        match settings.and_then(Settings::effective_weighting) {
            Some(weighted_by) => self.weighted_draw(participants, count, weighted_by),
            None => self.random_draw(participants, count),
        }
    }
}

/// 当前设置对应的算法说明
pub fn algorithm_info(settings: Option<&Settings>) -> AlgorithmInfo {
    match settings.and_then(Settings::effective_weighting) {
        Some(weighted_by) => {
            let by = match weighted_by {
                WeightedBy::Department => "department size",
                WeightedBy::Position => "position tier",
            };
            AlgorithmInfo {
                draw_mode: DrawMode::Weighted,
                weighted_by: Some(weighted_by),
                description: format!(
                    "Weighted draw by {by}: smaller departments and junior positions weigh more"
                ),
            }
        }
        None => AlgorithmInfo {
            draw_mode: DrawMode::Random,
            weighted_by: None,
            description: "Random draw: every candidate has equal probability".to_string(),
        },
    }
}
