use crate::error::{AppError, AppResult};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};

/// 均匀分布的随机整数来源
pub trait RandomSource {
    /// 返回 `[0, max)` 内的整数，`max` 必须为正数
    fn next(&mut self, max: u64) -> AppResult<u64>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next(&mut self, max: u64) -> AppResult<u64> {
        (**self).next(max)
    }
}

fn check_bound(max: u64) -> AppResult<()> {
    if max == 0 {
        return Err(AppError::InternalError(
            "random upper bound must be positive".into(),
        ));
    }
    Ok(())
}

/// 操作系统提供的密码学安全随机数
///
/// 读取失败时返回 [`AppError::RandomUnavailable`]，不会退回到弱随机数。
/// 取模带来的微小偏差在抽奖场景下可忽略。
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next(&mut self, max: u64) -> AppResult<u64> {
        check_bound(max)?;
        let mut buf = [0u8; 8];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| AppError::RandomUnavailable(e.to_string()))?;
        Ok(u64::from_le_bytes(buf) % max)
    }
}

/// 固定种子的伪随机数，用于统计类测试与可复现的模拟
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next(&mut self, max: u64) -> AppResult<u64> {
        check_bound(max)?;
        Ok(self.rng.gen_range(0..max))
    }
}

/// 按给定序列回放随机值，并记录每次调用的上限
///
/// 每个值先对 `max` 取模再返回；序列用完后从头循环，空序列恒返回 0。
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<u64>,
    cursor: usize,
    bounds: Vec<u64>,
}

impl SequenceRandom {
    pub fn new(values: Vec<u64>) -> Self {
        Self {
            values,
            cursor: 0,
            bounds: Vec::new(),
        }
    }

    /// 历次调用传入的上限，按调用顺序
    pub fn bounds(&self) -> &[u64] {
        &self.bounds
    }

    pub fn calls(&self) -> usize {
        self.bounds.len()
    }
}

impl RandomSource for SequenceRandom {
    fn next(&mut self, max: u64) -> AppResult<u64> {
        check_bound(max)?;
        self.bounds.push(max);
        if self.values.is_empty() {
            return Ok(0);
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        Ok(value % max)
    }
}

/// 模拟不可用的随机源
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableRandom;

impl RandomSource for UnavailableRandom {
    fn next(&mut self, _max: u64) -> AppResult<u64> {
        Err(AppError::RandomUnavailable("no secure source".into()))
    }
}
