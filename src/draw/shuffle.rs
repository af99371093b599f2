use super::RandomSource;
use crate::error::AppResult;

/// Fisher-Yates 洗牌，返回打乱后的新数组，输入保持不变
pub fn shuffle<T: Clone, R: RandomSource + ?Sized>(items: &[T], rng: &mut R) -> AppResult<Vec<T>> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.next(i as u64 + 1)? as usize;
        shuffled.swap(i, j);
    }
    Ok(shuffled)
}
