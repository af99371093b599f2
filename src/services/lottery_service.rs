use crate::draw::{DrawEngine, RandomSource, validate};
use crate::error::{AppError, AppResult};
use crate::models::{DrawResult, EntityId, ParticipantStatus};
use crate::services::{ParticipantService, PrizeService, RecordService, SettingsService};
use std::sync::{Arc, Mutex};

/// 一次完整的抽奖流程：读取可抽人员 → 抽取 → 校验 → 写入记录与状态
#[derive(Clone)]
pub struct LotteryService {
    participant_service: ParticipantService,
    prize_service: PrizeService,
    record_service: RecordService,
    settings_service: SettingsService,
    max_batch: usize,
    // 同一时刻只允许一次抽奖读写存储
    draw_lock: Arc<Mutex<()>>,
}

impl LotteryService {
    pub fn new(
        participant_service: ParticipantService,
        prize_service: PrizeService,
        record_service: RecordService,
        settings_service: SettingsService,
        max_batch: usize,
    ) -> Self {
        Self {
            participant_service,
            prize_service,
            record_service,
            settings_service,
            max_batch,
            draw_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 使用系统安全随机源抽奖
    pub fn run_draw(&self, prize_id: &EntityId, count: usize) -> AppResult<DrawResult> {
        self.run_draw_with(&mut DrawEngine::secure(), prize_id, count)
    }

    /// 抽奖逻辑:
    /// 1. 校验人数，找到奖项，已抽完则拒绝
    /// 2. 请求人数按奖项剩余名额截断，避免超发
    /// 3. 按设置选择算法抽取
    /// 4. 校验结果，不通过则丢弃（不写入任何数据）
    /// 5. 写入中奖记录并标记人员为已中奖
    pub fn run_draw_with<R: RandomSource>(
        &self,
        engine: &mut DrawEngine<R>,
        prize_id: &EntityId,
        count: usize,
    ) -> AppResult<DrawResult> {
        if count == 0 || count > self.max_batch {
            return Err(AppError::ValidationError(format!(
                "Draw count must be between 1 and {}",
                self.max_batch
            )));
        }

        let _guard = self
            .draw_lock
            .lock()
            .map_err(|_| AppError::InternalError("Draw lock poisoned".into()))?;

        let prize = self.prize_service.find(prize_id)?;
        let drawn = self.prize_service.draw_count(&prize.id);
        let remaining_slots = (prize.count as usize).saturating_sub(drawn);
        if remaining_slots == 0 {
            return Err(AppError::ValidationError(format!(
                "Prize {} is already completed",
                prize.name
            )));
        }
        let requested = count.min(remaining_slots);

        let settings = self.settings_service.load();
        let eligible = self.participant_service.eligible(settings.as_ref());
        let mut winners = engine.draw(&eligible, requested, settings.as_ref())?;

        let validation = validate(&eligible, &winners, settings.as_ref());
        if !validation.is_valid {
            return Err(AppError::InvalidResult(
                validation.reason.unwrap_or_default(),
            ));
        }

        let records = if winners.is_empty() {
            Vec::new()
        } else {
            // 先标记人员（名单校验失败时不写入任何数据），再写中奖记录；
            // 记录写入失败则恢复原名单，避免出现“占用名额但人员仍可再抽”
            let previous = self.participant_service.load();
            let ids: Vec<EntityId> = winners.iter().map(|w| w.id.clone()).collect();
            self.participant_service.mark_won(&ids)?;
            let records = match self.record_service.add_batch(&winners, &prize) {
                Ok(records) => records,
                Err(e) => {
                    if let Err(restore) = self.participant_service.save(&previous) {
                        log::error!("Failed to restore participants after draw error: {restore}");
                    }
                    return Err(e);
                }
            };
            for (winner, record) in winners.iter_mut().zip(&records) {
                winner.transition(ParticipantStatus::Won, record.draw_time);
            }
            records
        };

        let partial = winners.len() < requested;
        if partial {
            log::warn!(
                "Prize {}: only {} eligible winners for {} requested",
                prize.name,
                winners.len(),
                requested
            );
        }
        log::info!(
            "Drew {} winners for prize {} ({} requested, {} eligible)",
            winners.len(),
            prize.name,
            requested,
            eligible.len()
        );

        Ok(DrawResult {
            prize,
            requested,
            winners,
            records,
            partial,
            validation,
        })
    }
}
