use std::collections::HashSet;

use crate::models::{EntityId, Participant, Settings, ValidationReport};

/// 事后校验抽奖结果的公平性
///
/// 依次检查：
/// 1. 不允许重复中奖时，中奖者 ID 两两不同
/// 2. 每个中奖者都在原始名单中
///
/// 校验只报告问题，不修正结果；是否丢弃重抽由调用方决定。
pub fn validate(
    participants: &[Participant],
    winners: &[Participant],
    settings: Option<&Settings>,
) -> ValidationReport {
    let allow_repeat_wins = settings.is_some_and(|s| s.allow_repeat_wins);

    if !allow_repeat_wins {
        let mut seen: HashSet<&EntityId> = HashSet::with_capacity(winners.len());
        if let Some(dup) = winners.iter().find(|w| !seen.insert(&w.id)) {
            return ValidationReport::invalid(format!(
                "duplicate winner: {} ({})",
                dup.name, dup.id
            ));
        }
    }

    let roster: HashSet<&EntityId> = participants.iter().map(|p| &p.id).collect();
    if let Some(outsider) = winners.iter().find(|w| !roster.contains(&w.id)) {
        return ValidationReport::invalid(format!(
            "winner {} not in roster",
            outsider.name
        ));
    }

    ValidationReport::valid(winners.len(), participants.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Participant> {
        vec![
            Participant::new(1, "Alice"),
            Participant::new(2, "Bob"),
            Participant::new(3, "Carol"),
        ]
    }

    #[test]
    fn test_valid_result_reports_counts() {
        let pool = roster();
        let report = validate(&pool, &pool[..2], None);
        assert!(report.is_valid);
        assert_eq!(report.winner_count, Some(2));
        assert_eq!(report.total_participants, Some(3));
        assert!(report.reason.is_none());
    }

    #[test]
    fn test_duplicate_rejected_unless_repeat_allowed() {
        let pool = roster();
        let winners = vec![pool[0].clone(), pool[0].clone()];

        let report = validate(&pool, &winners, None);
        assert!(!report.is_valid);
        assert!(report.reason.unwrap().contains("duplicate winner"));

        let settings = Settings {
            allow_repeat_wins: true,
            ..Settings::default()
        };
        assert!(validate(&pool, &winners, Some(&settings)).is_valid);
    }

    #[test]
    fn test_outsider_rejected_with_name() {
        let pool = roster();
        let winners = vec![pool[1].clone(), Participant::new(42, "Mallory")];
        let report = validate(&pool, &winners, None);
        assert!(!report.is_valid);
        let reason = report.reason.unwrap();
        assert!(reason.contains("Mallory"));
        assert!(reason.contains("not in roster"));
    }

    #[test]
    fn test_same_id_different_type_is_outsider() {
        let pool = roster();
        let winners = vec![Participant::new("1", "Alice")];
        assert!(!validate(&pool, &winners, None).is_valid);
    }
}
