use crate::types::SaleSchedule;
use soroban_sdk::contracttype;

/// Sale phase derived from the clock and the token cap. Never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Phase {
    NotStarted,
    BonusActive,
    RegularActive,
    Finished,
}

impl Phase {
    pub fn evaluate(
        now: u64,
        schedule: &SaleSchedule,
        current_cap_tokens: i128,
        hard_cap_tokens: i128,
    ) -> Phase {
        if is_hard_cap_reached(current_cap_tokens, hard_cap_tokens) {
            Phase::Finished
        } else {
            Phase::window(now, schedule)
        }
    }

    /// Phase from the clock alone. The payment path is gated on this, so a
    /// reached hard cap is reported but does not stop purchases.
    pub fn window(now: u64, schedule: &SaleSchedule) -> Phase {
        if is_finish_date_reached(now, schedule) {
            Phase::Finished
        } else if now < schedule.start_date {
            Phase::NotStarted
        } else if now < schedule.bonus_end_date {
            Phase::BonusActive
        } else {
            Phase::RegularActive
        }
    }

    /// Whether the payment path accepts purchases.
    pub fn is_open(self) -> bool {
        matches!(self, Phase::BonusActive | Phase::RegularActive)
    }

    pub fn has_bonus(self) -> bool {
        self == Phase::BonusActive
    }
}

pub fn is_finish_date_reached(now: u64, schedule: &SaleSchedule) -> bool {
    now >= schedule.end_date
}

pub fn is_hard_cap_reached(current_cap_tokens: i128, hard_cap_tokens: i128) -> bool {
    current_cap_tokens >= hard_cap_tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    const HARD_CAP: i128 = 55_000;

    fn schedule() -> SaleSchedule {
        SaleSchedule {
            start_date: 1_000,
            bonus_end_date: 2_500,
            end_date: 3_000,
        }
    }

    #[test]
    fn test_time_boundaries() {
        let s = schedule();
        assert_eq!(Phase::evaluate(0, &s, 0, HARD_CAP), Phase::NotStarted);
        assert_eq!(Phase::evaluate(999, &s, 0, HARD_CAP), Phase::NotStarted);
        assert_eq!(Phase::evaluate(1_000, &s, 0, HARD_CAP), Phase::BonusActive);
        assert_eq!(Phase::evaluate(2_499, &s, 0, HARD_CAP), Phase::BonusActive);
        assert_eq!(Phase::evaluate(2_500, &s, 0, HARD_CAP), Phase::RegularActive);
        assert_eq!(Phase::evaluate(2_999, &s, 0, HARD_CAP), Phase::RegularActive);
        assert_eq!(Phase::evaluate(3_000, &s, 0, HARD_CAP), Phase::Finished);
        assert_eq!(Phase::evaluate(u64::MAX, &s, 0, HARD_CAP), Phase::Finished);
    }

    #[test]
    fn test_hard_cap_finishes_any_time() {
        let s = schedule();
        assert_eq!(Phase::evaluate(0, &s, HARD_CAP, HARD_CAP), Phase::Finished);
        assert_eq!(Phase::evaluate(1_500, &s, HARD_CAP + 1, HARD_CAP), Phase::Finished);
        assert_eq!(
            Phase::evaluate(1_500, &s, HARD_CAP - 1, HARD_CAP),
            Phase::BonusActive
        );
    }

    #[test]
    fn test_window_ignores_hard_cap() {
        let s = schedule();
        assert_eq!(Phase::window(1_500, &s), Phase::BonusActive);
        assert_eq!(Phase::window(2_600, &s), Phase::RegularActive);
        assert_eq!(Phase::window(999, &s), Phase::NotStarted);
        assert_eq!(Phase::window(3_000, &s), Phase::Finished);
        // the reported phase still folds in the cap
        assert_eq!(Phase::evaluate(2_600, &s, HARD_CAP, HARD_CAP), Phase::Finished);
    }

    #[test]
    fn test_collapsed_bonus_window() {
        let s = SaleSchedule {
            start_date: 10,
            bonus_end_date: 10,
            end_date: 20,
        };
        assert_eq!(Phase::evaluate(10, &s, 0, HARD_CAP), Phase::RegularActive);
    }

    #[test]
    fn test_open_phases() {
        assert!(!Phase::NotStarted.is_open());
        assert!(Phase::BonusActive.is_open());
        assert!(Phase::RegularActive.is_open());
        assert!(!Phase::Finished.is_open());
        assert!(Phase::BonusActive.has_bonus());
        assert!(!Phase::RegularActive.has_bonus());
    }

    #[test]
    fn test_evaluation_is_stable() {
        let s = schedule();
        for now in [0u64, 1_000, 2_600, 5_000] {
            assert_eq!(
                Phase::evaluate(now, &s, 10, HARD_CAP),
                Phase::evaluate(now, &s, 10, HARD_CAP)
            );
        }
    }
}
