//! Menstrual cycle phase estimation.
//!
//! The estimate uses fixed day offsets from the most recent cycle start: the
//! period window covers days 0 through 5, the ovulation window days 12
//! through 16, and the three days before the projected next start are flagged
//! as upcoming. Only the single most recent cycle length is used; there is no
//! learning from history.
//!
//! Classification is a pure function of `(last_period_start,
//! cycle_length_days, today)`. Nothing is stored between calls.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::date_math::{self, add_days, days_between, days_until_from};

/// Days since the last start that count as the period itself.
pub const PERIOD_WINDOW: RangeInclusive<i64> = 0..=5;
/// Days since the last start that count as the ovulation window.
pub const OVULATION_WINDOW: RangeInclusive<i64> = 12..=16;
/// Days before the projected next start that count as "upcoming".
pub const UPCOMING_WINDOW: RangeInclusive<i64> = 0..=3;

pub const MIN_CYCLE_LENGTH: i64 = 21;
pub const MAX_CYCLE_LENGTH: i64 = 35;
pub const DEFAULT_CYCLE_LENGTH: i64 = 28;

/// Clamp a user-entered cycle length to the conventional 21..=35 day range.
///
/// The engine itself accepts any length; this is for input forms.
pub fn clamp_cycle_length(days: i64) -> i64 {
    days.clamp(MIN_CYCLE_LENGTH, MAX_CYCLE_LENGTH)
}

/// The most recent cycle start and the cycle length to project with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleRecord {
    #[serde(rename = "lastPeriodDate", alias = "lastPeriodStart", alias = "last_period_date")]
    pub last_period_start: NaiveDate,
    #[serde(rename = "cycleLength", alias = "cycle_length")]
    pub cycle_length_days: i64,
}

impl CycleRecord {
    pub fn new(last_period_start: NaiveDate, cycle_length_days: i64) -> Self {
        if !(MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&cycle_length_days) {
            warn!(
                cycle_length_days,
                "cycle length is outside the usual {MIN_CYCLE_LENGTH}-{MAX_CYCLE_LENGTH} day range"
            );
        }
        Self {
            last_period_start,
            cycle_length_days,
        }
    }

    /// Projected start of the next cycle. Saturates at the calendar limits
    /// for absurd cycle lengths.
    pub fn next_period_date(&self) -> NaiveDate {
        add_days(self.last_period_start, self.cycle_length_days)
    }

    pub fn phase_on(&self, today: NaiveDate) -> PhaseResult {
        phase_on(self, today)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Period,
    Safe,
    Ovulation,
    Upcoming,
}

impl Phase {
    pub fn title(&self) -> &'static str {
        match self {
            Phase::Period => "Period Time",
            Phase::Ovulation => "Ovulation Phase",
            Phase::Upcoming => "Period Coming Soon",
            Phase::Safe => "Normal Days",
        }
    }

    pub fn message(&self, days_until_next: i64) -> String {
        match self {
            Phase::Period => "Rest well and stay hydrated. Take it easy.".to_string(),
            Phase::Ovulation => {
                "You may feel more energetic; a good time for light walks.".to_string()
            }
            Phase::Upcoming => {
                format!("Your period might start in {days_until_next} days, get ready.")
            }
            Phase::Safe => format!("{days_until_next} days until next period."),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Period => write!(f, "period"),
            Phase::Safe => write!(f, "safe"),
            Phase::Ovulation => write!(f, "ovulation"),
            Phase::Upcoming => write!(f, "upcoming"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseResult {
    pub phase: Phase,
    pub days_until_next: i64,
    pub next_period_date: NaiveDate,
}

impl PhaseResult {
    /// `Overdue`, `Today` or `N days`.
    pub fn countdown_label(&self) -> String {
        match self.days_until_next {
            d if d < 0 => "Overdue".to_string(),
            0 => "Today".to_string(),
            1 => "1 day".to_string(),
            d => format!("{d} days"),
        }
    }
}

/// Pick the phase from the two day counts.
///
/// The windows overlap for short cycles, so the guards are evaluated in a
/// fixed order and the first match wins: period, ovulation, upcoming, safe.
pub fn classify(days_since_last_start: i64, days_until_next: i64) -> Phase {
    if PERIOD_WINDOW.contains(&days_since_last_start) {
        Phase::Period
    } else if OVULATION_WINDOW.contains(&days_since_last_start) {
        Phase::Ovulation
    } else if UPCOMING_WINDOW.contains(&days_until_next) {
        Phase::Upcoming
    } else {
        Phase::Safe
    }
}

/// Classify `record` as of `today`.
pub fn phase_on(record: &CycleRecord, today: NaiveDate) -> PhaseResult {
    let days_since_last_start = days_between(record.last_period_start, today);
    let next_period_date = record.next_period_date();
    let days_until_next = days_until_from(today, next_period_date);
    let phase = classify(days_since_last_start, days_until_next);

    debug!(
        %today,
        days_since_last_start,
        days_until_next,
        %phase,
        "classified cycle phase"
    );

    PhaseResult {
        phase,
        days_until_next,
        next_period_date,
    }
}

/// Classify `record` as of today's local date.
pub fn phase(record: &CycleRecord) -> PhaseResult {
    phase_on(record, date_math::today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn started_days_ago(days: i64, cycle_length_days: i64) -> PhaseResult {
        let record = CycleRecord {
            last_period_start: add_days(today(), -days),
            cycle_length_days,
        };
        phase_on(&record, today())
    }

    #[test]
    fn start_today_is_period() {
        let result = started_days_ago(0, 28);
        assert_eq!(result.phase, Phase::Period);
        assert_eq!(result.days_until_next, 28);
        assert_eq!(result.next_period_date, add_days(today(), 28));
    }

    #[test]
    fn thirteen_days_in_is_ovulation() {
        assert_eq!(started_days_ago(13, 28).phase, Phase::Ovulation);
    }

    #[test]
    fn three_days_before_next_is_upcoming() {
        let result = started_days_ago(25, 28);
        assert_eq!(
            result,
            PhaseResult {
                phase: Phase::Upcoming,
                days_until_next: 3,
                next_period_date: add_days(today(), 3),
            }
        );
    }

    #[test]
    fn eight_days_in_is_safe() {
        assert_eq!(started_days_ago(8, 28).phase, Phase::Safe);
    }

    #[test]
    fn window_edges_are_inclusive() {
        assert_eq!(started_days_ago(5, 28).phase, Phase::Period);
        assert_eq!(started_days_ago(6, 28).phase, Phase::Safe);
        assert_eq!(started_days_ago(11, 28).phase, Phase::Safe);
        assert_eq!(started_days_ago(12, 28).phase, Phase::Ovulation);
        assert_eq!(started_days_ago(16, 28).phase, Phase::Ovulation);
        assert_eq!(started_days_ago(17, 28).phase, Phase::Safe);
        assert_eq!(started_days_ago(24, 28).phase, Phase::Safe);
        assert_eq!(started_days_ago(25, 28).phase, Phase::Upcoming);

        let due_today = started_days_ago(28, 28);
        assert_eq!(due_today.days_until_next, 0);
        assert_eq!(due_today.phase, Phase::Upcoming);
    }

    #[test]
    fn overdue_cycle_is_safe() {
        let result = started_days_ago(40, 28);
        assert_eq!(result.days_until_next, -12);
        assert_eq!(result.phase, Phase::Safe);
        assert_eq!(result.countdown_label(), "Overdue");
    }

    #[test]
    fn period_wins_over_upcoming() {
        // next start is two days away, but we are still inside the period window
        let result = started_days_ago(3, 5);
        assert_eq!(result.days_until_next, 2);
        assert_eq!(result.phase, Phase::Period);
    }

    #[test]
    fn ovulation_wins_over_upcoming() {
        let result = started_days_ago(12, 14);
        assert_eq!(result.days_until_next, 2);
        assert_eq!(result.phase, Phase::Ovulation);
    }

    #[test]
    fn future_start_falls_through() {
        let safe = started_days_ago(-2, 28);
        assert_eq!(safe.phase, Phase::Safe);
        assert_eq!(safe.days_until_next, 30);

        let upcoming = started_days_ago(-1, 1);
        assert_eq!(upcoming.days_until_next, 2);
        assert_eq!(upcoming.phase, Phase::Upcoming);
    }

    #[test]
    fn extreme_cycle_lengths_stay_consistent() {
        for length in [1, 0, -5, 90, 365 * 1000, i64::MAX, i64::MIN] {
            let record = CycleRecord {
                last_period_start: add_days(today(), -8),
                cycle_length_days: length,
            };
            let result = phase_on(&record, today());
            assert_eq!(
                result.days_until_next,
                days_between(today(), result.next_period_date),
                "length {length}"
            );
        }

        assert_eq!(started_days_ago(8, i64::MAX).next_period_date, NaiveDate::MAX);
        assert_eq!(started_days_ago(8, i64::MIN).next_period_date, NaiveDate::MIN);
        assert_eq!(started_days_ago(8, 90).phase, Phase::Safe);
    }

    #[test]
    fn phase_depends_on_length_only_through_days_until_next() {
        for since in -40..=120 {
            for length in 1..=90 {
                let result = started_days_ago(since, length);
                assert_eq!(
                    result.phase,
                    classify(since, result.days_until_next),
                    "since {since}, length {length}"
                );
                if PERIOD_WINDOW.contains(&since) {
                    assert_eq!(result.phase, Phase::Period);
                }
            }
        }
    }

    #[test]
    fn countdown_labels() {
        assert_eq!(started_days_ago(28, 28).countdown_label(), "Today");
        assert_eq!(started_days_ago(27, 28).countdown_label(), "1 day");
        assert_eq!(started_days_ago(8, 28).countdown_label(), "20 days");
    }

    #[test]
    fn clamping_for_input_forms() {
        assert_eq!(clamp_cycle_length(3), 21);
        assert_eq!(clamp_cycle_length(28), 28);
        assert_eq!(clamp_cycle_length(60), 35);
    }

    #[test]
    fn serializes_with_data_file_field_names() {
        let record = CycleRecord::new(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(), 30);
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "lastPeriodDate": "2025-05-01", "cycleLength": 30 })
        );
    }

    #[test]
    #[tracing_test::traced_test]
    fn unusual_length_is_logged() {
        let _ = CycleRecord::new(today(), 45);
        assert!(logs_contain("outside the usual"));
    }
}
