//! Where "today" comes from.

use chrono::{Local, NaiveDate};

/// Source of the current local calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The machine's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date. Used for `--today` and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_never_moves() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock(day));
        assert_eq!(clock.today(), day);
        assert_eq!(clock.today(), day);
    }

    #[test]
    fn system_clock_matches_date_math_today() {
        let before = crate::date_math::today();
        let now = SystemClock.today();
        let after = crate::date_math::today();
        assert!(before <= now && now <= after);
    }
}
