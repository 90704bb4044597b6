//! Daily water targets and the per-day glass log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::profile::Profile;

/// Millilitres of water per kilogram of body weight per day.
pub const ML_PER_KG: f64 = 35.0;
pub const GLASS_SIZE_ML: u32 = 250;
pub const MAX_GLASSES: u32 = 20;
/// Target used when no body weight is known.
pub const DEFAULT_TARGET_ML: f64 = 2000.0;

/// Daily water target in millilitres for a body weight in kilograms.
///
/// Negative or non-finite weights, and weights so large the target overflows,
/// yield `NaN` rather than an error, so a bad profile value shows up as a
/// display anomaly instead of a failure.
pub fn daily_target_ml(weight_kg: f64) -> f64 {
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        warn!(weight_kg, "unusable body weight for water target");
        return f64::NAN;
    }
    let target = weight_kg * ML_PER_KG;
    if !target.is_finite() {
        warn!(weight_kg, "water target overflows");
        return f64::NAN;
    }
    target
}

/// Target for an optional profile, falling back to the configured default
/// when the profile or its weight is missing (or zero).
pub fn target_for_profile(profile: Option<&Profile>, settings: &HydrationSettings) -> f64 {
    profile
        .and_then(|p| p.weight_kg)
        .filter(|weight| *weight != 0.0)
        .map(daily_target_ml)
        .unwrap_or(settings.default_target_ml)
}

/// Tunables for glass counting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrationSettings {
    pub glass_size_ml: u32,
    pub max_glasses: u32,
    pub default_target_ml: f64,
}

impl Default for HydrationSettings {
    fn default() -> Self {
        Self {
            glass_size_ml: GLASS_SIZE_ML,
            max_glasses: MAX_GLASSES,
            default_target_ml: DEFAULT_TARGET_ML,
        }
    }
}

/// Glasses drunk on one calendar day, with the target in force that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterLog {
    pub date: NaiveDate,
    pub glasses: u32,
    /// `NaN` when no usable target was known. Stored as `null`.
    #[serde(alias = "target_ml", with = "nan_as_null")]
    pub target_ml: f64,
}

/// JSON has no NaN or infinity; serde_json writes them as `null` and then
/// refuses to read `null` back as `f64`. Map both directions explicitly.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

impl WaterLog {
    pub fn new(date: NaiveDate, target_ml: f64) -> Self {
        Self {
            date,
            glasses: 0,
            target_ml,
        }
    }

    pub fn consumed_ml(&self, settings: &HydrationSettings) -> u32 {
        self.glasses.saturating_mul(settings.glass_size_ml)
    }

    /// Share of the target reached, in percent, capped at 100.
    ///
    /// A non-positive or non-finite target gives `NaN`.
    pub fn progress_percent(&self, settings: &HydrationSettings) -> f64 {
        if !self.target_ml.is_finite() || self.target_ml <= 0.0 {
            return f64::NAN;
        }
        let percent = f64::from(self.consumed_ml(settings)) / self.target_ml * 100.0;
        percent.min(100.0)
    }

    pub fn is_goal_met(&self, settings: &HydrationSettings) -> bool {
        self.progress_percent(settings) >= 100.0
    }

    /// Add one glass. Returns `false` when already at the daily maximum.
    pub fn add_glass(&mut self, settings: &HydrationSettings) -> bool {
        if self.glasses >= settings.max_glasses {
            return false;
        }
        self.glasses += 1;
        true
    }

    /// Remove one glass. Returns `false` when the count is already zero.
    pub fn remove_glass(&mut self) -> bool {
        if self.glasses == 0 {
            return false;
        }
        self.glasses -= 1;
        true
    }
}

pub fn log_for_day(logs: &[WaterLog], date: NaiveDate) -> Option<&WaterLog> {
    logs.iter().find(|log| log.date == date)
}

/// The log for `date`, created if missing. The stored target is refreshed to
/// `target_ml` so the entry reflects the current profile.
pub fn entry_for_day(logs: &mut Vec<WaterLog>, date: NaiveDate, target_ml: f64) -> &mut WaterLog {
    let index = match logs.iter().position(|log| log.date == date) {
        Some(index) => index,
        None => {
            logs.push(WaterLog::new(date, target_ml));
            logs.len() - 1
        }
    };

    let entry = &mut logs[index];
    entry.target_ml = target_ml;
    entry
}

/// All logs, newest day first.
pub fn history(logs: &[WaterLog]) -> Vec<&WaterLog> {
    let mut sorted: Vec<&WaterLog> = logs.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Gender;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sixty_kilos_needs_2100_ml() {
        assert_eq!(daily_target_ml(60.0), 2100.0);
        assert_eq!(daily_target_ml(0.0), 0.0);
        assert_eq!(daily_target_ml(72.5), 2537.5);
    }

    #[test]
    fn unusable_weights_give_nan() {
        assert!(daily_target_ml(-1.0).is_nan());
        assert!(daily_target_ml(f64::NAN).is_nan());
        assert!(daily_target_ml(f64::INFINITY).is_nan());
    }

    #[test]
    fn overflowing_target_is_nan() {
        assert!(daily_target_ml(1e308).is_nan());
        assert!(daily_target_ml(f64::MAX).is_nan());
    }

    #[test]
    fn nan_target_is_stored_as_null_and_read_back() {
        let log = WaterLog::new(date(2025, 1, 1), f64::NAN);
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["targetMl"], serde_json::Value::Null);

        let back: WaterLog = serde_json::from_value(json).unwrap();
        assert!(back.target_ml.is_nan());
        assert_eq!(back.date, log.date);

        let infinite = WaterLog::new(date(2025, 1, 1), f64::INFINITY);
        let back: WaterLog =
            serde_json::from_str(&serde_json::to_string(&infinite).unwrap()).unwrap();
        assert!(back.target_ml.is_nan());

        let finite: WaterLog =
            serde_json::from_str(r#"{"date":"2025-01-01","glasses":2,"targetMl":2100}"#).unwrap();
        assert_eq!(finite.target_ml, 2100.0);
    }

    #[test]
    fn profile_target_falls_back_to_default() {
        let settings = HydrationSettings::default();
        assert_eq!(target_for_profile(None, &settings), 2000.0);

        let mut profile = Profile::new("Asha", Gender::Female);
        assert_eq!(target_for_profile(Some(&profile), &settings), 2000.0);

        profile.weight_kg = Some(0.0);
        assert_eq!(target_for_profile(Some(&profile), &settings), 2000.0);

        profile.weight_kg = Some(50.0);
        assert_eq!(target_for_profile(Some(&profile), &settings), 1750.0);

        profile.weight_kg = Some(f64::NAN);
        assert!(target_for_profile(Some(&profile), &settings).is_nan());
    }

    #[test]
    fn progress_is_capped() {
        let settings = HydrationSettings::default();
        let mut log = WaterLog::new(date(2025, 1, 1), 2000.0);
        assert_eq!(log.progress_percent(&settings), 0.0);

        log.glasses = 4;
        assert_eq!(log.consumed_ml(&settings), 1000);
        assert_eq!(log.progress_percent(&settings), 50.0);
        assert!(!log.is_goal_met(&settings));

        log.glasses = 12;
        assert_eq!(log.progress_percent(&settings), 100.0);
        assert!(log.is_goal_met(&settings));
    }

    #[test]
    fn progress_with_bad_target_is_nan() {
        let settings = HydrationSettings::default();
        let mut log = WaterLog::new(date(2025, 1, 1), f64::NAN);
        log.glasses = 3;
        assert!(log.progress_percent(&settings).is_nan());

        log.target_ml = 0.0;
        assert!(log.progress_percent(&settings).is_nan());
    }

    #[test]
    fn glass_count_is_bounded() {
        let settings = HydrationSettings::default();
        let mut log = WaterLog::new(date(2025, 1, 1), 2000.0);

        assert!(!log.remove_glass());
        assert_eq!(log.glasses, 0);

        for _ in 0..MAX_GLASSES {
            assert!(log.add_glass(&settings));
        }
        assert!(!log.add_glass(&settings));
        assert_eq!(log.glasses, MAX_GLASSES);

        assert!(log.remove_glass());
        assert_eq!(log.glasses, MAX_GLASSES - 1);
    }

    #[test]
    fn entry_for_day_creates_once_and_refreshes_target() {
        let mut logs = vec![WaterLog::new(date(2025, 1, 1), 2000.0)];

        entry_for_day(&mut logs, date(2025, 1, 2), 2100.0).glasses = 2;
        assert_eq!(logs.len(), 2);

        let again = entry_for_day(&mut logs, date(2025, 1, 2), 2200.0);
        assert_eq!(again.glasses, 2);
        assert_eq!(again.target_ml, 2200.0);
        assert_eq!(logs.len(), 2);
    }

    #[test]
    fn history_is_newest_first() {
        let logs = vec![
            WaterLog::new(date(2025, 1, 2), 2000.0),
            WaterLog::new(date(2025, 1, 5), 2000.0),
            WaterLog::new(date(2024, 12, 31), 2000.0),
        ];
        let days: Vec<NaiveDate> = history(&logs).iter().map(|log| log.date).collect();
        assert_eq!(
            days,
            vec![date(2025, 1, 5), date(2025, 1, 2), date(2024, 12, 31)]
        );
        assert_eq!(
            log_for_day(&logs, date(2025, 1, 5)).map(|l| l.date),
            Some(date(2025, 1, 5))
        );
        assert!(log_for_day(&logs, date(2025, 1, 6)).is_none());
    }
}
