//! The home-screen summary: today's water, cycle phase, next exams and quote.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::cycle::PhaseResult;
use crate::exams::{self, ExamCountdown};
use crate::hydration::{self, HydrationSettings};
use crate::quotes::{self, Quote};
use crate::store::WellnessData;

/// How many upcoming exams the summary shows.
pub const UPCOMING_EXAM_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterSummary {
    pub glasses: u32,
    pub consumed_ml: u32,
    pub target_ml: f64,
    pub progress_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum CycleSummary {
    /// Cycle tracking does not apply to this profile.
    NotTracked,
    /// Tracking applies but no cycle start has been recorded.
    NotSetUp,
    Tracked(PhaseResult),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub today: NaiveDate,
    pub greeting_name: Option<String>,
    pub water: WaterSummary,
    pub cycle: CycleSummary,
    pub upcoming_exams: Vec<ExamCountdown>,
    pub quote: Option<Quote>,
}

impl Dashboard {
    pub fn build(
        data: &WellnessData,
        today: NaiveDate,
        settings: &HydrationSettings,
        quote_list: &[Quote],
    ) -> Self {
        let target_ml = hydration::target_for_profile(data.profile.as_ref(), settings);
        let glasses = hydration::log_for_day(&data.water_logs, today)
            .map(|log| log.glasses)
            .unwrap_or(0);
        let mut log = hydration::WaterLog::new(today, target_ml);
        log.glasses = glasses;

        let water = WaterSummary {
            glasses,
            consumed_ml: log.consumed_ml(settings),
            target_ml,
            progress_percent: log.progress_percent(settings),
        };

        let cycle = match (&data.profile, &data.cycle) {
            (Some(profile), _) if !profile.tracks_cycle() => CycleSummary::NotTracked,
            (None, _) => CycleSummary::NotTracked,
            (Some(_), None) => CycleSummary::NotSetUp,
            (Some(_), Some(record)) => CycleSummary::Tracked(record.phase_on(today)),
        };

        let upcoming_exams = exams::next_exams(&data.exams, today, UPCOMING_EXAM_LIMIT);
        let quote = quotes::daily_quote(quote_list, today).cloned();

        debug!(%today, exams = upcoming_exams.len(), "built dashboard");

        Self {
            today,
            greeting_name: data.profile.as_ref().map(|p| p.name.clone()),
            water,
            cycle,
            upcoming_exams,
            quote,
        }
    }
}
