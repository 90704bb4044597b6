//! End-to-end checks of the calculators through the public API
//!
//! Every scenario pins "today" explicitly so the results do not depend on the
//! day the suite runs.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use pretty_assertions::assert_eq;
use wellspring_core::{cycle, date_math, exams, hydration, prelude::*, quotes};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
}

fn days_ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).unwrap()
}

#[test]
fn days_until_today_is_zero_at_any_time_of_day() {
    for (h, m, s) in [(0, 0, 0), (9, 30, 0), (12, 0, 1), (23, 59, 59)] {
        let at = NaiveDateTime::new(today(), NaiveTime::from_hms_opt(h, m, s).unwrap());
        assert_eq!(date_math::days_until_from(today(), at), 0);
        assert_eq!(date_math::days_until_from(at, today()), 0);
    }
}

#[test]
fn age_is_monotonic_as_birth_date_moves_earlier() {
    let mut dob = today();
    let mut previous = date_math::age_years_on(dob, today());
    for _ in 0..800 {
        dob = dob.checked_sub_days(Days::new(17)).unwrap();
        let age = date_math::age_years_on(dob, today());
        assert!(age >= previous, "age went from {previous} to {age} at {dob}");
        previous = age;
    }
}

#[test]
fn days_until_an_offset_is_the_offset() {
    for c in [1_i64, 2, 3, 27, 28, 35, 90, 365, 366, 10_000] {
        let target = date_math::add_days(today(), c);
        assert_eq!(date_math::days_until_from(today(), target), c);
    }
}

#[test]
fn literal_phase_scenarios() {
    let cases = [
        (0, Phase::Period),
        (13, Phase::Ovulation),
        (25, Phase::Upcoming),
        (8, Phase::Safe),
    ];

    for (since, expected) in cases {
        let record = CycleRecord::new(days_ago(since), 28);
        let result = cycle::phase_on(&record, today());
        assert_eq!(result.phase, expected, "{since} days since start");
    }

    let upcoming = cycle::phase_on(&CycleRecord::new(days_ago(25), 28), today());
    assert_eq!(upcoming.days_until_next, 3);
    assert_eq!(upcoming.next_period_date, date_math::add_days(today(), 3));
}

#[test]
fn sixty_kilograms_needs_2100_ml() {
    assert_eq!(hydration::daily_target_ml(60.0), 2100.0);
}

#[test]
fn daily_quote_is_stable_and_yearly() {
    let list = quotes::builtin_quotes();
    assert_eq!(
        quotes::daily_quote(list, today()),
        quotes::daily_quote(list, today())
    );

    // same ordinal a common year later
    let next_year = today().checked_add_days(Days::new(365)).unwrap();
    assert_eq!(
        quotes::daily_quote(list, today()),
        quotes::daily_quote(list, next_year)
    );
}

#[test]
fn upcoming_exams_drop_yesterday() {
    let records: Vec<ExamRecord> = [-1_i64, 0, 5]
        .into_iter()
        .map(|offset| ExamRecord {
            id: format!("exam{offset}"),
            subject: "History".to_string(),
            exam_date: date_math::add_days(today(), offset),
            created_at: None,
        })
        .collect();

    let upcoming: Vec<NaiveDate> = exams::upcoming(&records, today())
        .into_iter()
        .map(|exam| exam.exam_date)
        .collect();
    assert_eq!(upcoming, vec![today(), date_math::add_days(today(), 5)]);
}

#[test]
fn dashboard_reads_what_the_store_saved() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("data.json"));
    let settings = HydrationSettings::default();

    store
        .update(|data| {
            let mut profile = Profile::new("Ada", Gender::Female);
            profile.weight_kg = Some(60.0);
            let target = profile.daily_water_target_ml(&settings);
            data.profile = Some(profile);
            data.cycle = Some(CycleRecord::new(days_ago(25), 28));
            data.exams.push(ExamRecord::new("Physics", date_math::add_days(today(), 2)));

            let log = hydration::entry_for_day(&mut data.water_logs, today(), target);
            for _ in 0..3 {
                log.add_glass(&settings);
            }
            Ok(())
        })
        .unwrap();

    let data = store.load().unwrap();
    let dash = Dashboard::build(&data, today(), &settings, quotes::builtin_quotes());

    assert_eq!(dash.water.glasses, 3);
    assert_eq!(dash.water.consumed_ml, 750);
    assert_eq!(dash.water.target_ml, 2100.0);
    match dash.cycle {
        CycleSummary::Tracked(result) => {
            assert_eq!(result.phase, Phase::Upcoming);
            assert_eq!(result.countdown_label(), "3 days");
        }
        other => panic!("expected a tracked cycle, got {other:?}"),
    }
    assert_eq!(dash.upcoming_exams.len(), 1);
    assert_eq!(dash.upcoming_exams[0].urgency, Urgency::Urgent);
    assert_eq!(dash.upcoming_exams[0].label(), "2 days left");
}

#[test]
fn fixed_clock_drives_ambient_calls() {
    let clock = FixedClock(today());
    let record = CycleRecord::new(days_ago(13), 28);
    assert_eq!(record.phase_on(clock.today()).phase, Phase::Ovulation);
}
