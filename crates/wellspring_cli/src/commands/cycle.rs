use miette::Result;
use owo_colors::OwoColorize;
use tracing::info;
use wellspring_core::{
    CycleRecord,
    cycle::{self, clamp_cycle_length},
    date_math::{format_display_date, parse_date},
};

use crate::commands::Context;
use crate::output::{Output, format_phase};

/// Record the start of the most recent period
pub fn set(ctx: &Context, start: &str, length: Option<i64>) -> Result<()> {
    let start = parse_date(start)?;
    let requested = length.unwrap_or(ctx.config.cycle.default_length_days);
    let length = clamp_cycle_length(requested);

    let output = Output::new();
    if length != requested {
        output.warning(&format!(
            "Cycle length {} adjusted to {} days",
            requested, length
        ));
    }
    if start > ctx.today() {
        output.warning("Start date is in the future");
    }

    let record = CycleRecord::new(start, length);
    let tracks = ctx.update(|data| {
        data.cycle = Some(record);
        Ok(data.profile.as_ref().map(|p| p.tracks_cycle()))
    })?;

    info!(%start, length, "saved cycle record");
    output.success(&format!(
        "Last period start set to {} ({} day cycle)",
        format_display_date(start).bright_cyan(),
        length
    ));
    if tracks == Some(false) {
        output.status("Cycle tracking is hidden from the overview for this profile");
    }

    show_record(&output, ctx, &record);
    Ok(())
}

/// Show the current phase
pub fn show(ctx: &Context) -> Result<()> {
    let data = ctx.load()?;
    let output = Output::new();

    match data.cycle {
        Some(record) => show_record(&output, ctx, &record),
        None => {
            output.section("Cycle");
            output.status("Not set up yet. Record a start date with `wellspring cycle set`.");
        }
    }
    Ok(())
}

fn show_record(output: &Output, ctx: &Context, record: &CycleRecord) {
    let result = cycle::phase_on(record, ctx.today());

    output.section("Cycle");
    output.kv("Phase", &format_phase(result.phase));
    output.kv(
        "Last start",
        &format_display_date(record.last_period_start),
    );
    output.kv("Cycle length", &format!("{} days", record.cycle_length_days));
    output.kv(
        "Next period",
        &format!(
            "{} ({})",
            format_display_date(result.next_period_date),
            result.countdown_label()
        ),
    );
    output.status(&result.phase.message(result.days_until_next));
}
