use miette::Result;
use owo_colors::OwoColorize;
use tracing::{debug, info};
use wellspring_core::{
    HydrationSettings, WaterLog,
    date_math::{format_display_date, parse_date},
    hydration,
};

use crate::commands::Context;
use crate::output::{Output, format_percent, progress_bar};

fn print_log(output: &Output, ctx: &Context, log: &WaterLog) {
    let settings = &ctx.config.hydration;
    let percent = log.progress_percent(settings);
    output.kv("Date", &format_display_date(log.date));
    output.kv(
        "Glasses",
        &format!("{} / {}", log.glasses, settings.max_glasses),
    );
    output.kv(
        "Consumed",
        &format!("{} / {:.0} ml", log.consumed_ml(settings), log.target_ml),
    );
    output.kv(
        "Progress",
        &format!(
            "{} {}",
            progress_bar(percent, 20).bright_blue(),
            format_percent(percent)
        ),
    );
    if log.is_goal_met(settings) {
        output.success("Daily goal reached!");
    }
}

/// Show water intake for a day (today by default)
pub fn show(ctx: &Context, date: Option<&str>) -> Result<()> {
    let day = match date {
        Some(input) => parse_date(input)?,
        None => ctx.today(),
    };
    let data = ctx.load()?;
    let target = hydration::target_for_profile(data.profile.as_ref(), &ctx.config.hydration);

    let log = hydration::log_for_day(&data.water_logs, day)
        .cloned()
        .unwrap_or_else(|| WaterLog::new(day, target));

    let output = Output::new();
    output.section("Water intake");
    print_log(&output, ctx, &log);
    Ok(())
}

/// Add glasses to today's log
pub fn add(ctx: &Context, count: u32) -> Result<()> {
    change(ctx, count, true)
}

/// Remove glasses from today's log
pub fn remove(ctx: &Context, count: u32) -> Result<()> {
    change(ctx, count, false)
}

/// Add or remove up to `count` glasses, stopping at the bounds. Returns how
/// many actually moved.
fn apply_glasses(log: &mut WaterLog, settings: &HydrationSettings, count: u32, adding: bool) -> u32 {
    let mut changed = 0;
    for _ in 0..count {
        let moved = if adding {
            log.add_glass(settings)
        } else {
            log.remove_glass()
        };
        if !moved {
            break;
        }
        changed += 1;
    }
    changed
}

fn change(ctx: &Context, count: u32, adding: bool) -> Result<()> {
    let today = ctx.today();
    let settings = &ctx.config.hydration;

    let (log, changed) = ctx.update(|data| {
        let target = hydration::target_for_profile(data.profile.as_ref(), settings);
        let log = hydration::entry_for_day(&mut data.water_logs, today, target);
        let changed = apply_glasses(log, settings, count, adding);
        Ok((log.clone(), changed))
    })?;

    debug!(%today, glasses = log.glasses, changed, "updated water log");

    let output = Output::new();
    if changed < count {
        if adding {
            output.warning(&format!(
                "Daily maximum of {} glasses reached",
                settings.max_glasses
            ));
        } else {
            output.warning("No glasses left to remove");
        }
    }
    if changed > 0 {
        info!("{} {} glass(es)", if adding { "added" } else { "removed" }, changed);
    }

    output.section("Water intake");
    print_log(&output, ctx, &log);
    Ok(())
}

/// Show past days, newest first
pub fn history(ctx: &Context, limit: usize) -> Result<()> {
    let data = ctx.load()?;
    let settings = &ctx.config.hydration;
    let output = Output::new();

    output.section("Water history");
    let logs = hydration::history(&data.water_logs);
    if logs.is_empty() {
        output.status("Nothing logged yet");
        return Ok(());
    }

    output.table_header(&["Date", "Glasses", "Consumed", "Target", "Progress"]);
    for log in logs.into_iter().take(limit) {
        let date = format_display_date(log.date);
        let glasses = log.glasses.to_string();
        let consumed = format!("{} ml", log.consumed_ml(settings));
        let target = format!("{:.0} ml", log.target_ml);
        let progress = format_percent(log.progress_percent(settings));
        output.table_row(&[&date, &glasses, &consumed, &target, &progress]);
    }
    Ok(())
}
