use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use wellspring_core::{CycleSummary, Dashboard, date_math::format_display_date};

use crate::commands::Context;
use crate::output::{Output, format_percent, format_phase, format_urgency, progress_bar};

/// Show the daily overview
pub fn show(ctx: &Context, json: bool) -> Result<()> {
    let data = ctx.load()?;
    let today = ctx.today();
    let dashboard = Dashboard::build(
        &data,
        today,
        &ctx.config.hydration,
        ctx.config.quote_list(),
    );

    if json {
        let rendered = serde_json::to_string_pretty(&dashboard).into_diagnostic()?;
        println!("{}", rendered);
        return Ok(());
    }

    let output = Output::new();

    println!();
    match &dashboard.greeting_name {
        Some(name) => println!("{} {}", "Hello,".bold(), name.bright_cyan().bold()),
        None => println!("{}", "Hello!".bold()),
    }
    output.status(&format_display_date(today));

    output.section("Water");
    let water = &dashboard.water;
    output.kv(
        "Today",
        &format!(
            "{} glasses ({} / {:.0} ml)",
            water.glasses, water.consumed_ml, water.target_ml
        ),
    );
    output.kv(
        "Progress",
        &format!(
            "{} {}",
            progress_bar(water.progress_percent, 20).bright_blue(),
            format_percent(water.progress_percent)
        ),
    );

    match &dashboard.cycle {
        CycleSummary::NotTracked => {}
        CycleSummary::NotSetUp => {
            output.section("Cycle");
            output.status("Not set up yet. Record a start date with `wellspring cycle set`.");
        }
        CycleSummary::Tracked(result) => {
            output.section("Cycle");
            output.kv("Phase", &format_phase(result.phase));
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
    }

    output.section("Upcoming exams");
    if dashboard.upcoming_exams.is_empty() {
        output.status("No upcoming exams");
    } else {
        for exam in &dashboard.upcoming_exams {
            output.list_item(&format!(
                "{} on {}: {}",
                exam.subject.bright_white(),
                format_display_date(exam.exam_date),
                format_urgency(exam.urgency, &exam.reminder())
            ));
        }
    }

    if let Some(quote) = &dashboard.quote {
        output.section("Quote of the day");
        output.quote(&quote.text, &quote.author);
    }
    println!();

    Ok(())
}
