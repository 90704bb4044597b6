use miette::Result;
use owo_colors::OwoColorize;
use wellspring_core::date_math::{age_years_on, days_until_from, format_display_date, parse_date};

use crate::commands::Context;
use crate::output::Output;

/// Whole years since a birth date
pub fn age(ctx: &Context, dob: &str) -> Result<()> {
    let dob = parse_date(dob)?;
    let years = age_years_on(dob, ctx.today());
    Output::new().kv(
        "Age",
        &format!("{} (born {})", years.bright_cyan(), format_display_date(dob)),
    );
    Ok(())
}

/// Signed calendar days from today to a date
pub fn days_until(ctx: &Context, date: &str) -> Result<()> {
    let target = parse_date(date)?;
    let days = days_until_from(ctx.today(), target);
    let description = match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 0 => format!("in {} days", d),
        d => format!("{} days ago", -d),
    };
    Output::new().kv(
        &format_display_date(target),
        &format!("{} ({})", days.bright_cyan(), description),
    );
    Ok(())
}
