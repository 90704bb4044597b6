use miette::Result;
use owo_colors::OwoColorize;
use tracing::info;
use wellspring_core::{
    ExamRecord,
    date_math::{format_display_date, parse_date},
    exams,
};

use crate::commands::Context;
use crate::output::{Output, format_urgency};

/// Add an exam
pub fn add(ctx: &Context, subject: &str, date: &str) -> Result<()> {
    let exam_date = parse_date(date)?;
    let subject = subject.trim();
    if subject.is_empty() {
        return Err(wellspring_core::CoreError::invalid_value(
            "subject",
            subject,
            "a non-empty subject name",
        )
        .into());
    }

    let exam = ExamRecord::new(subject, exam_date);
    ctx.update(|data| {
        data.exams.push(exam.clone());
        Ok(())
    })?;

    info!(id = %exam.id, subject = %exam.subject, %exam_date, "added exam");

    let output = Output::new();
    let countdown = exam.countdown(ctx.today());
    output.success(&format!(
        "Added {} on {}",
        exam.subject.bright_cyan(),
        format_display_date(exam_date)
    ));
    output.kv("Id", &exam.id);
    output.kv("Countdown", &format_urgency(countdown.urgency, &countdown.label()));
    Ok(())
}

/// Remove an exam by id
pub fn remove(ctx: &Context, id: &str) -> Result<()> {
    let removed = ctx.update(|data| exams::remove_exam(&mut data.exams, id))?;

    info!(id = %removed.id, "removed exam");
    Output::new().success(&format!(
        "Removed {} ({})",
        removed.subject.bright_cyan(),
        format_display_date(removed.exam_date)
    ));
    Ok(())
}

/// List exams, upcoming first
pub fn list(ctx: &Context, include_past: bool) -> Result<()> {
    let data = ctx.load()?;
    let today = ctx.today();
    let output = Output::new();

    output.section("Upcoming exams");
    let upcoming = exams::upcoming(&data.exams, today);
    if upcoming.is_empty() {
        output.status("No upcoming exams");
    }
    for exam in upcoming {
        let countdown = exam.countdown(today);
        output.list_item(&format!(
            "{} on {}: {} {}",
            exam.subject.bright_white(),
            format_display_date(exam.exam_date),
            format_urgency(countdown.urgency, &countdown.label()),
            format!("[{}]", exam.id).dimmed()
        ));
    }

    if include_past {
        output.section("Past exams");
        let past = exams::past(&data.exams, today);
        if past.is_empty() {
            output.status("No past exams");
        }
        for exam in past {
            output.list_item(&format!(
                "{} on {} {}",
                exam.subject.dimmed(),
                format_display_date(exam.exam_date),
                format!("[{}]", exam.id).dimmed()
            ));
        }
    }
    Ok(())
}
