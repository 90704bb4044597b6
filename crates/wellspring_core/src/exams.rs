//! Exam countdowns: ordering, upcoming/past split and urgency bands.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::date_math::days_until_from;
use crate::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRecord {
    pub id: String,
    pub subject: String,
    #[serde(alias = "exam_date")]
    pub exam_date: NaiveDate,
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ExamRecord {
    pub fn new(subject: impl Into<String>, exam_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            subject: subject.into(),
            exam_date,
            created_at: Some(Utc::now()),
        }
    }

    pub fn days_until(&self, today: NaiveDate) -> i64 {
        days_until_from(today, self.exam_date)
    }

    pub fn countdown(&self, today: NaiveDate) -> ExamCountdown {
        let days_until = self.days_until(today);
        ExamCountdown {
            id: self.id.clone(),
            subject: self.subject.clone(),
            exam_date: self.exam_date,
            days_until,
            urgency: Urgency::classify(days_until),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Passed,
    /// Today up to two days out.
    Urgent,
    /// Three to seven days out.
    Soon,
    Relaxed,
}

impl Urgency {
    pub fn classify(days_until: i64) -> Self {
        match days_until {
            d if d < 0 => Urgency::Passed,
            0..=2 => Urgency::Urgent,
            3..=7 => Urgency::Soon,
            _ => Urgency::Relaxed,
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Passed => write!(f, "passed"),
            Urgency::Urgent => write!(f, "urgent"),
            Urgency::Soon => write!(f, "soon"),
            Urgency::Relaxed => write!(f, "relaxed"),
        }
    }
}

/// An exam as seen from a particular day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamCountdown {
    pub id: String,
    pub subject: String,
    pub exam_date: NaiveDate,
    pub days_until: i64,
    pub urgency: Urgency,
}

impl ExamCountdown {
    pub fn label(&self) -> String {
        countdown_label(self.days_until)
    }

    pub fn reminder(&self) -> String {
        reminder_message(self.days_until)
    }
}

/// Short countdown text for an exam card.
pub fn countdown_label(days_until: i64) -> String {
    match days_until {
        d if d < 0 => "Exam passed".to_string(),
        0 => "Exam today!".to_string(),
        1 => "Tomorrow".to_string(),
        d => format!("{d} days left"),
    }
}

/// Longer reminder text for the home screen.
pub fn reminder_message(days_until: i64) -> String {
    match days_until {
        d if d < 0 => "Exam passed".to_string(),
        0 => "Exam today! Good luck!".to_string(),
        1 => "Exam tomorrow - Final review!".to_string(),
        d => format!("Exam in {d} days - Keep studying!"),
    }
}

/// All exams in ascending date order. Exams on the same day keep their
/// input order.
pub fn sort_by_date(exams: &[ExamRecord]) -> Vec<&ExamRecord> {
    let mut sorted: Vec<&ExamRecord> = exams.iter().collect();
    sorted.sort_by_key(|exam| exam.exam_date);
    sorted
}

/// Exams happening today or later, soonest first.
pub fn upcoming(exams: &[ExamRecord], today: NaiveDate) -> Vec<&ExamRecord> {
    sort_by_date(exams)
        .into_iter()
        .filter(|exam| exam.days_until(today) >= 0)
        .collect()
}

/// Exams already behind us, oldest first.
pub fn past(exams: &[ExamRecord], today: NaiveDate) -> Vec<&ExamRecord> {
    sort_by_date(exams)
        .into_iter()
        .filter(|exam| exam.days_until(today) < 0)
        .collect()
}

/// The `limit` soonest upcoming exams with their countdowns.
pub fn next_exams(exams: &[ExamRecord], today: NaiveDate, limit: usize) -> Vec<ExamCountdown> {
    upcoming(exams, today)
        .into_iter()
        .take(limit)
        .map(|exam| exam.countdown(today))
        .collect()
}

pub fn remove_exam(exams: &mut Vec<ExamRecord>, id: &str) -> Result<ExamRecord> {
    match exams.iter().position(|exam| exam.id == id) {
        Some(index) => Ok(exams.remove(index)),
        None => Err(CoreError::exam_not_found(
            id,
            exams.iter().map(|exam| exam.id.clone()).collect(),
        )),
    }
}
