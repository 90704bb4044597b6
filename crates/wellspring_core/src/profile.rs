use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date_math::age_years_on;
use crate::hydration::{self, HydrationSettings};
use crate::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(CoreError::invalid_value("gender", s, "male, female or other")),
        }
    }
}

/// The person whose data is being tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(default, alias = "height", alias = "height_cm", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    #[serde(default, alias = "weight", alias = "weight_kg", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
}

impl Profile {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            dob: None,
            height_cm: None,
            weight_kg: None,
        }
    }

    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        self.dob.map(|dob| age_years_on(dob, today))
    }

    /// Cycle tracking is only offered for female profiles.
    pub fn tracks_cycle(&self) -> bool {
        self.gender == Gender::Female
    }

    pub fn daily_water_target_ml(&self, settings: &HydrationSettings) -> f64 {
        hydration::target_for_profile(Some(self), settings)
    }
}
