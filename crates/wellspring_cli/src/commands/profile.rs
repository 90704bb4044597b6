use chrono::NaiveDate;
use miette::Result;
use tracing::info;
use wellspring_core::{
    CoreError, Gender, Profile,
    date_math::{age_years_on, format_display_date, parse_date},
};

use crate::commands::Context;
use crate::output::Output;

/// Fields given on the command line; `None` leaves the stored value alone.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub dob: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

fn positive(field: &str, value: Option<f64>) -> Result<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => {
            Err(CoreError::invalid_value(field, v.to_string(), "a positive number").into())
        }
        other => Ok(other),
    }
}

/// A validated [`ProfileUpdate`].
#[derive(Debug, Default)]
struct ProfileChanges {
    name: Option<String>,
    gender: Option<Gender>,
    dob: Option<NaiveDate>,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
}

impl ProfileChanges {
    fn parse(update: ProfileUpdate) -> Result<Self> {
        Ok(Self {
            dob: update.dob.as_deref().map(parse_date).transpose()?,
            height_cm: positive("height", update.height_cm)?,
            weight_kg: positive("weight", update.weight_kg)?,
            name: update.name,
            gender: update.gender,
        })
    }

    /// Overlay the changes on `existing`. A new profile needs both a name
    /// and a gender; an existing one keeps whatever is not given.
    fn apply(self, existing: Option<Profile>) -> wellspring_core::Result<Profile> {
        let mut profile = match existing {
            Some(existing) => existing,
            None => {
                let name = self.name.clone().ok_or_else(|| {
                    CoreError::invalid_value("name", "", "a name for the new profile (--name)")
                })?;
                let gender = self.gender.ok_or_else(|| {
                    CoreError::invalid_value("gender", "", "male, female or other (--gender)")
                })?;
                Profile::new(name, gender)
            }
        };

        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(gender) = self.gender {
            profile.gender = gender;
        }
        if self.dob.is_some() {
            profile.dob = self.dob;
        }
        if self.height_cm.is_some() {
            profile.height_cm = self.height_cm;
        }
        if self.weight_kg.is_some() {
            profile.weight_kg = self.weight_kg;
        }
        Ok(profile)
    }
}

/// Create or update the profile
pub fn set(ctx: &Context, update: ProfileUpdate) -> Result<()> {
    let changes = ProfileChanges::parse(update)?;

    let profile = ctx.update(|data| {
        let profile = changes.apply(data.profile.take())?;
        data.profile = Some(profile.clone());
        Ok(profile)
    })?;

    info!(name = %profile.name, "saved profile");
    let output = Output::new();
    output.success("Profile saved");
    print_profile(&output, ctx, &profile);
    Ok(())
}

/// Show the profile and derived values
pub fn show(ctx: &Context) -> Result<()> {
    let data = ctx.load()?;
    let output = Output::new();

    match &data.profile {
        Some(profile) => print_profile(&output, ctx, profile),
        None => {
            output.section("Profile");
            output.status("No profile yet. Create one with `wellspring profile set --name <NAME> --gender <GENDER>`.");
        }
    }
    Ok(())
}

fn print_profile(output: &Output, ctx: &Context, profile: &Profile) {
    output.section("Profile");
    output.kv("Name", &profile.name);
    output.kv("Gender", &profile.gender.to_string());
    if let Some(dob) = profile.dob {
        output.kv(
            "Born",
            &format!(
                "{} (age {})",
                format_display_date(dob),
                age_years_on(dob, ctx.today())
            ),
        );
    }
    if let Some(height) = profile.height_cm {
        output.kv("Height", &format!("{} cm", height));
    }
    if let Some(weight) = profile.weight_kg {
        output.kv("Weight", &format!("{} kg", weight));
    }
    output.kv(
        "Water target",
        &format!(
            "{:.0} ml/day",
            profile.daily_water_target_ml(&ctx.config.hydration)
        ),
    );
    output.kv(
        "Cycle tracking",
        if profile.tracks_cycle() { "on" } else { "off" },
    );
}
