use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use std::path::Path;
use wellspring_core::config;

use crate::commands::Context;
use crate::output::Output;

/// Show where settings came from, then the effective configuration as TOML
pub fn show(ctx: &Context) -> Result<()> {
    let output = Output::new();
    let cfg = &ctx.config;

    output.section("Configuration");
    output.kv("Loaded from", &ctx.config_source);
    output.kv("Data file", &cfg.data.path.display().to_string());
    if std::env::var(config::DATA_PATH_ENV).is_ok() {
        output.status(&format!("data path overridden by {}", config::DATA_PATH_ENV));
    }
    output.kv(
        "Quotes",
        &match &cfg.quotes {
            Some(list) => format!("{} custom", list.len()),
            None => format!("{} built-in", cfg.quote_list().len()),
        },
    );

    output.section("Effective settings");
    let toml_str = toml::to_string_pretty(cfg).into_diagnostic()?;
    println!("{}", toml_str);

    Ok(())
}

/// Write the effective configuration to `path`.
///
/// Returns whether the file was written; an existing file is kept unless
/// `force` is set.
pub fn save(ctx: &Context, path: &Path, force: bool) -> Result<bool> {
    let output = Output::new();

    if path.exists() && !force {
        output.warning(&format!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        ));
        return Ok(false);
    }

    if let Err(err) = config::save_config(&ctx.config, path) {
        wellspring_core::log_error!(format!("Could not save config to {}", path.display()), err);
        return Err(err.into());
    }

    output.success(&format!("Saved configuration to {}", path.display()));
    output.status(&format!(
        "use it with: {} --config {}",
        "wellspring".bright_green(),
        path.display()
    ));

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_context;
    use chrono::NaiveDate;

    #[test]
    fn save_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = test_context(dir.path(), NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
        ctx.config.cycle.default_length_days = 30;
        let path = dir.path().join("wellspring.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(!save(&ctx, &path, false).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        assert!(save(&ctx, &path, true).unwrap());
        let loaded = config::load_config(&path).unwrap();
        assert_eq!(loaded.cycle.default_length_days, 30);
    }
}
