use miette::Result;
use owo_colors::OwoColorize;
use tracing::warn;

use crate::commands::Context;
use crate::output::Output;

/// Delete all recorded data. Does nothing unless `confirmed`.
///
/// Returns whether anything was cleared.
pub fn run(ctx: &Context, confirmed: bool) -> Result<bool> {
    let output = Output::new();
    let path = ctx.store.path().display().to_string();

    if !confirmed {
        output.warning(&format!(
            "This deletes the profile, cycle record, exams and water history in {}",
            path
        ));
        output.status("Run again with --yes to confirm");
        return Ok(false);
    }

    ctx.clear()?;
    warn!("cleared all wellness data at {}", path);
    output.success(&format!("All data cleared ({})", path.dimmed()));
    Ok(true)
}
