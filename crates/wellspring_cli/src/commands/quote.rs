use miette::Result;
use wellspring_core::quotes;

use crate::commands::Context;
use crate::output::Output;

/// Show today's quote, or a random one
pub fn show(ctx: &Context, random: bool) -> Result<()> {
    let list = ctx.config.quote_list();
    let quote = if random {
        quotes::random_quote(list, &mut rand::rng())
    } else {
        quotes::daily_quote(list, ctx.today())
    };

    let output = Output::new();
    match quote {
        Some(quote) => output.quote(&quote.text, &quote.author),
        None => output.status("No quotes configured"),
    }
    Ok(())
}
