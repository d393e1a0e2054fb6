use anyhow::{bail, Result};

use crate::commands::Context;
use crate::config::GeneratorConfig;
use crate::generate;

pub fn run(ctx: &Context, length: Option<usize>, no_symbols: bool) -> Result<()> {
    let settings = GeneratorConfig {
        length: length.unwrap_or(ctx.config.generator.length),
        symbols: ctx.config.generator.symbols && !no_symbols,
    };
    if settings.length == 0 {
        bail!("Password length must be greater than zero.");
    }
    println!("{}", generate::password(&settings));
    Ok(())
}
