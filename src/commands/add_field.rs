use std::io::BufRead;

use anyhow::{Context as _, Result};

use crate::commands::{unlock, Context};
use crate::prompt::Prompter;

pub fn run<R: BufRead>(ctx: &Context, prompter: &mut Prompter<R>, name: &str) -> Result<()> {
    let mut session = unlock(ctx, prompter)?;
    // Fail on an unknown entry before asking for anything else.
    session.find(name)?;

    let field_name = prompter.line("Field name: ")?.trim().to_string();
    let field_value = prompter
        .secret("Field value: ")
        .context("Failed to read field value")?;

    session.add_field(name, &field_name, &field_value)?;
    println!("Done");
    Ok(())
}
