use std::io::BufRead;

use anyhow::Result;

use crate::commands::{unlock, Context};
use crate::prompt::Prompter;

pub fn run<R: BufRead>(
    ctx: &Context,
    prompter: &mut Prompter<R>,
    name: &str,
    field: &str,
) -> Result<()> {
    let mut session = unlock(ctx, prompter)?;
    session.remove_field(name, field)?;
    println!("Done");
    Ok(())
}
