use std::io::BufRead;

use anyhow::Result;

use crate::commands::{unlock, Context};
use crate::prompt::Prompter;

pub fn run<R: BufRead>(ctx: &Context, prompter: &mut Prompter<R>, name: &str) -> Result<()> {
    let mut session = unlock(ctx, prompter)?;
    session.delete(name, |record| {
        prompter.confirm(&format!("Delete '{}'?", record.name))
    })?;
    println!("Done");
    Ok(())
}
