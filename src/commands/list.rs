use std::io::BufRead;

use anyhow::Result;

use crate::commands::{unlock, Context};
use crate::prompt::Prompter;

pub fn run<R: BufRead>(ctx: &Context, prompter: &mut Prompter<R>) -> Result<()> {
    let session = unlock(ctx, prompter)?;
    if session.store().is_empty() {
        println!("No entries stored. Add one with: linepass new");
    } else {
        for name in session.list() {
            println!("{}", name);
        }
    }
    Ok(())
}
