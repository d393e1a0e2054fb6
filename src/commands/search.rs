use std::io::BufRead;

use anyhow::Result;

use crate::commands::{print_records, unlock, Context};
use crate::prompt::Prompter;

pub fn run<R: BufRead>(ctx: &Context, prompter: &mut Prompter<R>, pattern: &str) -> Result<()> {
    let session = unlock(ctx, prompter)?;
    let records = session.search(pattern)?;
    if records.is_empty() {
        eprintln!("No entries matched '{}'.", pattern);
    } else {
        print_records(&records);
    }
    Ok(())
}
