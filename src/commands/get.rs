use std::io::BufRead;

use anyhow::Result;

use crate::commands::{print_records, unlock, Context};
use crate::prompt::Prompter;

pub fn run<R: BufRead>(ctx: &Context, prompter: &mut Prompter<R>, name: &str) -> Result<()> {
    let session = unlock(ctx, prompter)?;
    let records = session.get(name)?;
    print_records(&records);
    Ok(())
}
