use std::io::BufRead;

use anyhow::Result;

use crate::commands::{unlock, Context};
use crate::prompt::Prompter;
use crate::repository::RecordUpdate;

/// Re-prompt username and password, keeping the current value for blank answers.
pub fn run<R: BufRead>(ctx: &Context, prompter: &mut Prompter<R>, name: &str) -> Result<()> {
    let mut session = unlock(ctx, prompter)?;

    session.update(name, |current| {
        let username = prompter.line(&format!("Username [{}]: ", current.username))?;
        let password = prompter.secret("Password (leave blank to keep): ")?;
        Ok(RecordUpdate {
            username: Some(username).filter(|u| !u.is_empty()),
            password: Some(password).filter(|p| !p.is_empty()),
        })
    })?;

    println!("Done");
    Ok(())
}
