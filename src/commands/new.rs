use std::io::BufRead;

use anyhow::{bail, Context as _, Result};

use crate::commands::Context;
use crate::generate;
use crate::prompt::Prompter;
use crate::record::{ExtraField, Record, SUB_SEP};

/// Add an entry, creating the store on first use. `fields` are `NAME:VALUE` pairs.
pub fn run<R: BufRead>(ctx: &Context, prompter: &mut Prompter<R>, fields: &[String]) -> Result<()> {
    let extra_fields = fields
        .iter()
        .map(|raw| {
            if !raw.contains(SUB_SEP) {
                bail!("Invalid field '{}': expected NAME{}VALUE.", raw, SUB_SEP);
            }
            Ok(ExtraField::parse(raw))
        })
        .collect::<Result<Vec<_>>>()?;

    let passphrase = if ctx.repo.exists()? {
        prompter.passphrase()
    } else {
        println!("No store at {}; a new one will be created.", ctx.repo.path().display());
        prompter.new_passphrase()
    }
    .context("Failed to read passphrase")?;
    let mut session = ctx.repo.unlock_or_create(passphrase)?;

    let name = prompter.line("Name: ")?.trim().to_string();
    let username = prompter.line("Username: ")?;
    let mut password = prompter
        .secret("Password (leave blank to generate): ")
        .context("Failed to read password")?;
    if password.is_empty() {
        password = generate::password(&ctx.config.generator);
        println!("Generated a {}-character password.", password.chars().count());
    }

    let mut record = Record::new(name, username, password);
    record.extra_fields = extra_fields;

    if session.store().records().iter().any(|r| r.name == record.name) {
        println!("Replacing existing entry '{}'.", record.name);
    }
    session.add(record)?;

    println!("Done");
    Ok(())
}
