pub mod add_field;
pub mod delete;
pub mod generate;
pub mod get;
pub mod list;
pub mod new;
pub mod remove_field;
pub mod search;
pub mod update;

use std::io::BufRead;

use anyhow::{Context as _, Result};

use crate::config::{self, Config};
use crate::crypto::password::PasswordCipher;
use crate::error::LinepassError;
use crate::prompt::Prompter;
use crate::record::Record;
use crate::repository::{Repository, Session};

/// Everything a command needs besides its arguments.
pub struct Context {
    pub config: Config,
    pub repo: Repository<PasswordCipher>,
}

impl Context {
    /// Resolve the home directory, config file and store path from the environment.
    pub fn load() -> Result<Self> {
        let home = config::home_dir()?;
        let cfg = config::read(&home).context("Failed to read config")?;
        let store_path = config::store_path(std::env::var_os(config::STORE_ENV), &home, &cfg);
        tracing::debug!(store = %store_path.display(), "resolved store path");

        let repo = Repository::new(store_path, PasswordCipher::new(cfg.kdf_params()), cfg.lock);
        Ok(Self { config: cfg, repo })
    }
}

/// Ask for the passphrase and decrypt an existing store.
fn unlock<'a, R: BufRead>(
    ctx: &'a Context,
    prompter: &mut Prompter<R>,
) -> Result<Session<'a, PasswordCipher>> {
    if !ctx.repo.exists()? {
        return Err(LinepassError::StoreNotFound.into());
    }
    let passphrase = prompter
        .passphrase()
        .context("Failed to read passphrase")?;
    Ok(ctx.repo.unlock(passphrase)?)
}

/// Print projections separated by blank lines.
fn print_records(records: &[&Record]) {
    let rendered: Vec<String> = records.iter().map(|r| r.render()).collect();
    println!("{}", rendered.join("\n\n"));
}
