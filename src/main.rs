mod cli;
mod commands;
mod config;
mod crypto;
mod error;
mod generate;
mod prompt;
mod record;
mod repository;
mod store;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use commands::Context;
use prompt::Prompter;
use tracing_subscriber::EnvFilter;

/// Log filter, in `EnvFilter` syntax.
const LOG_ENV: &str = "LINEPASS_LOG";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (code, message) = outcome(run(cli.command));
    if let Some(message) = message {
        eprintln!("{}", message);
    }
    ExitCode::from(code)
}

/// Exit status and the stderr line for a finished command.
fn outcome(result: Result<()>) -> (u8, Option<String>) {
    match result {
        Ok(()) => (0, None),
        Err(e) => (1, Some(format!("Error: {:#}", e))),
    }
}

fn run(command: Command) -> Result<()> {
    let ctx = Context::load()?;
    let mut prompter = Prompter::stdin();

    match command {
        Command::Get { name } => commands::get::run(&ctx, &mut prompter, &name)?,
        Command::Search { pattern } => commands::search::run(&ctx, &mut prompter, &pattern)?,
        Command::New { fields } => commands::new::run(&ctx, &mut prompter, &fields)?,
        Command::Update { name } => commands::update::run(&ctx, &mut prompter, &name)?,
        Command::Delete { name } => commands::delete::run(&ctx, &mut prompter, &name)?,
        Command::AddField { name } => commands::add_field::run(&ctx, &mut prompter, &name)?,
        Command::RemoveField { name, field } => {
            commands::remove_field::run(&ctx, &mut prompter, &name, &field)?
        }
        Command::Generate { length, no_symbols } => {
            commands::generate::run(&ctx, length, no_symbols)?
        }
        Command::List => commands::list::run(&ctx, &mut prompter)?,
    }

    Ok(())
}
