use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "linepass",
    about = "A password manager that keeps every entry in one encrypted file.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the entry with this exact name (case-insensitive).
    Get {
        /// Entry name.
        name: String,
    },

    /// Show every entry whose line matches a case-insensitive regex.
    Search {
        /// Regex, or plain text if it is not a valid regex.
        pattern: String,
    },

    /// Add an entry (name, username and password are prompted). Creates the store if needed.
    New {
        /// Extra field to attach, as NAME:VALUE. Repeatable.
        #[arg(long = "field", value_name = "NAME:VALUE")]
        fields: Vec<String>,
    },

    /// Change an entry's username and password; blank answers keep the current value.
    Update {
        /// Entry name.
        name: String,
    },

    /// Delete an entry after confirmation.
    Delete {
        /// Entry name.
        name: String,
    },

    /// Attach an extra field to an entry (field name and value are prompted).
    AddField {
        /// Entry name.
        name: String,
    },

    /// Remove an extra field from an entry.
    RemoveField {
        /// Entry name.
        name: String,
        /// Field name.
        field: String,
    },

    /// Print a random password.
    Generate {
        /// Password length (defaults to the configured length).
        #[arg(short, long)]
        length: Option<usize>,

        /// Letters and digits only.
        #[arg(long)]
        no_symbols: bool,
    },

    /// List entry names (never passwords).
    List,
}
