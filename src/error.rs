use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinepassError {
    #[error("No password store found. Create one with: linepass new")]
    StoreNotFound,

    #[error("Wrong passphrase, or store is corrupted.")]
    DecryptFailure,

    #[error("Store is corrupted: {0}")]
    CorruptStore(String),

    #[error("Could not find entry '{0}'")]
    EntryNotFound(String),

    #[error("No entries found")]
    NoMatches,

    #[error("Entry '{entry}' has no field '{field}'")]
    FieldNotFound { entry: String, field: String },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Aborted")]
    AbortedByUser,

    #[error("Store is locked by another linepass process: {0}")]
    StoreLocked(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
