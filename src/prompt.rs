use std::io::{BufRead, IsTerminal, StdinLock, Write};

use secrecy::SecretString;
use zeroize::Zeroize;

use crate::error::LinepassError;

type Result<T> = std::result::Result<T, LinepassError>;

/// Reads answers either from the terminal or, when stdin is piped, one line
/// at a time from the input stream. The first piped line is the passphrase.
pub struct Prompter<R> {
    input: R,
    interactive: bool,
}

impl Prompter<StdinLock<'static>> {
    pub fn stdin() -> Self {
        let stdin = std::io::stdin();
        Self {
            interactive: stdin.is_terminal(),
            input: stdin.lock(),
        }
    }
}

impl<R: BufRead> Prompter<R> {
    /// A prompter that never touches the terminal.
    #[cfg(test)]
    pub fn scripted(input: R) -> Self {
        Self {
            input,
            interactive: false,
        }
    }

    /// Passphrase for an existing store.
    pub fn passphrase(&mut self) -> Result<SecretString> {
        let passphrase = self.secret("Passphrase: ")?;
        if passphrase.is_empty() {
            return Err(LinepassError::Validation("no passphrase given".into()));
        }
        Ok(SecretString::new(passphrase))
    }

    /// Passphrase for a store that is about to be created. Asked twice when
    /// a terminal is attached.
    pub fn new_passphrase(&mut self) -> Result<SecretString> {
        let mut passphrase = self.secret("New passphrase: ")?;
        if passphrase.is_empty() {
            return Err(LinepassError::Validation(
                "passphrase must not be empty".into(),
            ));
        }
        if self.interactive {
            let mut confirm = self.secret("Confirm passphrase: ")?;
            let matches = confirm == passphrase;
            confirm.zeroize();
            if !matches {
                passphrase.zeroize();
                return Err(LinepassError::Validation("passphrases do not match".into()));
            }
        }
        Ok(SecretString::new(passphrase))
    }

    /// A masked answer. Piped input is read like any other line.
    pub fn secret(&mut self, label: &str) -> Result<String> {
        if self.interactive {
            return Ok(rpassword::prompt_password(label)?);
        }
        self.read_answer()
    }

    /// A visible answer with the trailing newline removed. End of input reads
    /// as an empty answer.
    pub fn line(&mut self, label: &str) -> Result<String> {
        print!("{}", label);
        std::io::stdout().flush()?;
        self.read_answer()
    }

    /// `[y/N]` question; anything but `y`/`yes` declines.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.line(&format!("{} [y/N]: ", question))?;
        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    fn read_answer(&mut self) -> Result<String> {
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        let trimmed = answer.trim_end_matches(['\n', '\r']).len();
        answer.truncate(trimmed);
        Ok(answer)
    }
}
