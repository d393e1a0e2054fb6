use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::LinepassError;

/// Separates the fields of an encoded record.
pub const FIELD_SEP: char = '|';
/// Separates an extra field's name from its value.
pub const SUB_SEP: char = ':';

type Result<T> = std::result::Result<T, LinepassError>;

/// A named key/value pair attached to a record beyond the three core fields.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct ExtraField {
    pub name: String,
    pub value: String,
}

impl ExtraField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse `NAME:VALUE`, splitting on the first sub-separator.
    pub fn parse(token: &str) -> Self {
        match token.split_once(SUB_SEP) {
            Some((name, value)) => Self::new(name, value),
            None => Self::new(token, ""),
        }
    }
}

/// One password entry. Field contents are wiped from memory on drop.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Record {
    pub name: String,
    pub username: String,
    pub password: String,
    pub extra_fields: Vec<ExtraField>,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: password.into(),
            extra_fields: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_fields.push(ExtraField::new(name, value));
        self
    }

    /// Check every component against the line format. Anything that would
    /// make `decode` read back a different record is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LinepassError::Validation("name must not be empty".into()));
        }
        validate_key("name", &self.name)?;
        validate_key("username", &self.username)?;
        validate_value("password", &self.password)?;
        for field in &self.extra_fields {
            if field.name.is_empty() {
                return Err(LinepassError::Validation(
                    "field name must not be empty".into(),
                ));
            }
            validate_key("field name", &field.name)?;
            validate_value("field value", &field.value)?;
        }
        Ok(())
    }

    /// Encode as `name|username|password[|field:value]*`.
    pub fn encode(&self) -> Result<String> {
        self.validate()?;

        let mut line = String::with_capacity(
            self.name.len() + self.username.len() + self.password.len() + 2,
        );
        line.push_str(&self.name);
        line.push(FIELD_SEP);
        line.push_str(&self.username);
        line.push(FIELD_SEP);
        line.push_str(&self.password);
        for field in &self.extra_fields {
            line.push(FIELD_SEP);
            line.push_str(&field.name);
            line.push(SUB_SEP);
            line.push_str(&field.value);
        }
        Ok(line)
    }

    /// Decode one line. Returns `None` for lines with fewer than two tokens
    /// and for lines whose contents could not have been produced by `encode`.
    pub fn decode(line: &str) -> Option<Self> {
        let mut tokens = line.split(FIELD_SEP);
        let name = tokens.next()?;
        let username = tokens.next()?;
        let password = tokens.next().unwrap_or_default();

        let record = Self {
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            extra_fields: tokens
                .filter(|t| !t.is_empty())
                .map(ExtraField::parse)
                .collect(),
        };

        record.validate().ok()?;
        Some(record)
    }

    /// Exact, case-insensitive name match used by every by-name command.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.to_lowercase()
    }

    /// First extra field named `field_name`, compared case-insensitively.
    pub fn field_position(&self, field_name: &str) -> Option<usize> {
        let wanted = field_name.to_lowercase();
        self.extra_fields
            .iter()
            .position(|f| f.name.to_lowercase() == wanted)
    }

    /// Human-readable view: the three core fields, then each extra field.
    pub fn render(&self) -> String {
        let mut out = format!(
            "Name: {}\nUsername: {}\nPassword: {}",
            self.name, self.username, self.password
        );
        for field in &self.extra_fields {
            out.push('\n');
            out.push_str(&field.name);
            out.push_str(": ");
            out.push_str(&field.value);
        }
        out
    }
}

fn validate_key(what: &str, value: &str) -> Result<()> {
    if value.contains(SUB_SEP) {
        return Err(LinepassError::Validation(format!(
            "{} must not contain '{}'",
            what, SUB_SEP
        )));
    }
    validate_value(what, value)
}

fn validate_value(what: &str, value: &str) -> Result<()> {
    if value.contains(FIELD_SEP) {
        return Err(LinepassError::Validation(format!(
            "{} must not contain '{}'",
            what, FIELD_SEP
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(LinepassError::Validation(format!(
            "{} must not contain a line break",
            what
        )));
    }
    Ok(())
}
