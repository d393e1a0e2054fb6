use crate::error::LinepassError;
use crate::record::Record;

pub type Result<T> = std::result::Result<T, LinepassError>;

/// The decrypted contents of a store file: records in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Store {
    records: Vec<Record>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a plaintext body. Blank lines are skipped; lines that do not
    /// decode to a valid record are dropped with a warning.
    pub fn parse(body: &str) -> Self {
        let mut records = Vec::new();
        for (idx, line) in body.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Record::decode(line) {
                Some(record) => records.push(record),
                None => tracing::warn!(line = idx + 1, "dropping malformed store line"),
            }
        }
        Self { records }
    }

    /// Encode every record and join them with newlines.
    pub fn serialize(&self) -> Result<String> {
        let lines = self
            .records
            .iter()
            .map(Record::encode)
            .collect::<Result<Vec<_>>>()?;
        Ok(lines.join("\n"))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records whose name matches `name` case-insensitively.
    pub fn matching(&self, name: &str) -> Vec<&Record> {
        self.records.iter().filter(|r| r.matches_name(name)).collect()
    }

    /// The record a by-name command operates on: an exact match if there is
    /// one, otherwise the first case-insensitive match.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .or_else(|| self.records.iter().find(|r| r.matches_name(name)))
    }

    /// The single write primitive: drop every record named exactly `name`,
    /// then append `replacement` if given.
    pub fn upsert(&mut self, name: &str, replacement: Option<Record>) -> Result<()> {
        if let Some(record) = &replacement {
            record.validate()?;
        }
        self.records.retain(|r| r.name != name);
        if let Some(record) = replacement {
            self.records.push(record);
        }
        Ok(())
    }
}

impl FromIterator<Record> for Store {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
