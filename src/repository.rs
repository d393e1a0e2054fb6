//! Read-modify-write engine over one encrypted store file.
//!
//! A command unlocks the store into a [`Session`], runs one query or one
//! mutation, and drops the session. Every mutation re-encrypts and replaces
//! the whole file before returning; a mutation that fails or is declined
//! leaves the file exactly as it was.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use regex::RegexBuilder;
use secrecy::SecretString;
use zeroize::Zeroizing;

use crate::crypto::{self, Cipher};
use crate::error::LinepassError;
use crate::record::{ExtraField, Record};
use crate::store::{Result, Store};

/// Location of a store file plus the cipher that guards it.
pub struct Repository<C> {
    path: PathBuf,
    cipher: C,
    lock: bool,
}

/// New values for an existing entry. `None` keeps the current value.
#[derive(Debug, Default)]
pub struct RecordUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl<C: Cipher> Repository<C> {
    pub fn new(path: PathBuf, cipher: C, lock: bool) -> Self {
        Self { path, cipher, lock }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the store file exists and is non-empty.
    pub fn exists(&self) -> Result<bool> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() > 0),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Decrypt the store file into a session.
    pub fn unlock(&self, passphrase: SecretString) -> Result<Session<'_, C>> {
        let guard = self.acquire_lock(false)?;
        self.open_locked(guard, passphrase, false)
    }

    /// Unlock the store, or start an empty one if no store file exists yet.
    /// The file is only written on the first mutation.
    pub fn unlock_or_create(&self, passphrase: SecretString) -> Result<Session<'_, C>> {
        let guard = self.acquire_lock(true)?;
        self.open_locked(guard, passphrase, true)
    }

    /// Load the store while `guard` is held. Existence is only decided here,
    /// so a store written by another process before the lock was taken is
    /// always read rather than replaced.
    fn open_locked(
        &self,
        guard: Option<StoreLock>,
        passphrase: SecretString,
        create: bool,
    ) -> Result<Session<'_, C>> {
        if !self.exists()? {
            if !create {
                return Err(LinepassError::StoreNotFound);
            }
            tracing::info!(path = %self.path.display(), "starting a new store");
            return Ok(Session {
                repo: self,
                passphrase,
                store: Store::new(),
                _lock: guard,
            });
        }

        let ciphertext = std::fs::read(&self.path)?;
        let body = Zeroizing::new(crypto::decrypt_store(&self.cipher, &ciphertext, &passphrase)?);
        let store = Store::parse(&body);
        tracing::debug!(
            path = %self.path.display(),
            records = store.len(),
            "store unlocked"
        );

        Ok(Session {
            repo: self,
            passphrase,
            store,
            _lock: guard,
        })
    }

    fn acquire_lock(&self, create_dirs: bool) -> Result<Option<StoreLock>> {
        if !self.lock {
            return Ok(None);
        }
        let parent = parent_dir(&self.path);
        if create_dirs {
            std::fs::create_dir_all(parent)?;
        } else if !parent.exists() {
            return Err(LinepassError::StoreNotFound);
        }
        StoreLock::acquire(&self.path).map(Some)
    }

    /// Encrypt `body` and atomically replace the store file.
    fn write(&self, body: &str, passphrase: &SecretString) -> Result<()> {
        let ciphertext = crypto::encrypt_store(&self.cipher, body, passphrase)?;

        // Atomic write: write to temp file → fsync → rename
        let parent = parent_dir(&self.path);
        std::fs::create_dir_all(parent)?;
        let tmp_path = parent.join(format!(".linepass.tmp.{}", rand::random::<u64>()));

        let written = (|| -> std::io::Result<()> {
            let mut tmp = private_file(&tmp_path)?;
            tmp.write_all(&ciphertext)?;
            tmp.sync_all()?;
            std::fs::rename(&tmp_path, &self.path)
        })();

        if let Err(e) = written {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }
}

/// An unlocked store: the passphrase and the decrypted records for one command.
pub struct Session<'a, C> {
    repo: &'a Repository<C>,
    passphrase: SecretString,
    store: Store,
    _lock: Option<StoreLock>,
}

impl<C: Cipher> Session<'_, C> {
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Every record whose name matches exactly, ignoring case. Fails with
    /// `NoMatches` when there are none.
    pub fn get(&self, name: &str) -> Result<Vec<&Record>> {
        let matches = self.store.matching(name);
        if matches.is_empty() {
            return Err(LinepassError::NoMatches);
        }
        Ok(matches)
    }

    /// Records whose encoded line matches `pattern`, ignoring case. A pattern
    /// that is not a valid regex is matched literally. No match is not an error.
    pub fn search(&self, pattern: &str) -> Result<Vec<&Record>> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .or_else(|_| {
                RegexBuilder::new(&regex::escape(pattern))
                    .case_insensitive(true)
                    .build()
            })
            .map_err(|e| LinepassError::Validation(e.to_string()))?;

        let mut found = Vec::new();
        for record in self.store.records() {
            let line = Zeroizing::new(record.encode()?);
            if regex.is_match(&line) {
                found.push(record);
            }
        }
        Ok(found)
    }

    /// Entry names in store order.
    pub fn list(&self) -> Vec<&str> {
        self.store.records().iter().map(|r| r.name.as_str()).collect()
    }

    /// The entry a by-name command operates on.
    pub fn find(&self, name: &str) -> Result<&Record> {
        self.store
            .find(name)
            .ok_or_else(|| LinepassError::EntryNotFound(name.to_string()))
    }

    /// Insert `record`, replacing any entry with exactly the same name.
    pub fn add(&mut self, record: Record) -> Result<()> {
        let name = record.name.clone();
        self.apply(&name, Some(record))
    }

    /// Change an entry's username and password. `edit` sees the current
    /// record and returns the new values; extra fields are kept.
    pub fn update<F>(&mut self, name: &str, edit: F) -> Result<()>
    where
        F: FnOnce(&Record) -> Result<RecordUpdate>,
    {
        let current = self.find(name)?;
        let changes = edit(current)?;

        let mut record = current.clone();
        if let Some(username) = changes.username {
            record.username = username;
        }
        if let Some(password) = changes.password {
            record.password = password;
        }
        let key = current.name.clone();
        self.apply(&key, Some(record))
    }

    /// Remove an entry after `confirm` approves it. Declining returns
    /// `AbortedByUser` and nothing is written.
    pub fn delete<F>(&mut self, name: &str, confirm: F) -> Result<()>
    where
        F: FnOnce(&Record) -> Result<bool>,
    {
        let current = self.find(name)?;
        if !confirm(current)? {
            tracing::debug!(entry = %current.name, "delete declined");
            return Err(LinepassError::AbortedByUser);
        }
        let key = current.name.clone();
        self.apply(&key, None)
    }

    /// Append an extra field to an entry.
    pub fn add_field(&mut self, name: &str, field_name: &str, field_value: &str) -> Result<()> {
        let current = self.find(name)?;
        let key = current.name.clone();
        let mut record = current.clone();
        record
            .extra_fields
            .push(ExtraField::new(field_name, field_value));
        self.apply(&key, Some(record))
    }

    /// Remove the first extra field named `field_name` from an entry.
    pub fn remove_field(&mut self, name: &str, field_name: &str) -> Result<()> {
        let current = self.find(name)?;
        let idx = current
            .field_position(field_name)
            .ok_or_else(|| LinepassError::FieldNotFound {
                entry: current.name.clone(),
                field: field_name.to_string(),
            })?;
        let key = current.name.clone();
        let mut record = current.clone();
        record.extra_fields.remove(idx);
        self.apply(&key, Some(record))
    }

    /// Upsert into a copy of the store, then persist. The in-memory store
    /// only changes once the file has been replaced.
    fn apply(&mut self, name: &str, replacement: Option<Record>) -> Result<()> {
        let mut next = self.store.clone();
        next.upsert(name, replacement)?;

        let body = Zeroizing::new(next.serialize()?);
        self.repo.write(&body, &self.passphrase)?;
        tracing::info!(
            path = %self.repo.path.display(),
            entry = %name,
            records = next.len(),
            "store saved"
        );

        self.store = next;
        Ok(())
    }
}

/// Advisory exclusive lock on `<store>.lock`, released on drop.
struct StoreLock {
    file: File,
}

impl StoreLock {
    fn acquire(store_path: &Path) -> Result<Self> {
        let mut lock_path = store_path.as_os_str().to_owned();
        lock_path.push(".lock");
        let lock_path = PathBuf::from(lock_path);

        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;
        file.try_lock_exclusive()
            .map_err(|_| LinepassError::StoreLocked(lock_path.display().to_string()))?;
        Ok(Self { file })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Create a file readable only by the owner.
fn private_file(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::password::{KdfParams, PasswordCipher};
    use tempfile::TempDir;

    fn test_cipher() -> PasswordCipher {
        // Very low cost for fast tests
        PasswordCipher::new(KdfParams {
            m_cost: 8192,
            t_cost: 1,
            p_cost: 1,
        })
    }

    fn test_passphrase() -> SecretString {
        SecretString::new("test-passphrase-do-not-use".to_string())
    }

    fn repo(dir: &TempDir) -> Repository<PasswordCipher> {
        Repository::new(dir.path().join("store"), test_cipher(), true)
    }

    /// A store holding `Entry 1` and `Entry 2`.
    fn seeded(dir: &TempDir) -> Repository<PasswordCipher> {
        let repo = repo(dir);
        {
            let mut session = repo.unlock_or_create(test_passphrase()).unwrap();
            session
                .add(Record::new("Entry 1", "entry1@test.com", "pass1234"))
                .unwrap();
            session
                .add(Record::new("Entry 2", "entry2@test.com", "1234pass"))
                .unwrap();
        }
        repo
    }

    fn reopen(repo: &Repository<PasswordCipher>) -> Store {
        repo.unlock(test_passphrase()).unwrap().store().clone()
    }

    #[test]
    fn test_missing_store_is_store_not_found() {
        let dir = TempDir::new().unwrap();
        let err = repo(&dir).unlock(test_passphrase()).err().unwrap();
        assert!(matches!(err, LinepassError::StoreNotFound));
    }

    #[test]
    fn test_missing_parent_dir_is_store_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = Repository::new(dir.path().join("nope/store"), test_cipher(), true);
        let err = repo.unlock(test_passphrase()).err().unwrap();
        assert!(matches!(err, LinepassError::StoreNotFound));
    }

    #[test]
    fn test_empty_store_file_is_store_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        std::fs::write(repo.path(), b"").unwrap();
        let err = repo.unlock(test_passphrase()).err().unwrap();
        assert!(matches!(err, LinepassError::StoreNotFound));
    }

    #[test]
    fn test_wrong_passphrase_is_decrypt_failure() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let wrong = SecretString::new("wrong".to_string());
        let err = repo.unlock(wrong).err().unwrap();
        assert!(matches!(err, LinepassError::DecryptFailure));
    }

    #[test]
    fn test_garbage_store_file_is_decrypt_failure() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        std::fs::write(repo.path(), b"truncated-ciphertext").unwrap();
        let err = repo.unlock(test_passphrase()).err().unwrap();
        assert!(matches!(err, LinepassError::DecryptFailure));
    }

    #[test]
    fn test_create_loads_store_written_before_lock_was_taken() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        assert!(!repo.exists().unwrap());

        // Another process creates the store in the meantime.
        {
            let mut other = repo.unlock_or_create(test_passphrase()).unwrap();
            other.add(Record::new("B-entry", "b", "pb")).unwrap();
        }

        let guard = repo.acquire_lock(true).unwrap();
        let mut session = repo.open_locked(guard, test_passphrase(), true).unwrap();
        session.add(Record::new("A-entry", "a", "pa")).unwrap();
        drop(session);

        let store = reopen(&repo);
        let names: Vec<&str> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B-entry", "A-entry"]);
    }

    #[test]
    fn test_creating_session_locks_out_other_creators() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let _first = repo.unlock_or_create(test_passphrase()).unwrap();
        let err = repo.unlock_or_create(test_passphrase()).err().unwrap();
        assert!(matches!(err, LinepassError::StoreLocked(_)));
    }

    #[test]
    fn test_create_writes_nothing_until_first_mutation() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        drop(repo.unlock_or_create(test_passphrase()).unwrap());
        assert!(!repo.exists().unwrap());
    }

    #[test]
    fn test_get_existing_entry() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let session = repo.unlock(test_passphrase()).unwrap();

        let found = session.get("Entry 2").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].render(),
            "Name: Entry 2\nUsername: entry2@test.com\nPassword: 1234pass"
        );
        assert_eq!(session.get("entry 2").unwrap().len(), 1);
    }

    #[test]
    fn test_get_missing_entry_is_no_matches() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let session = repo.unlock(test_passphrase()).unwrap();
        let err = session.get("Entry 3").unwrap_err();
        assert!(matches!(err, LinepassError::NoMatches));
        assert_eq!(err.to_string(), "No entries found");
    }

    #[test]
    fn test_search_matches_any_part_of_the_line() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let session = repo.unlock(test_passphrase()).unwrap();

        let names = |pattern: &str| -> Vec<String> {
            session
                .search(pattern)
                .unwrap()
                .into_iter()
                .map(|r| r.name.clone())
                .collect()
        };

        assert_eq!(names("entry"), vec!["Entry 1", "Entry 2"]);
        assert_eq!(names("ENTRY2@"), vec!["Entry 2"]);
        assert_eq!(names("^entry 1\\|"), vec!["Entry 1"]);
        assert_eq!(names("1234pass"), vec!["Entry 2"]);
        assert!(names("nothing-like-this").is_empty());
    }

    #[test]
    fn test_search_invalid_regex_is_literal() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir);
        let mut session = repo.unlock_or_create(test_passphrase()).unwrap();
        session.add(Record::new("odd (", "u", "p")).unwrap();
        session.add(Record::new("plain", "u", "p")).unwrap();

        let found = session.search("(").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "odd (");
    }

    #[test]
    fn test_new_persists_across_sessions() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let store = reopen(&repo);
        assert_eq!(
            store.serialize().unwrap(),
            "Entry 1|entry1@test.com|pass1234\nEntry 2|entry2@test.com|1234pass"
        );
    }

    #[test]
    fn test_new_twice_keeps_second() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        {
            let mut session = repo.unlock(test_passphrase()).unwrap();
            session.add(Record::new("Entry 1", "first", "one")).unwrap();
            session.add(Record::new("Entry 1", "second", "two")).unwrap();
        }
        let store = reopen(&repo);
        let matches = store.matching("Entry 1");
        assert_eq!(matches.len(), 1);
        assert_eq!(*matches[0], Record::new("Entry 1", "second", "two"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_new_with_invalid_record_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let before = std::fs::read(repo.path()).unwrap();
        {
            let mut session = repo.unlock(test_passphrase()).unwrap();
            let err = session.add(Record::new("bad|name", "u", "p")).unwrap_err();
            assert!(matches!(err, LinepassError::Validation(_)));
            assert_eq!(session.store().len(), 2);
        }
        assert_eq!(std::fs::read(repo.path()).unwrap(), before);
    }

    #[test]
    fn test_update_keeps_blank_values_and_fields() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        {
            let mut session = repo.unlock(test_passphrase()).unwrap();
            session.add_field("Entry 1", "pin", "0000").unwrap();
            session
                .update("entry 1", |current| {
                    assert_eq!(current.username, "entry1@test.com");
                    Ok(RecordUpdate {
                        username: None,
                        password: Some("new-pass".into()),
                    })
                })
                .unwrap();
        }
        let store = reopen(&repo);
        let record = store.find("Entry 1").unwrap();
        assert_eq!(record.username, "entry1@test.com");
        assert_eq!(record.password, "new-pass");
        assert_eq!(record.extra_fields, vec![ExtraField::new("pin", "0000")]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_missing_entry_is_entry_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let mut session = repo.unlock(test_passphrase()).unwrap();
        let err = session
            .update("Entry 3", |_| Ok(RecordUpdate::default()))
            .unwrap_err();
        assert!(matches!(err, LinepassError::EntryNotFound(_)));
        assert_eq!(err.to_string(), "Could not find entry 'Entry 3'");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        {
            let mut session = repo.unlock(test_passphrase()).unwrap();
            session.add(Record::new("Entry 3", "u3", "p3")).unwrap();
            session.delete("Entry 2", |_| Ok(true)).unwrap();
        }
        let store = reopen(&repo);
        assert_eq!(
            store.serialize().unwrap(),
            "Entry 1|entry1@test.com|pass1234\nEntry 3|u3|p3"
        );
    }

    #[test]
    fn test_declined_delete_leaves_file_unchanged() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let before = std::fs::read(repo.path()).unwrap();
        {
            let mut session = repo.unlock(test_passphrase()).unwrap();
            let err = session
                .delete("Entry 1", |record| {
                    assert_eq!(record.name, "Entry 1");
                    Ok(false)
                })
                .unwrap_err();
            assert!(matches!(err, LinepassError::AbortedByUser));
            assert_eq!(session.store().len(), 2);
        }
        assert_eq!(std::fs::read(repo.path()).unwrap(), before);
    }

    #[test]
    fn test_delete_missing_entry_never_asks() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let mut session = repo.unlock(test_passphrase()).unwrap();
        let err = session
            .delete("Entry 3", |_| panic!("confirmation must not be requested"))
            .unwrap_err();
        assert!(matches!(err, LinepassError::EntryNotFound(_)));
    }

    #[test]
    fn test_add_then_remove_field_restores_record() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        {
            let mut session = repo.unlock(test_passphrase()).unwrap();
            session.add_field("Entry 1", "pin", "0000").unwrap();
        }
        {
            let session = repo.unlock(test_passphrase()).unwrap();
            let rendered = session.get("Entry 1").unwrap()[0].render();
            assert!(rendered.lines().any(|l| l == "pin: 0000"));
        }
        {
            let mut session = repo.unlock(test_passphrase()).unwrap();
            session.remove_field("Entry 1", "pin").unwrap();
        }
        let store = reopen(&repo);
        assert_eq!(
            *store.find("Entry 1").unwrap(),
            Record::new("Entry 1", "entry1@test.com", "pass1234")
        );
    }

    #[test]
    fn test_remove_field_removes_first_match_only() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let mut session = repo.unlock(test_passphrase()).unwrap();
        session.add_field("Entry 2", "code", "a").unwrap();
        session.add_field("Entry 2", "code", "b").unwrap();
        session.remove_field("Entry 2", "CODE").unwrap();
        assert_eq!(
            session.find("Entry 2").unwrap().extra_fields,
            vec![ExtraField::new("code", "b")]
        );
    }

    #[test]
    fn test_remove_missing_field_is_field_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let before = std::fs::read(repo.path()).unwrap();
        {
            let mut session = repo.unlock(test_passphrase()).unwrap();
            let err = session.remove_field("Entry 1", "pin").unwrap_err();
            assert!(matches!(err, LinepassError::FieldNotFound { .. }));
        }
        assert_eq!(std::fs::read(repo.path()).unwrap(), before);
    }

    #[test]
    fn test_add_field_rejects_separator_in_field_name() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let mut session = repo.unlock(test_passphrase()).unwrap();
        let err = session.add_field("Entry 1", "a:b", "v").unwrap_err();
        assert!(matches!(err, LinepassError::Validation(_)));
    }

    #[test]
    fn test_list_in_store_order() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let session = repo.unlock(test_passphrase()).unwrap();
        assert_eq!(session.list(), vec!["Entry 1", "Entry 2"]);
    }

    #[test]
    fn test_second_session_is_locked_out() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let _held = repo.unlock(test_passphrase()).unwrap();
        let err = repo.unlock(test_passphrase()).err().unwrap();
        assert!(matches!(err, LinepassError::StoreLocked(_)));
    }

    #[test]
    fn test_lock_is_released_on_drop() {
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        drop(repo.unlock(test_passphrase()).unwrap());
        assert!(repo.unlock(test_passphrase()).is_ok());
    }

    #[test]
    fn test_unlocked_repository_allows_concurrent_sessions() {
        let dir = TempDir::new().unwrap();
        seeded(&dir);
        let repo = Repository::new(dir.path().join("store"), test_cipher(), false);
        let _first = repo.unlock(test_passphrase()).unwrap();
        assert!(repo.unlock(test_passphrase()).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_store_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let repo = seeded(&dir);
        let mode = std::fs::metadata(repo.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        seeded(&dir);
        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".tmp."))
            .collect();
        assert!(leftovers.is_empty());
    }
}
