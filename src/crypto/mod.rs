pub mod password;

use secrecy::SecretString;
use zeroize::Zeroize;

use crate::error::LinepassError;

pub type Result<T> = std::result::Result<T, LinepassError>;

/// Passphrase-based symmetric encryption of an opaque byte buffer.
/// The repository only ever talks to this trait.
pub trait Cipher {
    fn encrypt(&self, plaintext: &[u8], passphrase: &SecretString) -> Result<Vec<u8>>;
    fn decrypt(&self, ciphertext: &[u8], passphrase: &SecretString) -> Result<Vec<u8>>;
}

/// Decrypt a whole store file into its plaintext body.
pub fn decrypt_store<C: Cipher + ?Sized>(
    cipher: &C,
    ciphertext: &[u8],
    passphrase: &SecretString,
) -> Result<String> {
    let plaintext = cipher.decrypt(ciphertext, passphrase)?;
    String::from_utf8(plaintext).map_err(|e| {
        let mut bytes = e.into_bytes();
        bytes.zeroize();
        LinepassError::CorruptStore("decrypted store is not valid UTF-8".into())
    })
}

/// Encrypt a plaintext store body.
pub fn encrypt_store<C: Cipher + ?Sized>(
    cipher: &C,
    plaintext: &str,
    passphrase: &SecretString,
) -> Result<Vec<u8>> {
    cipher.encrypt(plaintext.as_bytes(), passphrase)
}
