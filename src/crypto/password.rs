use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use secrecy::{ExposeSecret, SecretString};
use zeroize::Zeroize;

use crate::crypto::{Cipher, Result};
use crate::error::LinepassError;

const SALT_LEN: usize = 16;
const PARAMS_LEN: usize = 12;
const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;
const HEADER_LEN: usize = SALT_LEN + PARAMS_LEN + NONCE_LEN;

// Upper bounds for costs read back from a blob.
const MAX_M_COST: u32 = 1 << 20; // 1 GiB
const MAX_T_COST: u32 = 64;
const MAX_P_COST: u32 = 64;

/// AES-256-GCM keyed by Argon2id.
///
/// Output layout: `salt ‖ m_cost ‖ t_cost ‖ p_cost ‖ nonce ‖ ciphertext`, with
/// the three costs as little-endian u32. Decryption always uses the costs
/// recorded in the blob, so `kdf_params` only affects new encryptions.
pub struct PasswordCipher {
    kdf_params: KdfParams,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KdfParams {
    pub m_cost: u32,
    pub t_cost: u32,
    pub p_cost: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            m_cost: 65536, // 64 MB
            t_cost: 3,
            p_cost: 4,
        }
    }
}

impl KdfParams {
    fn to_bytes(&self) -> [u8; PARAMS_LEN] {
        let mut out = [0u8; PARAMS_LEN];
        out[0..4].copy_from_slice(&self.m_cost.to_le_bytes());
        out[4..8].copy_from_slice(&self.t_cost.to_le_bytes());
        out[8..12].copy_from_slice(&self.p_cost.to_le_bytes());
        out
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        let word =
            |i: usize| u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        Self {
            m_cost: word(0),
            t_cost: word(4),
            p_cost: word(8),
        }
    }
}

impl PasswordCipher {
    pub fn new(kdf_params: KdfParams) -> Self {
        Self { kdf_params }
    }
}

impl Cipher for PasswordCipher {
    fn encrypt(&self, plaintext: &[u8], passphrase: &SecretString) -> Result<Vec<u8>> {
        let mut salt = [0u8; SALT_LEN];
        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut salt);
        rand::thread_rng().fill_bytes(&mut nonce_bytes);

        let mut key = derive_key(
            passphrase.expose_secret().as_bytes(),
            &salt,
            &self.kdf_params,
        )?;

        let ciphertext_result = {
            let cipher = Aes256Gcm::new_from_slice(&key)
                .map_err(|_| LinepassError::CorruptStore("Invalid key length.".into()))?;
            cipher
                .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
                .map_err(|_| LinepassError::CorruptStore("Encryption failed.".into()))
        };

        key.zeroize();

        let ciphertext = ciphertext_result?;

        let mut out = Vec::with_capacity(HEADER_LEN + ciphertext.len());
        out.extend_from_slice(&salt);
        out.extend_from_slice(&self.kdf_params.to_bytes());
        out.extend_from_slice(&nonce_bytes);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn decrypt(&self, blob: &[u8], passphrase: &SecretString) -> Result<Vec<u8>> {
        if blob.len() < HEADER_LEN {
            tracing::debug!(len = blob.len(), "store file shorter than cipher header");
            return Err(LinepassError::DecryptFailure);
        }

        let (salt, rest) = blob.split_at(SALT_LEN);
        let (params, rest) = rest.split_at(PARAMS_LEN);
        let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);
        let params = KdfParams::from_bytes(params);
        if params.m_cost > MAX_M_COST || params.t_cost > MAX_T_COST || params.p_cost > MAX_P_COST {
            tracing::debug!("store header has implausible KDF parameters");
            return Err(LinepassError::DecryptFailure);
        }

        let mut key = derive_key(passphrase.expose_secret().as_bytes(), salt, &params)
            .map_err(|_| LinepassError::DecryptFailure)?;

        let plaintext_result = {
            let cipher = Aes256Gcm::new_from_slice(&key)
                .map_err(|_| LinepassError::CorruptStore("Invalid key length.".into()))?;
            cipher
                .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
                .map_err(|_| LinepassError::DecryptFailure)
        };

        key.zeroize();

        plaintext_result
    }
}

/// Derive a 32-byte AES key from the given passphrase and salt using Argon2id.
/// The caller is responsible for zeroizing the returned array after use.
fn derive_key(passphrase: &[u8], salt: &[u8], params: &KdfParams) -> Result<[u8; KEY_LEN]> {
    let argon2_params = Params::new(params.m_cost, params.t_cost, params.p_cost, Some(KEY_LEN))
        .map_err(|e| LinepassError::Config(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(passphrase, salt, &mut key)
        .map_err(|e| LinepassError::Config(e.to_string()))?;

    Ok(key)
}
