//! Authenticated token format for the stored password.
//!
//! A token is the padded base64url text of
//! `version (1) || nonce (12) || ciphertext || tag (16)`,
//! sealed with AES-256-GCM. The version byte is bound as associated data.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use rand::RngCore;
use rand::rngs::OsRng;
use secrecy::ExposeSecret;

use super::key::VaultKey;
use super::{VaultError, VaultResult};

pub const TOKEN_VERSION: u8 = 0x80;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 16;

const HEADER_SIZE: usize = 1 + NONCE_SIZE;

fn cipher_for(key: &VaultKey) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.expose_secret()))
}

/// Encrypts `plaintext` into a text token.
pub fn seal(key: &VaultKey, plaintext: &[u8]) -> VaultResult<String> {
    let cipher = cipher_for(key);

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let aad = [TOKEN_VERSION];
    let ciphertext = cipher
        .encrypt(nonce, Payload { msg: plaintext, aad: &aad })
        .map_err(|e| VaultError::Encryption(e.to_string()))?;

    let mut raw = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
    raw.push(TOKEN_VERSION);
    raw.extend_from_slice(&nonce_bytes);
    raw.extend_from_slice(&ciphertext);

    Ok(URL_SAFE.encode(raw))
}

/// Decrypts a token produced by [`seal`].
///
/// Fails with `VaultError::Decryption` on malformed text, unknown version,
/// truncated data, wrong key or any modification of the token.
pub fn open(key: &VaultKey, token: &[u8]) -> VaultResult<Vec<u8>> {
    let raw = URL_SAFE
        .decode(token)
        .map_err(|e| VaultError::Decryption(format!("malformed token: {}", e)))?;

    if raw.len() < HEADER_SIZE + TAG_SIZE {
        return Err(VaultError::Decryption("token too short".to_string()));
    }
    if raw[0] != TOKEN_VERSION {
        return Err(VaultError::Decryption(format!(
            "unsupported token version: {:#04x}",
            raw[0]
        )));
    }

    let (header, ciphertext) = raw.split_at(HEADER_SIZE);
    let nonce = Nonce::from_slice(&header[1..]);
    let cipher = cipher_for(key);

    cipher
        .decrypt(nonce, Payload { msg: ciphertext, aad: &header[..1] })
        .map_err(|_| {
            VaultError::Decryption("wrong key or corrupted data".to_string())
        })
}
