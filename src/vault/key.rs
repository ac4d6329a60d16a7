//! Symmetric key handling for the vault.

use std::fmt;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use rand::RngCore;
use rand::rngs::OsRng;
use secrecy::zeroize::Zeroize;
use secrecy::{ExposeSecret, SecretBox};

use super::{VaultError, VaultResult};

/// AES-256 key length in bytes.
pub const KEY_SIZE: usize = 32;

/// Environment variable overriding the key file location.
pub const KEY_PATH_ENV: &str = "PWD_VAULT_KEY_PATH";

/// Default key file, relative to the working directory.
pub const DEFAULT_KEY_PATH: &str = "key.key";

/// A 256-bit vault key, wiped from memory on drop.
pub struct VaultKey(SecretBox<[u8; KEY_SIZE]>);

impl VaultKey {
    /// Generates a fresh random key from the OS RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        let key = Self::from_bytes(bytes);
        bytes.zeroize();
        key
    }

    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(SecretBox::new(Box::new(bytes)))
    }

    /// Parses the text form written by [`VaultKey::encode`].
    ///
    /// Surrounding ASCII whitespace is ignored. Returns `None` when the text
    /// is not base64url or does not hold exactly [`KEY_SIZE`] bytes.
    pub fn decode(text: &[u8]) -> Option<Self> {
        let mut decoded = URL_SAFE.decode(text.trim_ascii()).ok()?;
        let key = <[u8; KEY_SIZE]>::try_from(decoded.as_slice())
            .ok()
            .map(Self::from_bytes);
        decoded.zeroize();
        key
    }

    /// Base64url text form (44 characters, padded).
    pub fn encode(&self) -> String {
        URL_SAFE.encode(self.expose_secret())
    }
}

impl ExposeSecret<[u8; KEY_SIZE]> for VaultKey {
    fn expose_secret(&self) -> &[u8; KEY_SIZE] {
        self.0.expose_secret()
    }
}

impl Clone for VaultKey {
    fn clone(&self) -> Self {
        Self::from_bytes(*self.expose_secret())
    }
}

impl fmt::Debug for VaultKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VaultKey([REDACTED])")
    }
}

/// Source of the key the vault encrypts with.
pub trait KeyProvider {
    /// Returns the current key, creating it first if none exists yet.
    fn get_or_create_key(&self) -> VaultResult<VaultKey>;
}

/// Key persisted as base64url text in a single file.
///
/// The file is read on every call; nothing is cached. Two processes creating
/// the key at the same time may race, the last writer wins.
#[derive(Debug, Clone)]
pub struct FileKeyProvider {
    path: PathBuf,
}

/// Returns the key file path.
///
/// Priority:
/// 1. Environment variable `PWD_VAULT_KEY_PATH`
/// 2. Default path `./key.key`
pub fn get_key_path() -> PathBuf {
    std::env::var_os(KEY_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_KEY_PATH))
}

impl FileKeyProvider {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn from_env() -> Self {
        Self::new(get_key_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn create_key(&self) -> VaultResult<VaultKey> {
        let key = VaultKey::generate();
        std::fs::write(&self.path, key.encode()).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to write vault key {:?}: {}", self.path, e);
            VaultError::Io(e)
        })?;

        #[cfg(feature = "tracing")]
        tracing::info!("New vault key created at {:?}", self.path);

        Ok(key)
    }
}

impl KeyProvider for FileKeyProvider {
    fn get_or_create_key(&self) -> VaultResult<VaultKey> {
        match std::fs::read(&self.path) {
            Ok(mut text) => {
                let key = VaultKey::decode(&text);
                text.zeroize();
                key.ok_or_else(|| VaultError::InvalidKey(self.path.clone()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => self.create_key(),
            Err(e) => Err(VaultError::Io(e)),
        }
    }
}

/// Fixed in-memory key, for embedding callers and tests.
#[derive(Debug, Clone)]
pub struct StaticKeyProvider {
    key: VaultKey,
}

impl StaticKeyProvider {
    pub fn new(key: VaultKey) -> Self {
        Self { key }
    }
}

impl KeyProvider for StaticKeyProvider {
    fn get_or_create_key(&self) -> VaultResult<VaultKey> {
        Ok(self.key.clone())
    }
}
