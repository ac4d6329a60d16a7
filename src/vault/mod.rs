//! Single-slot encrypted password storage.
//!
//! One password is kept at a time, as an authenticated token in a data
//! file. The key comes from a [`KeyProvider`], by default a key file next
//! to the data file. Saving replaces any previous record.

mod cipher;
mod key;

use std::io::Write;
use std::path::{Path, PathBuf};

use secrecy::zeroize::Zeroize;
use secrecy::{ExposeSecret, SecretString};
use tempfile::NamedTempFile;
use thiserror::Error;

pub use key::{
    DEFAULT_KEY_PATH, FileKeyProvider, KEY_PATH_ENV, KEY_SIZE, KeyProvider, StaticKeyProvider,
    VaultKey, get_key_path,
};

/// Environment variable overriding the ciphertext file location.
pub const DATA_PATH_ENV: &str = "PWD_VAULT_DATA_PATH";

/// Default ciphertext file, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "password.enc";

/// Errors that can occur during vault operations
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("No password to save")]
    EmptyInput,

    #[error("No saved password found at {0}")]
    NotFound(PathBuf),

    #[error("Failed to decrypt: {0}")]
    Decryption(String),

    #[error("Failed to encrypt: {0}")]
    Encryption(String),

    #[error("Invalid vault key file: {0}")]
    InvalidKey(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type VaultResult<T> = Result<T, VaultError>;

/// Returns the ciphertext file path.
///
/// Priority:
/// 1. Environment variable `PWD_VAULT_DATA_PATH`
/// 2. Default path `./password.enc`
pub fn get_data_path() -> PathBuf {
    std::env::var_os(DATA_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

#[derive(Debug, Clone)]
pub struct PasswordVault<K = FileKeyProvider> {
    key_provider: K,
    data_path: PathBuf,
}

impl PasswordVault<FileKeyProvider> {
    /// Vault backed by a key file and a data file.
    pub fn with_paths<P: Into<PathBuf>, Q: Into<PathBuf>>(key_path: P, data_path: Q) -> Self {
        Self::new(FileKeyProvider::new(key_path), data_path)
    }

    /// Vault using `PWD_VAULT_KEY_PATH` and `PWD_VAULT_DATA_PATH`, falling
    /// back to `key.key` and `password.enc` in the working directory.
    pub fn from_env() -> Self {
        Self::new(FileKeyProvider::from_env(), get_data_path())
    }
}

impl<K: KeyProvider> PasswordVault<K> {
    pub fn new<P: Into<PathBuf>>(key_provider: K, data_path: P) -> Self {
        Self {
            key_provider,
            data_path: data_path.into(),
        }
    }

    pub fn key_provider(&self) -> &K {
        &self.key_provider
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Encrypts `password` and stores it, replacing any previous record.
    ///
    /// The password is stored as given; it is not trimmed.
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if the password is empty
    /// - `InvalidKey` / `Io` if the key cannot be obtained
    /// - `Io` if the data file cannot be written
    pub fn save(&self, password: &SecretString) -> VaultResult<()> {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return Err(VaultError::EmptyInput);
        }

        let key = self.key_provider.get_or_create_key()?;
        let token = cipher::seal(&key, pwd.as_bytes())?;

        write_replace(&self.data_path, token.as_bytes()).map_err(|e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to save password to {:?}: {}", self.data_path, e);
            VaultError::Io(e)
        })?;

        #[cfg(feature = "tracing")]
        tracing::info!("Password encrypted and saved to {:?}", self.data_path);

        Ok(())
    }

    /// Loads and decrypts the stored password.
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing was saved yet
    /// - `Decryption` if the record is corrupted, tampered with or was
    ///   sealed under another key
    /// - `InvalidKey` / `Io` on key or file access failures
    pub fn load(&self) -> VaultResult<SecretString> {
        let token = match std::fs::read(&self.data_path) {
            Ok(token) => token,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(VaultError::NotFound(self.data_path.clone()));
            }
            Err(e) => return Err(VaultError::Io(e)),
        };

        let key = self.key_provider.get_or_create_key()?;
        let plaintext = cipher::open(&key, &token).inspect_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to decrypt {:?}: {}", self.data_path, _e);
        })?;

        let password = String::from_utf8(plaintext).map_err(|e| {
            e.into_bytes().zeroize();
            VaultError::Decryption("stored password is not valid UTF-8".to_string())
        })?;

        Ok(SecretString::new(password.into()))
    }
}

/// Replaces `path` wholesale: writes a sibling temp file, then renames it
/// over the target so readers never see a partial token.
fn write_replace(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::{TempDir, tempdir};

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn file_vault() -> (TempDir, PasswordVault) {
        let dir = tempdir().expect("Failed to create temp dir");
        let vault = PasswordVault::with_paths(
            dir.path().join("key.key"),
            dir.path().join("password.enc"),
        );
        (dir, vault)
    }

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: serialized tests, no concurrent env access
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: serialized tests, no concurrent env access
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, vault) = file_vault();

        for pwd in ["hunter2", "Abc12345!", " padded ", "pässwörd 🔐", "x"] {
            vault.save(&secret(pwd)).expect("save should succeed");
            let loaded = vault.load().expect("load should succeed");
            assert_eq!(loaded.expose_secret(), pwd);
        }
    }

    #[test]
    fn test_save_creates_key_and_data_files() {
        let (dir, vault) = file_vault();
        vault.save(&secret("hunter2")).unwrap();

        assert!(dir.path().join("key.key").exists());
        let token = std::fs::read_to_string(dir.path().join("password.enc")).unwrap();
        assert!(!token.contains("hunter2"));
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let (_dir, vault) = file_vault();
        vault.save(&secret("first-password")).unwrap();
        vault.save(&secret("second")).unwrap();

        assert_eq!(vault.load().unwrap().expose_secret(), "second");
    }

    #[test]
    fn test_save_empty_password() {
        let (dir, vault) = file_vault();

        let result = vault.save(&secret(""));
        assert!(matches!(result, Err(VaultError::EmptyInput)));
        assert!(!dir.path().join("password.enc").exists());
        assert!(!dir.path().join("key.key").exists());
    }

    #[test]
    fn test_load_without_save() {
        let (dir, vault) = file_vault();

        let result = vault.load();
        assert!(
            matches!(result, Err(VaultError::NotFound(p)) if p == dir.path().join("password.enc"))
        );
    }

    #[test]
    fn test_load_detects_any_flipped_byte() {
        let (dir, vault) = file_vault();
        vault.save(&secret("Tamper-Proof#1")).unwrap();

        let data_path = dir.path().join("password.enc");
        let original = std::fs::read(&data_path).unwrap();

        for i in 0..original.len() {
            let mut tampered = original.clone();
            tampered[i] ^= 0x01;
            std::fs::write(&data_path, &tampered).unwrap();

            let result = vault.load();
            assert!(
                matches!(result, Err(VaultError::Decryption(_))),
                "flipped byte {} was not detected",
                i
            );
        }

        std::fs::write(&data_path, &original).unwrap();
        assert_eq!(vault.load().unwrap().expose_secret(), "Tamper-Proof#1");
    }

    #[test]
    fn test_load_with_different_key() {
        let (dir, vault) = file_vault();
        vault.save(&secret("hunter2")).unwrap();

        let other = PasswordVault::with_paths(
            dir.path().join("other.key"),
            dir.path().join("password.enc"),
        );
        assert!(matches!(other.load(), Err(VaultError::Decryption(_))));
    }

    #[test]
    fn test_key_file_is_reread_on_every_call() {
        let (dir, vault) = file_vault();
        vault.save(&secret("hunter2")).unwrap();

        let replacement = VaultKey::generate();
        std::fs::write(dir.path().join("key.key"), replacement.encode()).unwrap();

        assert!(matches!(vault.load(), Err(VaultError::Decryption(_))));
    }

    #[test]
    fn test_load_rejects_non_utf8_plaintext() {
        let key = VaultKey::generate();
        let dir = tempdir().unwrap();
        let vault = PasswordVault::new(
            StaticKeyProvider::new(key.clone()),
            dir.path().join("password.enc"),
        );

        let token = cipher::seal(&key, &[0xff, 0xfe, 0xfd]).unwrap();
        std::fs::write(vault.data_path(), token).unwrap();

        assert!(matches!(vault.load(), Err(VaultError::Decryption(_))));
    }

    #[test]
    fn test_injected_key_provider() {
        let dir = tempdir().unwrap();
        let key = VaultKey::from_bytes([42u8; KEY_SIZE]);
        let vault = PasswordVault::new(
            StaticKeyProvider::new(key.clone()),
            dir.path().join("password.enc"),
        );

        vault.save(&secret("injected")).unwrap();

        let token = std::fs::read(vault.data_path()).unwrap();
        assert_eq!(cipher::open(&key, &token).unwrap(), b"injected");
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempdir().unwrap();
        let vault = PasswordVault::new(
            StaticKeyProvider::new(VaultKey::generate()),
            dir.path().join("missing").join("password.enc"),
        );

        assert!(matches!(vault.save(&secret("hunter2")), Err(VaultError::Io(_))));
    }

    #[test]
    fn test_invalid_key_file_on_save() {
        let (dir, vault) = file_vault();
        std::fs::write(dir.path().join("key.key"), "short").unwrap();

        assert!(matches!(
            vault.save(&secret("hunter2")),
            Err(VaultError::InvalidKey(_))
        ));
    }

    #[test]
    #[serial]
    fn test_paths_default() {
        remove_env(KEY_PATH_ENV);
        remove_env(DATA_PATH_ENV);

        let vault = PasswordVault::from_env();
        assert_eq!(vault.data_path(), Path::new(DEFAULT_DATA_PATH));
        assert_eq!(vault.key_provider().path(), Path::new(DEFAULT_KEY_PATH));
    }

    #[test]
    #[serial]
    fn test_paths_from_env() {
        let dir = tempdir().unwrap();
        let key_path = dir.path().join("custom.key");
        let data_path = dir.path().join("custom.enc");
        set_env(KEY_PATH_ENV, key_path.to_str().unwrap());
        set_env(DATA_PATH_ENV, data_path.to_str().unwrap());

        let vault = PasswordVault::from_env();
        vault.save(&secret("from-env")).unwrap();
        assert!(key_path.exists());
        assert!(data_path.exists());
        assert_eq!(vault.load().unwrap().expose_secret(), "from-env");

        remove_env(KEY_PATH_ENV);
        remove_env(DATA_PATH_ENV);
    }
}
