//! Dictionary management module
//!
//! Loads and queries the word list used for the dictionary-word check.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the bundled word list.
pub const DICTIONARY_PATH_ENV: &str = "PWD_DICTIONARY_PATH";

static BUNDLED_WORDS: &str = include_str!("../assets/words.txt");

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// Read-only set of lowercase natural-language words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

/// Returns the dictionary file path from `PWD_DICTIONARY_PATH`, if set.
pub fn get_dictionary_path() -> Option<PathBuf> {
    std::env::var_os(DICTIONARY_PATH_ENV).map(PathBuf::from)
}

fn parse_words(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}

impl Dictionary {
    /// The word list compiled into the crate.
    pub fn bundled() -> Self {
        Self {
            words: parse_words(BUNDLED_WORDS),
        }
    }

    /// Builds a dictionary from arbitrary words (lower-cased on insert).
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Loads a dictionary from a file with one word per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no words
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: FileNotFound {:?}", path);
            return Err(DictionaryError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let words = parse_words(&content);

        if words.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Dictionary load FAILED: Empty file {:?}", path);
            return Err(DictionaryError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Dictionary loaded: {} words from {:?}", words.len(), path);

        Ok(Self { words })
    }

    /// Loads the file named by `PWD_DICTIONARY_PATH`, or the bundled list
    /// when the variable is unset.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// unsafe { std::env::set_var("PWD_DICTIONARY_PATH", "/usr/share/dict/words"); }
    /// let dictionary = pwd_strength_vault::Dictionary::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, DictionaryError> {
        match get_dictionary_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::bundled()),
        }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
