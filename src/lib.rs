//! Password strength evaluation and single-slot password vault
//!
//! This library scores a password against five composition rules, flags
//! passwords built on a dictionary word, and can keep one password
//! encrypted on disk.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced channel-based evaluation helper
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom word list (default: bundled list)
//! - `PWD_VAULT_KEY_PATH`: Vault key file (default: `./key.key`)
//! - `PWD_VAULT_DATA_PATH`: Encrypted password file (default: `./password.enc`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_strength_vault::{Dictionary, PasswordVault, StrengthEvaluator};
//! use secrecy::SecretString;
//!
//! // Load the dictionary once at startup
//! let evaluator = StrengthEvaluator::new(Dictionary::from_env().expect("Failed to load dictionary"));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! match evaluator.evaluate(&password) {
//!     Ok(evaluation) => {
//!         println!("Score: {}", evaluation.score());
//!         println!("Strength: {}", evaluation.label());
//!         for advice in evaluation.messages() {
//!             println!("- {}", advice);
//!         }
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//!
//! let vault = PasswordVault::from_env();
//! vault.save(&password).expect("Failed to save password");
//! let _restored = vault.load().expect("Failed to load password");
//! ```

// Internal modules
mod dictionary;
mod evaluator;
mod sections;
mod types;
mod vault;

// Public API
pub use dictionary::{DICTIONARY_PATH_ENV, Dictionary, DictionaryError, get_dictionary_path};
pub use evaluator::{StrengthEvaluator, evaluate_password_strength};
pub use sections::dictionary_core;
pub use types::{
    Category, CategoryCounts, EvaluationError, EvaluationResult, MAX_SCORE, MIN_LENGTH, Score,
    StrengthLabel, Suggestion,
};
pub use vault::{
    DATA_PATH_ENV, DEFAULT_DATA_PATH, DEFAULT_KEY_PATH, FileKeyProvider, KEY_PATH_ENV, KEY_SIZE,
    KeyProvider, PasswordVault, StaticKeyProvider, VaultError, VaultKey, VaultResult,
    get_data_path, get_key_path,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
