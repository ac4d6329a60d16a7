//! Password evaluation sections
//!
//! Each scoring section checks one composition rule and contributes one
//! point when it passes. The dictionary section only adds advice.

mod dictionary;
mod length;
mod variety;

pub use dictionary::{dictionary_core, dictionary_section};
pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

use crate::types::{CategoryCounts, Suggestion};

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - Rule failed, with the advice to show
/// - `None` - Rule passed
pub type SectionResult = Option<Suggestion>;

/// Trimmed password plus its precomputed category counts.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub password: &'a str,
    pub counts: CategoryCounts,
}

impl<'a> Candidate<'a> {
    pub fn new(password: &'a str) -> Self {
        Self {
            password,
            counts: CategoryCounts::from_password(password),
        }
    }
}
