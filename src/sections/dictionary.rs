//! Dictionary section - flags passwords built on a plain dictionary word.

use super::{Candidate, SectionResult};
use crate::dictionary::Dictionary;
use crate::types::Suggestion;

/// Strips everything but ASCII letters and lower-cases the rest.
pub fn dictionary_core(password: &str) -> String {
    password
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Checks whether the letter core of the password is a dictionary word.
///
/// Advisory only: the evaluator never deducts score for a match.
///
/// # Returns
/// - `Some(Suggestion::DictionaryWord)` if the core is a known word
/// - `None` if the core is empty or unknown
pub fn dictionary_section(candidate: &Candidate<'_>, dictionary: &Dictionary) -> SectionResult {
    let core = dictionary_core(candidate.password);
    if !core.is_empty() && dictionary.contains(&core) {
        return Some(Suggestion::DictionaryWord);
    }
    None
}
