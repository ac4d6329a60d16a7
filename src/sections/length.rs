//! Length section - checks password minimum length.

use super::{Candidate, SectionResult};
use crate::types::{Suggestion, MIN_LENGTH};

/// Checks if the password meets the minimum length.
///
/// Length is measured in Unicode scalar values, not bytes.
///
/// # Returns
/// - `Some(Suggestion::Length)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(candidate: &Candidate<'_>) -> SectionResult {
    if candidate.password.chars().count() < MIN_LENGTH {
        return Some(Suggestion::Length);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let result = length_section(&Candidate::new("Short1!"));
        assert_eq!(result, Some(Suggestion::Length));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let result = length_section(&Candidate::new("12345678"));
        assert_eq!(result, None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 4 chars, 8+ bytes
        let result = length_section(&Candidate::new("éééé"));
        assert_eq!(result, Some(Suggestion::Length));

        let result = length_section(&Candidate::new("éééééééé"));
        assert_eq!(result, None);
    }
}
