//! Character variety sections - one rule per character category.

use super::{Candidate, SectionResult};
use crate::types::Suggestion;

pub fn uppercase_section(candidate: &Candidate<'_>) -> SectionResult {
    (candidate.counts.uppercase == 0).then_some(Suggestion::Uppercase)
}

pub fn lowercase_section(candidate: &Candidate<'_>) -> SectionResult {
    (candidate.counts.lowercase == 0).then_some(Suggestion::Lowercase)
}

pub fn digit_section(candidate: &Candidate<'_>) -> SectionResult {
    (candidate.counts.digit == 0).then_some(Suggestion::Digit)
}

/// Anything outside ASCII letters and digits counts as special,
/// including accented letters and emoji.
pub fn special_section(candidate: &Candidate<'_>) -> SectionResult {
    (candidate.counts.special == 0).then_some(Suggestion::Special)
}
