//! Evaluation result types.

use std::fmt;

use thiserror::Error;

/// Minimum number of characters for the length rule to pass.
pub const MIN_LENGTH: usize = 8;

/// Highest score a password can reach (one point per rule).
pub const MAX_SCORE: u8 = 5;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Please enter a password")]
    EmptyInput,
}

/// Character category. Every character belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl Category {
    /// Classifies a single character.
    ///
    /// Only ASCII letters and digits get their own category; accented
    /// letters, emoji and combining marks are all `Special`.
    pub fn of(c: char) -> Self {
        if c.is_ascii_uppercase() {
            Category::Uppercase
        } else if c.is_ascii_lowercase() {
            Category::Lowercase
        } else if c.is_ascii_digit() {
            Category::Digit
        } else {
            Category::Special
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Uppercase => "Uppercase",
            Category::Lowercase => "Lowercase",
            Category::Digit => "Digit",
            Category::Special => "Special",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-category character counts of a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub uppercase: usize,
    pub lowercase: usize,
    pub digit: usize,
    pub special: usize,
}

impl CategoryCounts {
    /// Counts characters per category, one per Unicode scalar value.
    pub fn from_password(password: &str) -> Self {
        let mut counts = Self::default();
        for c in password.chars() {
            match Category::of(c) {
                Category::Uppercase => counts.uppercase += 1,
                Category::Lowercase => counts.lowercase += 1,
                Category::Digit => counts.digit += 1,
                Category::Special => counts.special += 1,
            }
        }
        counts
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Uppercase => self.uppercase,
            Category::Lowercase => self.lowercase,
            Category::Digit => self.digit,
            Category::Special => self.special,
        }
    }

    /// Counts in chart order: uppercase, lowercase, digit, special.
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        [
            Category::Uppercase,
            Category::Lowercase,
            Category::Digit,
            Category::Special,
        ]
        .into_iter()
        .map(move |c| (c, self.get(c)))
    }

    pub fn total(&self) -> usize {
        self.uppercase + self.lowercase + self.digit + self.special
    }
}

/// Number of satisfied composition rules, `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    /// Creates a score, saturating at [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Progress-bar value: 20 points per satisfied rule.
    pub fn percent(&self) -> u8 {
        self.0 * 20
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            4.. => StrengthLabel::Strong,
            3 => StrengthLabel::Moderate,
            _ => StrengthLabel::Weak,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
        };
        f.write_str(s)
    }
}

/// Advice emitted for a failed rule or a dictionary match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
    DictionaryWord,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::Length => write!(f, "Make it at least {} characters.", MIN_LENGTH),
            Suggestion::Uppercase => f.write_str("Add uppercase letters."),
            Suggestion::Lowercase => f.write_str("Add lowercase letters."),
            Suggestion::Digit => f.write_str("Add digits."),
            Suggestion::Special => f.write_str("Add special symbols (!@#$ etc.)."),
            Suggestion::DictionaryWord => f.write_str("Avoid using simple dictionary words."),
        }
    }
}

/// Outcome of a single evaluation. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    counts: CategoryCounts,
    score: Score,
    label: StrengthLabel,
    suggestions: Vec<Suggestion>,
    is_dictionary_word: bool,
}

impl EvaluationResult {
    pub(crate) fn new(
        counts: CategoryCounts,
        score: Score,
        suggestions: Vec<Suggestion>,
        is_dictionary_word: bool,
    ) -> Self {
        Self {
            counts,
            score,
            label: StrengthLabel::from_score(score),
            suggestions,
            is_dictionary_word,
        }
    }

    pub fn counts(&self) -> &CategoryCounts {
        &self.counts
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn label(&self) -> StrengthLabel {
        self.label
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Suggestions rendered as display strings, in order.
    pub fn messages(&self) -> Vec<String> {
        self.suggestions.iter().map(ToString::to_string).collect()
    }

    pub fn is_dictionary_word(&self) -> bool {
        self.is_dictionary_word
    }
}
