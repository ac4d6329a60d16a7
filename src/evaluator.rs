//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::dictionary::Dictionary;
use crate::sections::{
    Candidate, SectionResult, dictionary_section, digit_section, length_section,
    lowercase_section, special_section, uppercase_section,
};
use crate::types::{EvaluationError, EvaluationResult, Score};

type Section = fn(&Candidate<'_>) -> SectionResult;

/// Scoring rules, in the order their suggestions are reported.
const SCORING_SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("uppercase", uppercase_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
];

/// Characters stripped from both ends before evaluation: Unicode
/// whitespace plus the ASCII information separators U+001C..=U+001F.
fn is_trimmed(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Stateless evaluator bound to a dictionary.
#[derive(Debug, Clone, Default)]
pub struct StrengthEvaluator {
    dictionary: Dictionary,
}

impl StrengthEvaluator {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Evaluates a password. See [`evaluate_password_strength`].
    pub fn evaluate(&self, password: &SecretString) -> Result<EvaluationResult, EvaluationError> {
        evaluate_password_strength(password, &self.dictionary)
    }
}

/// Evaluates password strength against the composition rules.
///
/// # Arguments
/// * `password` - The password to evaluate; surrounding whitespace is ignored
/// * `dictionary` - Words flagged by the dictionary check
///
/// # Returns
/// An `EvaluationResult` with counts, score, label and suggestions,
/// or `EvaluationError::EmptyInput` when nothing is left after trimming.
pub fn evaluate_password_strength(
    password: &SecretString,
    dictionary: &Dictionary,
) -> Result<EvaluationResult, EvaluationError> {
    let pwd = password.expose_secret().trim_matches(is_trimmed);
    if pwd.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("password evaluation skipped: empty input");
        return Err(EvaluationError::EmptyInput);
    }

    let candidate = Candidate::new(pwd);
    let mut suggestions = Vec::new();
    let mut score = 0u8;

    // Orchestrator: every rule runs, independent of the others
    for (_section_name, section_fn) in SCORING_SECTIONS {
        match section_fn(&candidate) {
            Some(suggestion) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("rule failed: {}", _section_name);
                suggestions.push(suggestion);
            }
            None => score += 1,
        }
    }

    let is_dictionary_word = match dictionary_section(&candidate, dictionary) {
        Some(suggestion) => {
            suggestions.push(suggestion);
            true
        }
        None => false,
    };

    let result = EvaluationResult::new(
        candidate.counts,
        Score::new(score),
        suggestions,
        is_dictionary_word,
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: score {} ({}), dictionary word: {}",
        result.score(),
        result.label(),
        is_dictionary_word
    );

    Ok(result)
}

/// Async helper for interactive callers: waits out a short debounce, then
/// evaluates and sends the outcome, unless `token` was cancelled meanwhile.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    evaluator: &StrengthEvaluator,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<EvaluationResult, EvaluationError>>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation superseded, nothing sent");
        return;
    }

    let evaluation = evaluator.evaluate(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
