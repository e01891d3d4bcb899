//! Lexical signal detection over requirement text

use crate::models::{Signal, SignalKind};

/// Vague terms with no measurable meaning, in reporting order
const AMBIGUOUS_TERMS: &[&str] = &[
    "user-friendly",
    "fast",
    "efficient",
    "good",
    "bad",
    "easy",
    "simple",
    "reasonable",
    "appropriate",
];

/// Modal verbs that leave a requirement non-binding
const WEAK_MODALS: &[&str] = &["should", "may", "might", "could", "would"];

/// Unit words that count as a measurable criterion
const UNIT_WORDS: &[&str] = &["second", "minute", "percent", "%"];

/// Passive construction markers, space-delimited so they only match whole words
const PASSIVE_MARKERS: &[&str] = &[" be ", " been ", " being "];

/// Texts at or below this length are too short to demand a measurable criterion
const MEASURABLE_CHECK_MIN_LEN: usize = 20;

/// Scan requirement text for quality signals.
///
/// All four checks run on every call and none short-circuits another.
/// Output order is fixed: ambiguous terms, weak modals, missing measurable
/// criterion, passive voice. Within a category, matches are joined in
/// vocabulary order rather than text order.
pub fn detect(text: &str) -> Vec<Signal> {
    let lower = text.to_lowercase();
    let mut signals = Vec::new();

    let ambiguous = matches_in(&lower, AMBIGUOUS_TERMS);
    if !ambiguous.is_empty() {
        signals.push(Signal::new(SignalKind::AmbiguousTerm, ambiguous.join(", ")));
    }

    let modals = matches_in(&lower, WEAK_MODALS);
    if !modals.is_empty() {
        signals.push(Signal::new(SignalKind::WeakModal, modals.join(", ")));
    }

    if lacks_measurable_criterion(&lower, text.chars().count()) {
        signals.push(Signal::new(SignalKind::MissingMeasurableCriterion, ""));
    }

    let passive = matches_in(&lower, PASSIVE_MARKERS);
    if !passive.is_empty() {
        let markers: Vec<&str> = passive.iter().map(|m| m.trim()).collect();
        signals.push(Signal::new(SignalKind::PassiveVoice, markers.join(", ")));
    }

    signals
}

/// Members of `vocabulary` appearing as substrings of `lower`, in vocabulary order
fn matches_in<'a>(lower: &str, vocabulary: &[&'a str]) -> Vec<&'a str> {
    vocabulary
        .iter()
        .copied()
        .filter(|term| lower.contains(term))
        .collect()
}

fn lacks_measurable_criterion(lower: &str, char_count: usize) -> bool {
    char_count > MEASURABLE_CHECK_MIN_LEN
        && !lower.chars().any(|c| c.is_ascii_digit())
        && !UNIT_WORDS.iter().any(|unit| lower.contains(unit))
}
