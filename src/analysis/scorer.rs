//! Quality scoring from detected signals

use crate::models::{Signal, SignalKind};

/// Score every text starts from before penalties apply
pub const BASE_SCORE: i32 = 75;

/// Lower bound on any quality score
pub const MIN_SCORE: i32 = 20;

/// Upper bound on any quality score
pub const MAX_SCORE: i32 = 100;

/// Deduction order and amounts, one entry per signal category
const PENALTIES: &[(SignalKind, i32)] = &[
    (SignalKind::AmbiguousTerm, 15),
    (SignalKind::WeakModal, 10),
    (SignalKind::MissingMeasurableCriterion, 20),
    (SignalKind::PassiveVoice, 5),
];

/// Convert detected signals into a bounded quality score.
///
/// Each category deducts at most once regardless of how many terms matched
/// within it. The floor at [`MIN_SCORE`] is a defensive bound: the current
/// penalty set bottoms out at 25.
pub fn score(signals: &[Signal]) -> i32 {
    let mut value = BASE_SCORE;

    for (kind, penalty) in PENALTIES {
        if signals.iter().any(|s| s.kind == *kind) {
            value -= penalty;
        }
    }

    value.clamp(MIN_SCORE, MAX_SCORE)
}
