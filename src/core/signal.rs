//! Signal normalizer and neutral override
//!
//! The classifier is biased toward calling weak-signal faces "neutral".
//! A modest but clear happy/sad probability (≥ 0.20) beats a
//! barely-above-the-rest neutral reading.

use crate::types::{Expression, ExpressionVector};
use crate::NEUTRAL_OVERRIDE_MIN;

/// One ranked (category, probability) entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub category: Expression,
    pub probability: f64,
}

impl Scored {
    pub fn new(category: Expression, probability: f64) -> Self {
        Self { category, probability }
    }
}

/// Primary/secondary reading for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub primary: Scored,
    pub secondary: Scored,
    /// True when the neutral override replaced the primary
    pub overrode_from_neutral: bool,
}

/// Extract the two highest-probability categories. Descending by
/// probability; exact ties resolve to the earlier category in
/// declaration order, so repeated calls on the same vector always
/// return the same pair.
pub fn rank(vector: &ExpressionVector) -> (Scored, Scored) {
    let mut best = Scored::new(Expression::Happy, f64::NEG_INFINITY);
    let mut second = Scored::new(Expression::Happy, f64::NEG_INFINITY);

    for (category, probability) in vector.entries() {
        let entry = Scored::new(category, probability);
        if probability > best.probability {
            second = best;
            best = entry;
        } else if probability > second.probability {
            second = entry;
        }
    }

    (best, second)
}

/// Apply the neutral override rule to a ranked pair.
///
/// Fires only when the primary is "neutral": happy wins when its
/// probability clears 0.20 and is at least the sad probability, else
/// sad wins when it clears 0.20. On a fire, the secondary becomes the
/// strongest category that is neither neutral nor the new primary.
pub fn apply_neutral_override(
    vector: &ExpressionVector,
    primary: Scored,
    secondary: Scored,
) -> Reading {
    if primary.category != Expression::Neutral {
        return Reading { primary, secondary, overrode_from_neutral: false };
    }

    let happy = vector.get(Expression::Happy);
    let sad = vector.get(Expression::Sad);

    let replacement = if happy >= NEUTRAL_OVERRIDE_MIN && happy >= sad {
        Some(Scored::new(Expression::Happy, happy))
    } else if sad >= NEUTRAL_OVERRIDE_MIN {
        Some(Scored::new(Expression::Sad, sad))
    } else {
        None
    };

    match replacement {
        Some(new_primary) => Reading {
            primary: new_primary,
            secondary: recompute_secondary(vector, new_primary.category),
            overrode_from_neutral: true,
        },
        None => Reading { primary, secondary, overrode_from_neutral: false },
    }
}

/// Strongest category excluding neutral and the new primary. The
/// category set is closed, so a candidate always exists; the (neutral,
/// 0) fallback is kept for the degenerate case anyway.
fn recompute_secondary(vector: &ExpressionVector, new_primary: Expression) -> Scored {
    vector
        .entries()
        .filter(|(c, _)| *c != Expression::Neutral && *c != new_primary)
        .fold(None::<Scored>, |acc, (category, probability)| match acc {
            Some(best) if best.probability >= probability => Some(best),
            _ => Some(Scored::new(category, probability)),
        })
        .unwrap_or(Scored::new(Expression::Neutral, 0.0))
}

/// Rank and apply the neutral override in one step
pub fn read_vector(vector: &ExpressionVector) -> Reading {
    let (primary, secondary) = rank(vector);
    apply_neutral_override(vector, primary, secondary)
}

// =============================================================================
// TESTS
// =============================================================================
