//! Per-frame expression probability vector

use serde::{Deserialize, Serialize};

use crate::types::Expression;

/// Probabilities for each category in [0, 1], as delivered by the
/// inference collaborator once per frame. Not required to sum to 1;
/// categories the collaborator omits read as 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionVector {
    pub happy: f64,
    pub sad: f64,
    pub angry: f64,
    pub surprised: f64,
    pub fearful: f64,
    pub disgusted: f64,
    pub neutral: f64,
    pub confused: f64,
}

impl ExpressionVector {
    /// Probability for one category
    pub fn get(&self, expr: Expression) -> f64 {
        match expr {
            Expression::Happy => self.happy,
            Expression::Sad => self.sad,
            Expression::Angry => self.angry,
            Expression::Surprised => self.surprised,
            Expression::Fearful => self.fearful,
            Expression::Disgusted => self.disgusted,
            Expression::Neutral => self.neutral,
            Expression::Confused => self.confused,
        }
    }

    /// All (category, probability) entries in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (Expression, f64)> + '_ {
        Expression::ALL.iter().map(|&e| (e, self.get(e)))
    }
}
