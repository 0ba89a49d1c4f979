//! The closed expression category set

use serde::{Deserialize, Serialize};

/// The eight expression categories the classifier reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Happy,
    Sad,
    Angry,
    Surprised,
    Fearful,
    Disgusted,
    Neutral,
    Confused,
}

impl Expression {
    /// All categories in declaration order. Ranking tie-breaks follow
    /// this order, which keeps the normalizer deterministic.
    pub const ALL: [Expression; 8] = [
        Expression::Happy,
        Expression::Sad,
        Expression::Angry,
        Expression::Surprised,
        Expression::Fearful,
        Expression::Disgusted,
        Expression::Neutral,
        Expression::Confused,
    ];

    /// Lowercase name, matching the classifier's output keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Expression::Happy => "happy",
            Expression::Sad => "sad",
            Expression::Angry => "angry",
            Expression::Surprised => "surprised",
            Expression::Fearful => "fearful",
            Expression::Disgusted => "disgusted",
            Expression::Neutral => "neutral",
            Expression::Confused => "confused",
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
