//! Per-cycle decision output

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::types::Expression;

/// Which palette the resolver picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaletteRoute {
    /// Raised-brow override, probabilities ignored
    Confused,
    /// Two strong categories, blended glyph set
    Compound,
    /// Plain primary-category palette
    Primary,
}

impl std::fmt::Display for PaletteRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PaletteRoute::Confused => "CONFUSED",
            PaletteRoute::Compound => "COMPOUND",
            PaletteRoute::Primary => "PRIMARY",
        };
        write!(f, "{}", name)
    }
}

/// What the update gate did with the candidate glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateVerdict {
    /// Candidate committed to the sink
    Committed,
    /// Confidence at or below the bar, cycle dropped
    LowConfidence,
    /// Same glyph inside its hold window, commit suppressed
    Held,
}

impl GateVerdict {
    /// Code string for logging
    pub fn code(&self) -> &'static str {
        match self {
            GateVerdict::Committed => "COMMITTED",
            GateVerdict::LowConfidence => "LOW_CONFIDENCE",
            GateVerdict::Held => "HELD",
        }
    }
}

impl std::fmt::Display for GateVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Full record of one decision cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleOutput {
    /// Wall-clock timestamp of the decision
    pub timestamp: DateTime<Utc>,
    /// Primary category after any neutral override
    pub primary: Expression,
    /// Primary probability (this is the effective confidence)
    pub confidence: f64,
    /// Runner-up category
    pub secondary: Expression,
    /// Runner-up probability
    pub secondary_confidence: f64,
    /// Did the neutral override replace the primary?
    pub overrode_from_neutral: bool,
    /// Did brow asymmetry force the confused palette?
    pub show_confused: bool,
    /// Which palette was selected
    pub route: PaletteRoute,
    /// Glyph the cycler picked from that palette
    pub glyph: String,
    /// Gate decision for this cycle
    pub verdict: GateVerdict,
}

impl CycleOutput {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let verdict = match self.verdict {
            GateVerdict::Committed => self.verdict.code().green(),
            GateVerdict::LowConfidence => self.verdict.code().red(),
            GateVerdict::Held => self.verdict.code().yellow(),
        };
        format!(
            "{} {}={:.3} | second {}={:.3} | route={} | {}",
            self.glyph,
            self.primary.to_string().bold(),
            self.confidence,
            self.secondary,
            self.secondary_confidence,
            self.route,
            verdict,
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "glyph={} | primary={} | confidence={:.3} | secondary={} | route={} | verdict={}",
            self.glyph, self.primary, self.confidence, self.secondary, self.route, self.verdict,
        )
    }
}
