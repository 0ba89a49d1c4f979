//! Display state carried between cycles

use crate::types::palette::INITIAL_GLYPH;

/// What the sink currently shows and until when re-commits of that same
/// glyph are suppressed. Single writer: only the update gate mutates
/// this, once per cycle at most.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Glyph last committed to the sink
    pub current_glyph: &'static str,
    /// End of the hold window (monotonic milliseconds); only ever
    /// pushed forward
    pub hold_until_ms: u64,
}

impl DisplayState {
    /// Fresh state showing the neutral glyph, no hold in effect
    pub fn new() -> Self {
        Self {
            current_glyph: INITIAL_GLYPH,
            hold_until_ms: 0,
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
