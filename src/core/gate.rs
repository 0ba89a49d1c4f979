//! Update gate: confidence bar plus hold window
//!
//! A glyph change that clears the confidence bar commits immediately.
//! The hold window only suppresses re-commits of the same glyph value,
//! which would refresh the timer without changing the display.

use crate::types::{DisplayState, GateVerdict};
use crate::{HOLD_MS, MIN_CONFIDENCE, MIN_CONFIDENCE_BOOSTED};

/// Decide whether `candidate` reaches the sink this cycle. On a commit
/// the state records the glyph and pushes the hold window forward;
/// `hold_until_ms` never moves backward.
pub fn gate_update(
    state: &mut DisplayState,
    candidate: &'static str,
    confidence: f64,
    overrode_from_neutral: bool,
    show_confused: bool,
    now_ms: u64,
) -> GateVerdict {
    let min_confidence = if overrode_from_neutral || show_confused {
        MIN_CONFIDENCE_BOOSTED
    } else {
        MIN_CONFIDENCE
    };

    if confidence <= min_confidence {
        return GateVerdict::LowConfidence;
    }
    if candidate == state.current_glyph && now_ms <= state.hold_until_ms {
        return GateVerdict::Held;
    }

    state.current_glyph = candidate;
    state.hold_until_ms = now_ms + HOLD_MS;
    GateVerdict::Committed
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_low_confidence_drops_cycle() {
        let mut state = DisplayState::new();
        let verdict = gate_update(&mut state, "😄", 0.4, false, false, 1000);
        assert_eq!(verdict, GateVerdict::LowConfidence);
        assert_eq!(state.current_glyph, "😐");
        assert_eq!(state.hold_until_ms, 0);
    }

    #[test]
    fn test_confidence_exactly_at_bar_is_dropped() {
        let mut state = DisplayState::new();
        assert_eq!(
            gate_update(&mut state, "😄", 0.5, false, false, 0),
            GateVerdict::LowConfidence
        );
        assert_eq!(
            gate_update(&mut state, "😄", 0.2, true, false, 0),
            GateVerdict::LowConfidence
        );
    }

    #[test]
    fn test_boosted_bar_applies_on_override_or_confused() {
        let mut state = DisplayState::new();
        assert_eq!(
            gate_update(&mut state, "😄", 0.25, true, false, 0),
            GateVerdict::Committed
        );
        let mut state = DisplayState::new();
        assert_eq!(
            gate_update(&mut state, "🤔", 0.25, false, true, 0),
            GateVerdict::Committed
        );
        // same confidence without either flag stays below the 0.50 bar
        let mut state = DisplayState::new();
        assert_eq!(
            gate_update(&mut state, "😄", 0.25, false, false, 0),
            GateVerdict::LowConfidence
        );
    }

    #[test]
    fn test_commit_records_glyph_and_hold() {
        let mut state = DisplayState::new();
        let verdict = gate_update(&mut state, "😄", 0.8, false, false, 1000);
        assert_eq!(verdict, GateVerdict::Committed);
        assert_eq!(state.current_glyph, "😄");
        assert_eq!(state.hold_until_ms, 1000 + crate::HOLD_MS);
    }

    #[test]
    fn test_same_glyph_held_inside_window() {
        let mut state = DisplayState::new();
        gate_update(&mut state, "😄", 0.8, false, false, 1000);

        // 1300 <= 1400: re-commit of the same glyph suppressed
        let verdict = gate_update(&mut state, "😄", 0.9, false, false, 1300);
        assert_eq!(verdict, GateVerdict::Held);
        assert_eq!(state.hold_until_ms, 1400);
    }

    #[test]
    fn test_same_glyph_recommits_after_window() {
        let mut state = DisplayState::new();
        gate_update(&mut state, "😄", 0.8, false, false, 1000);

        let verdict = gate_update(&mut state, "😄", 0.8, false, false, 1401);
        assert_eq!(verdict, GateVerdict::Committed);
        assert_eq!(state.hold_until_ms, 1801);
    }

    #[test]
    fn test_hold_boundary_is_exclusive() {
        let mut state = DisplayState::new();
        gate_update(&mut state, "😄", 0.8, false, false, 1000);
        // now == hold_until: still held
        assert_eq!(
            gate_update(&mut state, "😄", 0.8, false, false, 1400),
            GateVerdict::Held
        );
    }

    #[test]
    fn test_different_glyph_commits_inside_window() {
        let mut state = DisplayState::new();
        gate_update(&mut state, "😄", 0.8, false, false, 1000);

        let verdict = gate_update(&mut state, "😢", 0.8, false, false, 1100);
        assert_eq!(verdict, GateVerdict::Committed);
        assert_eq!(state.current_glyph, "😢");
        assert_eq!(state.hold_until_ms, 1500);
    }

    #[test]
    fn test_hold_never_moves_backward() {
        let mut state = DisplayState::new();
        gate_update(&mut state, "😄", 0.8, false, false, 1000);
        gate_update(&mut state, "😢", 0.8, false, false, 2000);
        assert_eq!(state.hold_until_ms, 2400);
        // dropped cycles leave the hold untouched
        gate_update(&mut state, "😄", 0.1, false, false, 3000);
        assert_eq!(state.hold_until_ms, 2400);
    }
}
