//! Mirror engine: one detection in, at most one display update out
//!
//! Runs the whole decision chain synchronously:
//! rank → neutral override → brow check → palette resolve → time cycle
//! → update gate. Holds the only mutable state in the crate, the
//! DisplayState, and is the single writer of it.

use chrono::Utc;

use crate::core::brows::detect_confused;
use crate::core::cycler::pick_glyph;
use crate::core::gate::gate_update;
use crate::core::resolver::resolve;
use crate::core::signal::read_vector;
use crate::types::{CycleOutput, Detection, DisplayState};

/// The decision engine, owning the display state across cycles
#[derive(Debug, Default)]
pub struct MirrorEngine {
    display: DisplayState,
    cycle_count: u64,
}

impl MirrorEngine {
    /// New engine showing the neutral glyph
    pub fn new() -> Self {
        Self { display: DisplayState::new(), cycle_count: 0 }
    }

    /// Run one decision cycle. `now_ms` is monotonic wall-clock
    /// milliseconds supplied by the caller; the engine keeps no clock
    /// of its own. A no-face frame never reaches this method: the
    /// scheduler skips the cycle and the display state stays as is.
    pub fn cycle(&mut self, detection: &Detection, now_ms: u64) -> CycleOutput {
        self.cycle_count += 1;

        let reading = read_vector(&detection.expressions);
        let show_confused =
            detect_confused(detection.brows.as_ref(), detection.face_height);
        let resolution = resolve(&reading, show_confused);
        let candidate = pick_glyph(resolution.palette, now_ms);

        let verdict = gate_update(
            &mut self.display,
            candidate,
            resolution.confidence,
            reading.overrode_from_neutral,
            show_confused,
            now_ms,
        );

        CycleOutput {
            timestamp: Utc::now(),
            primary: reading.primary.category,
            confidence: resolution.confidence,
            secondary: reading.secondary.category,
            secondary_confidence: reading.secondary.probability,
            overrode_from_neutral: reading.overrode_from_neutral,
            show_confused,
            route: resolution.route,
            glyph: candidate.to_string(),
            verdict,
        }
    }

    /// Glyph currently on the sink
    pub fn current_glyph(&self) -> &'static str {
        self.display.current_glyph
    }

    /// Display state snapshot
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Number of decision cycles run
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Reset to the initial neutral display
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

// =============================================================================
// TESTS
// =============================================================================
