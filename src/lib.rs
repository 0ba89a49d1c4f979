//! MoodMirror: maps per-frame facial expression probabilities to a stable emoji display
//!
//! Pipeline per detection cycle:
//! rank → neutral override → brow check → palette resolve → time cycle → update gate

pub mod core;
pub mod types;

// =============================================================================
// THRESHOLDS [C]
// =============================================================================

/// Minimum happy/sad probability to override a "neutral" primary reading
pub const NEUTRAL_OVERRIDE_MIN: f64 = 0.20;

/// Minimum secondary probability for a compound (blended) palette
pub const COMPOUND_SECONDARY_MIN: f64 = 0.35;

/// Brow asymmetry threshold as a fraction of face box height
pub const BROW_DELTA_RATIO: f64 = 0.07;

/// Face box height assumed when the detector gives none
pub const DEFAULT_FACE_HEIGHT: f64 = 200.0;

/// Confidence bar for a normal commit
pub const MIN_CONFIDENCE: f64 = 0.50;

/// Lowered confidence bar when the neutral override fired or a raised
/// brow forced the confused palette
pub const MIN_CONFIDENCE_BOOSTED: f64 = 0.20;

// =============================================================================
// TIMING [C]
// =============================================================================

/// Glyph rotation period within one palette (milliseconds)
pub const CYCLE_PERIOD_MS: u64 = 500;

/// How long a committed glyph suppresses re-commits of the same value
/// (milliseconds)
pub const HOLD_MS: u64 = 400;

/// Delay between decision cycles, measured from completion of the
/// previous cycle (milliseconds). Cadence is inference latency + this.
pub const DETECT_INTERVAL_MS: u64 = 100;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
