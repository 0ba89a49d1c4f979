//! Category resolver: reading + brow signal → palette

use crate::core::signal::Reading;
use crate::types::{base_palette, compound_palette, Expression, PaletteRoute};
use crate::COMPOUND_SECONDARY_MIN;

/// Resolved palette for one cycle. The effective confidence is always
/// the primary probability, whichever palette was chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub palette: &'static [&'static str],
    pub route: PaletteRoute,
    pub confidence: f64,
}

/// Pick the glyph palette for this cycle.
///
/// Confused short-circuits everything. Otherwise a secondary above 0.35
/// with a registered blend picks the compound palette, else the
/// primary's base palette.
pub fn resolve(reading: &Reading, show_confused: bool) -> Resolution {
    let confidence = reading.primary.probability;

    if show_confused {
        return Resolution {
            palette: base_palette(Expression::Confused),
            route: PaletteRoute::Confused,
            confidence,
        };
    }

    if reading.secondary.probability > COMPOUND_SECONDARY_MIN {
        if let Some(palette) =
            compound_palette(reading.primary.category, reading.secondary.category)
        {
            return Resolution { palette, route: PaletteRoute::Compound, confidence };
        }
    }

    Resolution {
        palette: base_palette(reading.primary.category),
        route: PaletteRoute::Primary,
        confidence,
    }
}

// =============================================================================
// TESTS
// =============================================================================
