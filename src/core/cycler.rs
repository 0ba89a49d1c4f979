//! Temporal cycler
//!
//! While one logical category is held across many frames, the display
//! still rotates through that category's variants every 500ms of
//! wall-clock time, independent of the detection frame rate.

use crate::CYCLE_PERIOD_MS;

/// Pure function of (now, palette length): index rotates one step per
/// cycle period.
pub fn cycle_index(now_ms: u64, palette_len: usize) -> usize {
    ((now_ms / CYCLE_PERIOD_MS) % palette_len as u64) as usize
}

/// The glyph to show at `now_ms`. Palettes are statically non-empty.
pub fn pick_glyph(palette: &'static [&'static str], now_ms: u64) -> &'static str {
    palette[cycle_index(now_ms, palette.len())]
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_deterministic() {
        for now in [0, 137, 499, 500, 12_345, 1_000_000] {
            assert_eq!(cycle_index(now, 3), cycle_index(now, 3));
        }
    }

    #[test]
    fn test_index_steps_at_period_boundaries() {
        assert_eq!(cycle_index(0, 3), 0);
        assert_eq!(cycle_index(499, 3), 0);
        assert_eq!(cycle_index(500, 3), 1);
        assert_eq!(cycle_index(999, 3), 1);
        assert_eq!(cycle_index(1000, 3), 2);
        assert_eq!(cycle_index(1500, 3), 0);
    }

    #[test]
    fn test_full_span_visits_every_index_once() {
        for len in 1..=6usize {
            let mut seen = vec![0u32; len];
            // one sample per period across a full len * period span
            for step in 0..len {
                let now = step as u64 * CYCLE_PERIOD_MS;
                seen[cycle_index(now, len)] += 1;
            }
            assert!(seen.iter().all(|&c| c == 1), "len {}: {:?}", len, seen);
        }
    }

    #[test]
    fn test_single_glyph_palette_never_moves() {
        static PALETTE: [&str; 1] = ["😐"];
        for now in (0..10_000).step_by(250) {
            assert_eq!(pick_glyph(&PALETTE, now), "😐");
        }
    }

    #[test]
    fn test_pick_glyph_follows_index() {
        static PALETTE: [&str; 3] = ["🤩", "😍", "🥳"];
        assert_eq!(pick_glyph(&PALETTE, 0), "🤩");
        assert_eq!(pick_glyph(&PALETTE, 600), "😍");
        assert_eq!(pick_glyph(&PALETTE, 1100), "🥳");
    }
}
