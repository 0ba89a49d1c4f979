//! Static glyph palettes: several emoji per category for variety

use crate::types::Expression;

/// Glyph candidates for a single category. Exhaustive over the closed
/// category set, every palette non-empty.
pub fn base_palette(expr: Expression) -> &'static [&'static str] {
    match expr {
        Expression::Happy => &["😄", "😊", "🙂", "🤗", "😁", "🥳"],
        Expression::Sad => &["😢", "😞", "😔", "🥺", "😭"],
        Expression::Angry => &["😠", "😤", "🤬", "😡", "👿"],
        Expression::Surprised => &["😲", "😮", "🤯", "😯", "😱"],
        Expression::Fearful => &["😨", "😰", "😱", "😳", "🥶", "😬"],
        Expression::Disgusted => &["🤢", "🤮", "😒", "🙄", "😑", "😤"],
        Expression::Neutral => &["😐"],
        Expression::Confused => &["🤔", "🧐", "🤨"],
    }
}

/// Blended glyphs for two simultaneously strong categories. Both
/// orderings of a pair map to the same list; pairs without a blend
/// return None and fall back to the primary's base palette.
pub fn compound_palette(
    primary: Expression,
    secondary: Expression,
) -> Option<&'static [&'static str]> {
    use Expression::*;
    match (primary, secondary) {
        (Happy, Surprised) | (Surprised, Happy) => Some(&["🤩", "😍", "🥳"]),
        (Sad, Fearful) | (Fearful, Sad) => Some(&["😰", "😥", "🥺"]),
        (Angry, Disgusted) | (Disgusted, Angry) => Some(&["😤", "🤬", "😒"]),
        (Sad, Angry) | (Angry, Sad) => Some(&["😤", "😣"]),
        (Fearful, Surprised) | (Surprised, Fearful) => Some(&["😱", "😳", "😨"]),
        (Happy, Fearful) | (Fearful, Happy) => Some(&["😅", "😰", "🙃"]),
        _ => None,
    }
}

/// The glyph shown before the first detection cycle
pub const INITIAL_GLYPH: &str = "😐";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_base_palette_non_empty() {
        for expr in Expression::ALL {
            assert!(!base_palette(expr).is_empty(), "{} palette empty", expr);
        }
    }

    #[test]
    fn test_compound_pairs_symmetric() {
        use Expression::*;
        let pairs = [
            (Happy, Surprised),
            (Sad, Fearful),
            (Angry, Disgusted),
            (Sad, Angry),
            (Fearful, Surprised),
            (Happy, Fearful),
        ];
        for (a, b) in pairs {
            assert_eq!(compound_palette(a, b), compound_palette(b, a));
            assert!(!compound_palette(a, b).unwrap().is_empty());
        }
    }

    #[test]
    fn test_unblended_pair_has_no_compound() {
        use Expression::*;
        assert!(compound_palette(Happy, Sad).is_none());
        assert!(compound_palette(Neutral, Happy).is_none());
        assert!(compound_palette(Happy, Happy).is_none());
    }

    #[test]
    fn test_initial_glyph_is_neutral() {
        assert_eq!(base_palette(Expression::Neutral), &[INITIAL_GLYPH]);
    }
}
