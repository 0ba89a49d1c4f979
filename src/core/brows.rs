//! Brow asymmetry detector
//!
//! One eyebrow raised relative to the other signals "confused", a state
//! the classifier's fixed category set does not model. Computed from
//! raw landmark geometry; when it fires it outranks the probabilities.

use crate::types::BrowPoints;
use crate::{BROW_DELTA_RATIO, DEFAULT_FACE_HEIGHT};

/// True when the mean vertical positions of the two eyebrows differ by
/// more than 7% of the face box height. Missing landmarks on either
/// side mean no signal, never an error.
pub fn detect_confused(brows: Option<&BrowPoints>, face_height: Option<f64>) -> bool {
    let Some(brows) = brows else {
        return false;
    };
    if brows.left.is_empty() || brows.right.is_empty() {
        return false;
    }

    let left_avg_y = mean_y(&brows.left);
    let right_avg_y = mean_y(&brows.right);
    let threshold = face_height.unwrap_or(DEFAULT_FACE_HEIGHT) * BROW_DELTA_RATIO;

    (left_avg_y - right_avg_y).abs() > threshold
}

fn mean_y(points: &[crate::types::Point]) -> f64 {
    points.iter().map(|p| p.y).sum::<f64>() / points.len() as f64
}

// =============================================================================
// TESTS
// =============================================================================
