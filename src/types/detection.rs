//! Detection records from the inference collaborator

use serde::{Deserialize, Serialize};

use crate::types::ExpressionVector;

/// A 2D landmark point in image coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Ordered eyebrow landmark sequences. Either side may be empty when
/// the landmark model produced nothing usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowPoints {
    pub left: Vec<Point>,
    pub right: Vec<Point>,
}

/// One frame's worth of inference output: the expression probability
/// vector, optional eyebrow landmarks, and an optional face box height
/// for scaling the brow asymmetry threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    pub expressions: ExpressionVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brows: Option<BrowPoints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face_height: Option<f64>,
}
