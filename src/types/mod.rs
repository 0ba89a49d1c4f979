//! Core types for MoodMirror

mod detection;
mod display;
mod expression;
mod output;
pub mod palette;
mod vector;

pub use detection::{BrowPoints, Detection, Point};
pub use display::DisplayState;
pub use expression::Expression;
pub use output::{CycleOutput, GateVerdict, PaletteRoute};
pub use palette::{base_palette, compound_palette, INITIAL_GLYPH};
pub use vector::ExpressionVector;
