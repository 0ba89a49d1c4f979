//! Core decision modules for MoodMirror

pub mod brows;
pub mod cycler;
pub mod engine;
pub mod gate;
pub mod replay;
pub mod resolver;
pub mod runner;
pub mod signal;

pub use brows::detect_confused;
pub use cycler::{cycle_index, pick_glyph};
pub use engine::MirrorEngine;
pub use gate::gate_update;
pub use replay::{parse_frame_line, ReplaySource};
pub use resolver::{resolve, Resolution};
pub use runner::{run_mirror, Clock, DisplaySink, ExpressionSource, Frame, ManualClock, SystemClock};
pub use signal::{apply_neutral_override, rank, read_vector, Reading, Scored};
