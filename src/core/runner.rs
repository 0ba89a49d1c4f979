//! Detect loop scheduler
//!
//! One cooperative task: await the inference collaborator, run the
//! synchronous decision cycle, push at most one glyph to the sink, then
//! sleep a fixed interval before the next round. Cadence is therefore
//! inference latency + the interval, not a strict wall-clock timer.
//! There is deliberately no timeout: a source that never resolves
//! stalls the loop, matching the collaborator contract.

use std::io;
use std::time::{Duration, Instant};

use crate::core::engine::MirrorEngine;
use crate::types::{CycleOutput, Detection, GateVerdict, INITIAL_GLYPH};
use crate::DETECT_INTERVAL_MS;

/// One frame from the inference collaborator
#[derive(Debug, Clone)]
pub enum Frame {
    /// A face was found, with its expression readout
    Face(Detection),
    /// No face this frame; the cycle is a no-op
    NoFace,
}

/// Inference collaborator seam. `None` means the source is exhausted
/// and the loop should end (live sources never return it).
pub trait ExpressionSource {
    fn next_frame(&mut self) -> impl std::future::Future<Output = io::Result<Option<Frame>>> + Send;
}

/// Display sink seam: a single "set displayed symbol" operation
pub trait DisplaySink {
    fn set_glyph(&mut self, glyph: &'static str);
}

/// Clock seam so tests can drive `now` precisely
pub trait Clock {
    /// Monotonic milliseconds
    fn now_ms(&self) -> u64;
}

/// Monotonic clock counting from its creation
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for deterministic tests and replays
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: std::cell::Cell<u64>,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self { now_ms: std::cell::Cell::new(now_ms) }
    }

    pub fn set(&self, now_ms: u64) {
        self.now_ms.set(now_ms);
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }
}

/// Run the detect loop until the source is exhausted.
///
/// Shows the initial neutral glyph, then for every frame with a face
/// runs one engine cycle, forwarding committed glyphs to the sink and
/// every cycle record to `on_cycle`. Source errors propagate untouched.
pub async fn run_mirror<S, K, C, F>(
    source: &mut S,
    sink: &mut K,
    clock: &C,
    engine: &mut MirrorEngine,
    mut on_cycle: F,
) -> io::Result<()>
where
    S: ExpressionSource,
    K: DisplaySink,
    C: Clock,
    F: FnMut(&CycleOutput),
{
    sink.set_glyph(INITIAL_GLYPH);

    loop {
        let Some(frame) = source.next_frame().await? else {
            break;
        };

        if let Frame::Face(detection) = frame {
            let now_ms = clock.now_ms();
            let output = engine.cycle(&detection, now_ms);
            if output.verdict == GateVerdict::Committed {
                sink.set_glyph(engine.current_glyph());
            }
            on_cycle(&output);
        }

        tokio::time::sleep(Duration::from_millis(DETECT_INTERVAL_MS)).await;
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
