//! JSONL replay source
//!
//! One JSON detection record per line; a literal `null` is a frame
//! where no face was found. Blank lines are skipped. This stands in
//! for the live inference collaborator during replays and tests.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::core::runner::{ExpressionSource, Frame};
use crate::types::Detection;

/// Reads frames from any buffered line source
#[derive(Debug)]
pub struct ReplaySource<R> {
    reader: R,
}

impl ReplaySource<BufReader<File>> {
    /// Open a JSONL recording on disk
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> ReplaySource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

/// Parse one replay line into a frame
pub fn parse_frame_line(line: &str) -> io::Result<Frame> {
    let record: Option<Detection> = serde_json::from_str(line)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(match record {
        Some(detection) => Frame::Face(detection),
        None => Frame::NoFace,
    })
}

impl<R: BufRead + Send> ExpressionSource for ReplaySource<R> {
    async fn next_frame(&mut self) -> io::Result<Option<Frame>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return parse_frame_line(trimmed).map(Some);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
