//! Frame sources for driving the engine.
//!
//! Live capture and landmark inference are external collaborators; this
//! module only defines the boundary they deliver across, plus a recorded
//! (JSON lines) source so sessions can be replayed and tested offline.

use crate::{landmarks::LandmarkFrame, Error, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// One delivery from the inference engine: a populated landmark set, or
/// "no detection" for that frame
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameRecord {
    pub landmarks: Option<LandmarkFrame>,
}

/// Anything that can deliver landmark frames in order
pub trait FrameSource {
    /// Next frame, or `None` when the stream is exhausted
    fn next_frame(&mut self) -> Result<Option<FrameRecord>>;
}

/// Replays a recorded landmark stream from a JSON-lines file.
///
/// Each line is one [`FrameRecord`]; blank lines are skipped.
pub struct RecordedSource {
    reader: BufReader<File>,
    line_number: usize,
}

impl RecordedSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            line_number: 0,
        })
    }
}

impl FrameSource for RecordedSource {
    fn next_frame(&mut self) -> Result<Option<FrameRecord>> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            if line.trim().is_empty() {
                continue;
            }
            let record = serde_json::from_str(&line)
                .map_err(|e| Error::FrameStream(format!("line {}: {}", self.line_number, e)))?;
            return Ok(Some(record));
        }
    }
}

/// In-memory source for tests and benchmarks
pub struct SyntheticSource {
    frames: std::vec::IntoIter<FrameRecord>,
}

impl SyntheticSource {
    #[must_use]
    pub fn new(frames: Vec<FrameRecord>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl FrameSource for SyntheticSource {
    fn next_frame(&mut self) -> Result<Option<FrameRecord>> {
        Ok(self.frames.next())
    }
}
