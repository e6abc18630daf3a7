//! stream/session.rs
//! Incremental sessions over caller-supplied input regions.
//!
//! Single-threaded cooperative pull model: the caller arms an input and
//! repeatedly pulls bounded chunks until `complete`. Nothing suspends and
//! nothing blocks; abandoning a session or re-arming simply discards
//! unfinished progress.

use bytes::Bytes;

use crate::constants::DEFAULT_LEVEL;
use crate::stream::direction::{CompressDirection, DecompressDirection, Direction, Directive};
use crate::telemetry::{SessionCounters, SessionSnapshot};
use crate::types::SessionError;

/// One chunk pulled from a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulledChunk {
    pub chunk: Vec<u8>,
    pub complete: bool,
    pub consumed: usize,
    pub produced: usize,
}

impl PulledChunk {
    fn drained() -> Self {
        PulledChunk {
            chunk: Vec::new(),
            complete: true,
            consumed: 0,
            produced: 0,
        }
    }
}

/// Streaming session owning one exclusive working context.
///
/// The context is reset (not recreated) on every `arm`, so a session can
/// process any number of logical messages without reallocation.
pub struct Session<D: Direction> {
    dir: D,
    input: Option<Bytes>,
    cursor: usize,
    complete: bool,
    block: Vec<u8>,
    counters: SessionCounters,
}

pub type CompressStream = Session<CompressDirection>;
pub type DecompressStream = Session<DecompressDirection>;

impl<D: Direction> Session<D> {
    fn new(dir: D) -> Self {
        let block = vec![0u8; dir.output_block_size()];
        Self {
            dir,
            input: None,
            cursor: 0,
            complete: false,
            block,
            counters: SessionCounters::default(),
        }
    }

    /// Bind a new input region and reset progress.
    ///
    /// May be called at any time, including before a prior armed input
    /// reached completion; the prior input's progress is abandoned.
    pub fn arm(&mut self, input: impl Into<Bytes>) -> Result<(), SessionError> {
        self.dir.rewind()?;
        self.input = Some(input.into());
        self.cursor = 0;
        self.complete = false;
        Ok(())
    }

    /// Produce the next bounded chunk.
    ///
    /// Consumes at most one input block from the armed region, driving the
    /// codec through as many output-block refills as that slice requires.
    /// Once the region is exhausted (or was empty to begin with) every call
    /// returns an empty chunk with `complete == true`.
    ///
    /// A codec failure discards the partially accumulated chunk and leaves
    /// the session unusable until re-armed.
    pub fn pull(&mut self) -> Result<PulledChunk, SessionError> {
        let input = self.input.clone().ok_or(SessionError::NotArmed)?;

        if self.cursor >= input.len() {
            self.complete = true;
            return Ok(PulledChunk::drained());
        }

        let slice_len = self.dir.input_block_size().min(input.len() - self.cursor);
        let end = self.cursor + slice_len;
        let directive = if end == input.len() {
            Directive::EndOfFrame
        } else {
            Directive::Continue
        };
        let slice = &input[self.cursor..end];

        let mut offset = 0;
        let mut chunk = Vec::new();
        loop {
            let step = self.dir.drive(&slice[offset..], &mut self.block, directive)?;
            offset += step.consumed;
            chunk.extend_from_slice(&self.block[..step.produced]);
            if step.flushed {
                self.counters.add_frame();
            }
            if self.dir.slice_done(&step, offset, slice_len, directive) {
                break;
            }
        }

        self.cursor = end;
        self.complete = self.cursor >= input.len();
        let produced = chunk.len();
        self.counters.record(offset, produced);
        Ok(PulledChunk {
            chunk,
            complete: self.complete,
            consumed: offset,
            produced,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_counters(&self.counters)
    }

    /// Explicit release point; dropping the session is equivalent. The
    /// working context is freed exactly once.
    pub fn release(self) {}
}

impl CompressStream {
    /// Compressing session at the default level.
    pub fn create() -> Result<Self, SessionError> {
        Self::with_level(DEFAULT_LEVEL)
    }

    pub fn with_level(level: i32) -> Result<Self, SessionError> {
        Ok(Session::new(CompressDirection::new(level)?))
    }
}

impl DecompressStream {
    /// Decompressing session.
    pub fn create() -> Result<Self, SessionError> {
        Ok(Session::new(DecompressDirection::new()?))
    }
}
