//! stream/direction.rs
//! Per-direction codec strategies behind the streaming pull loop.
//!
//! Compression and decompression share the chunking loop but complete on
//! genuinely different conditions: compression keys off the codec's
//! end-of-frame flush signal, decompression off input exhaustion. The two
//! stay separate named strategies; a single boolean would conflate them.

use zstd_safe::{CCtx, CompressionLevel, DCtx, InBuffer, OutBuffer, ResetDirective};

use crate::types::SessionError;

/// Tells the compress primitive whether more input chunks will follow.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    Continue,
    EndOfFrame,
}

/// Outcome of one primitive step inside a pull.
#[derive(Copy, Clone, Debug, Default)]
pub struct Step {
    pub consumed: usize,
    pub produced: usize,
    /// True once the codec reports the current frame fully flushed.
    pub flushed: bool,
}

/// Capability set a streaming session needs from its codec direction.
pub trait Direction {
    fn input_block_size(&self) -> usize;
    fn output_block_size(&self) -> usize;

    /// Discard any partial frame state before arming a new input.
    fn rewind(&mut self) -> Result<(), SessionError>;

    /// Drive the primitive once over `input`, writing into `output`.
    fn drive(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        directive: Directive,
    ) -> Result<Step, SessionError>;

    /// Whether the current input slice has been driven to its boundary.
    fn slice_done(&self, step: &Step, offset: usize, slice_len: usize, directive: Directive)
        -> bool;
}

/// Compressing direction. Owns one exclusive compression context.
pub struct CompressDirection {
    ctx: CCtx<'static>,
    level: CompressionLevel,
}

impl CompressDirection {
    pub fn new(level: CompressionLevel) -> Result<Self, SessionError> {
        let mut ctx = CCtx::try_create().ok_or(SessionError::ContextAlloc { kind: "compress" })?;
        ctx.init(level).map_err(SessionError::codec)?;
        Ok(Self { ctx, level })
    }
}

impl Direction for CompressDirection {
    fn input_block_size(&self) -> usize {
        CCtx::in_size()
    }

    fn output_block_size(&self) -> usize {
        CCtx::out_size()
    }

    fn rewind(&mut self) -> Result<(), SessionError> {
        self.ctx
            .reset(ResetDirective::SessionOnly)
            .map_err(SessionError::codec)?;
        self.ctx.init(self.level).map_err(SessionError::codec)?;
        Ok(())
    }

    fn drive(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        directive: Directive,
    ) -> Result<Step, SessionError> {
        let mut in_buf = InBuffer::around(input);
        let mut out_buf = OutBuffer::around(output);
        let mut flushed = false;

        if !input.is_empty() {
            self.ctx
                .compress_stream(&mut out_buf, &mut in_buf)
                .map_err(SessionError::codec)?;
        }
        // Once the final slice is fully absorbed, start (or resume) the
        // frame epilogue within the same step.
        if directive == Directive::EndOfFrame && in_buf.pos() == input.len() {
            let remaining = self
                .ctx
                .end_stream(&mut out_buf)
                .map_err(SessionError::codec)?;
            flushed = remaining == 0;
        }

        Ok(Step {
            consumed: in_buf.pos(),
            produced: out_buf.pos(),
            flushed,
        })
    }

    fn slice_done(
        &self,
        step: &Step,
        offset: usize,
        slice_len: usize,
        directive: Directive,
    ) -> bool {
        match directive {
            Directive::Continue => offset >= slice_len,
            // Keyed off the flush signal, not input position: the frame is
            // complete only when nothing remains to flush.
            Directive::EndOfFrame => step.flushed,
        }
    }
}

/// Decompressing direction. Owns one exclusive decompression context.
pub struct DecompressDirection {
    ctx: DCtx<'static>,
}

impl DecompressDirection {
    pub fn new() -> Result<Self, SessionError> {
        let mut ctx =
            DCtx::try_create().ok_or(SessionError::ContextAlloc { kind: "decompress" })?;
        ctx.init().map_err(SessionError::codec)?;
        Ok(Self { ctx })
    }
}

impl Direction for DecompressDirection {
    fn input_block_size(&self) -> usize {
        DCtx::in_size()
    }

    fn output_block_size(&self) -> usize {
        DCtx::out_size()
    }

    fn rewind(&mut self) -> Result<(), SessionError> {
        self.ctx
            .reset(ResetDirective::SessionOnly)
            .map_err(SessionError::codec)?;
        self.ctx.init().map_err(SessionError::codec)?;
        Ok(())
    }

    fn drive(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        _directive: Directive,
    ) -> Result<Step, SessionError> {
        let mut in_buf = InBuffer::around(input);
        let mut out_buf = OutBuffer::around(output);
        let hint = self
            .ctx
            .decompress_stream(&mut out_buf, &mut in_buf)
            .map_err(SessionError::codec)?;
        Ok(Step {
            consumed: in_buf.pos(),
            produced: out_buf.pos(),
            flushed: hint == 0,
        })
    }

    fn slice_done(
        &self,
        step: &Step,
        offset: usize,
        slice_len: usize,
        _directive: Directive,
    ) -> bool {
        // A filled output block may leave decoded bytes buffered inside the
        // context; keep draining until a step comes back under capacity.
        offset >= slice_len && step.produced < self.output_block_size()
    }
}
