//! dictionary.rs
//! Precompiled dictionary resources for repeated small-payload operations.
//!
//! A resource owns one compiled dictionary artifact plus one exclusive
//! working context. The pair lives until the resource is released and is
//! freed together, exactly once. Neither is ever shared between resources.

use zstd_safe::{compress_bound, CCtx, CDict, CompressionLevel, DCtx, DDict};

use crate::telemetry::{SessionCounters, SessionSnapshot};
use crate::types::SessionError;

/// Compression-side dictionary resource.
pub struct CompressDictionary {
    cdict: CDict<'static>,
    ctx: CCtx<'static>,
    counters: SessionCounters,
}

impl CompressDictionary {
    /// Compile `sample` into a compression dictionary at `level` and
    /// allocate its working context.
    ///
    /// Partial construction cannot leak: if context allocation fails the
    /// already-compiled artifact drops before the error propagates.
    pub fn load(sample: &[u8], level: CompressionLevel) -> Result<Self, SessionError> {
        let cdict = CDict::try_create(sample, level)
            .ok_or(SessionError::DictionaryBuild { sample_len: sample.len() })?;
        let ctx = CCtx::try_create().ok_or(SessionError::ContextAlloc { kind: "compress" })?;
        Ok(Self {
            cdict,
            ctx,
            counters: SessionCounters::default(),
        })
    }

    /// Single-call compression against the loaded dictionary.
    ///
    /// Safe to call repeatedly; the codec resets the working context per
    /// call, so each call's output is independent.
    pub fn compress(&mut self, input: &[u8]) -> Result<Vec<u8>, SessionError> {
        let mut dst = Vec::with_capacity(compress_bound(input.len()));
        self.ctx
            .compress_using_cdict(&mut dst, input, &self.cdict)
            .map_err(SessionError::codec)?;
        self.counters.record(input.len(), dst.len());
        Ok(dst)
    }

    pub fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_counters(&self.counters)
    }

    /// Explicit release point; dropping the resource is equivalent. The
    /// artifact and context are freed together, exactly once.
    pub fn release(self) {}
}

/// Decompression-side dictionary resource.
pub struct DecompressDictionary {
    ddict: DDict<'static>,
    ctx: DCtx<'static>,
    counters: SessionCounters,
}

impl DecompressDictionary {
    /// Compile `sample` into a decompression dictionary and allocate its
    /// working context. Level is a compression-side concept and does not
    /// apply here. Same no-leak guarantee as [`CompressDictionary::load`].
    pub fn load(sample: &[u8]) -> Result<Self, SessionError> {
        let ddict = DDict::try_create(sample)
            .ok_or(SessionError::DictionaryBuild { sample_len: sample.len() })?;
        let ctx = DCtx::try_create().ok_or(SessionError::ContextAlloc { kind: "decompress" })?;
        Ok(Self {
            ddict,
            ctx,
            counters: SessionCounters::default(),
        })
    }

    /// Single-call decompression against the loaded dictionary.
    ///
    /// Exact-fill contract: callers using a known-size destination expect
    /// the payload to decompress to exactly `dst.len()` bytes; any other
    /// byte count fails with `SizeMismatch`.
    pub fn decompress(&mut self, input: &[u8], dst: &mut [u8]) -> Result<usize, SessionError> {
        let written = self
            .ctx
            .decompress_using_ddict(dst, input, &self.ddict)
            .map_err(SessionError::codec)?;
        if written != dst.len() {
            return Err(SessionError::SizeMismatch {
                expected: dst.len(),
                actual: written,
            });
        }
        self.counters.record(input.len(), written);
        Ok(written)
    }

    pub fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_counters(&self.counters)
    }

    /// Explicit release point; dropping the resource is equivalent.
    pub fn release(self) {}
}

/// Train a dictionary blob from representative samples.
///
/// The returned bytes feed [`CompressDictionary::load`] and
/// [`DecompressDictionary::load`]; matching compress/decompress pairs must
/// be built from the same blob.
pub fn train_from_samples<S: AsRef<[u8]>>(
    samples: &[S],
    max_size: usize,
) -> Result<Vec<u8>, SessionError> {
    let sample_len = samples.iter().map(|s| s.as_ref().len()).sum();
    zstd::dict::from_samples(samples, max_size)
        .map_err(|_| SessionError::DictionaryBuild { sample_len })
}
