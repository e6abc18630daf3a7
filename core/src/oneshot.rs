//! oneshot.rs
//! Single-call compression and decompression without a session or dictionary.
//!
//! No state is retained between calls; every call stands alone.

use zstd_safe::CompressionLevel;
// Worst-case output size for a given input size; callers can use it to
// pre-size destination buffers.
pub use zstd_safe::compress_bound;

use crate::constants::ERROR_MAX_CODE;
use crate::types::SessionError;

/// Compress `input` in one call.
///
/// Capacity is the codec's worst-case bound for `input.len()`; the returned
/// buffer holds exactly the produced byte range.
pub fn compress(input: &[u8], level: CompressionLevel) -> Result<Vec<u8>, SessionError> {
    let mut dst = Vec::with_capacity(compress_bound(input.len()));
    zstd_safe::compress(&mut dst, input, level).map_err(SessionError::codec)?;
    Ok(dst)
}

/// Decompress `input` into a caller-provided destination of fixed capacity.
///
/// The caller is responsible for sizing `dst`; this call does not grow
/// buffers. A too-small destination fails with the codec's error code, it
/// never silently truncates. Returns the number of bytes written.
pub fn decompress_into(input: &[u8], dst: &mut [u8]) -> Result<usize, SessionError> {
    zstd_safe::decompress(dst, input).map_err(SessionError::codec)
}

/// Pure predicate over a raw primitive result code.
///
/// Success codes are byte counts; failure codes sit in the top
/// `ERROR_MAX_CODE` values of the usize range.
pub fn is_error(code: usize) -> bool {
    let distance = code.wrapping_neg();
    distance != 0 && distance < ERROR_MAX_CODE
}
