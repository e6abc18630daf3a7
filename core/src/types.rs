//! types.rs
//! Unified session error covering codec, dictionary, and lifecycle failures.
//!
//! - Failures are surfaced to the caller immediately; nothing here retries.
//! - Messages aim to be stable and contextual for telemetry and logs.

use std::fmt;

use zstd_safe::get_error_name;

#[derive(Debug)]
pub enum SessionError {
    /// The codec primitive reported a failure code (malformed input,
    /// corrupted frame, destination too small).
    Codec { code: usize },

    /// Dictionary artifact compilation failed.
    DictionaryBuild { sample_len: usize },

    /// Working-context allocation failed (resource exhaustion).
    ContextAlloc { kind: &'static str },

    /// `pull` was called before `arm`.
    NotArmed,

    /// Dictionary-based decompression produced a byte count different from
    /// the declared destination size.
    SizeMismatch { expected: usize, actual: usize },
}

impl SessionError {
    pub(crate) fn codec(code: usize) -> Self {
        SessionError::Codec { code }
    }

    /// Raw codec result code, when this error carries one.
    pub fn raw_code(&self) -> Option<usize> {
        match self {
            SessionError::Codec { code } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SessionError::*;
        match self {
            Codec { code } =>
                write!(f, "codec failure: {}", get_error_name(*code)),
            DictionaryBuild { sample_len } =>
                write!(f, "dictionary build failed from {} sample bytes", sample_len),
            ContextAlloc { kind } =>
                write!(f, "{} context allocation failed", kind),
            NotArmed =>
                write!(f, "session not armed: call arm() before pull()"),
            SizeMismatch { expected, actual } =>
                write!(f, "size mismatch: expected={}, actual={}", expected, actual),
        }
    }
}

impl std::error::Error for SessionError {}
