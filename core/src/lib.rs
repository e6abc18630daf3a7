//! zstream-core
//!
//! Streaming, dictionary-aware zstd session management.
//! Operates purely on in-memory byte buffers. No I/O, no host bindings.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Operation surfaces
pub mod dictionary;
pub mod oneshot;
pub mod stream;

pub mod telemetry;

pub use dictionary::{train_from_samples, CompressDictionary, DecompressDictionary};
pub use oneshot::{compress, decompress_into, is_error};
pub use stream::{CompressStream, DecompressStream, PulledChunk};
pub use types::SessionError;
