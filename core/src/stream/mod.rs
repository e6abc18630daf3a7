//! stream/mod.rs
//! Pull-based streaming sessions over bounded internal buffers.

pub mod direction;
pub mod session;

pub use direction::{CompressDirection, DecompressDirection, Direction, Directive, Step};
pub use session::{CompressStream, DecompressStream, PulledChunk, Session};
