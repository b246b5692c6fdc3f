use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InteropError>;

/// Everything that can go wrong when moving shared records in and out of GPU-visible memory.
/// The layouts themselves cannot fail, only the checked helpers around them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InteropError {
  #[error("{value} is not a valid {set} slot")]
  UnknownSlot { set: &'static str, value: u32 },

  #[error("'{record}' needs exactly {expected} bytes, got {actual}")]
  SizeMismatch {
    record: &'static str,
    expected: usize,
    actual: usize,
  },

  #[error("Mapped buffer has {actual} bytes, uniform ring needs {required}")]
  BufferTooSmall { required: usize, actual: usize },

  #[error("Alignment {0} is not a power of two")]
  BadAlignment(usize),

  #[error("Uniform ring needs at least one frame in flight")]
  NoFramesInFlight,

  #[error("Uniform ring of {frames_in_flight} frames with {stride} byte stride does not fit in memory")]
  RingTooLarge {
    frames_in_flight: usize,
    stride: usize,
  },

  #[error("Dynamic offset {0} does not fit in 32 bits")]
  OffsetOutOfRange(usize),

  #[error("Binding {binding} is used more than once in the same descriptor set")]
  BindingCollision { binding: u32 },

  #[error("Failed to write shader header: {0}")]
  Format(#[from] fmt::Error),
}
