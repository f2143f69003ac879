use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// This crate's error kind.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum ErrorKind {
    /// Output did not fit in a fixed-capacity buffer.
    Capacity {
        /// Number of bytes already written when a character was refused.
        len: usize,
        /// Capacity of the buffer.
        cap: usize,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ErrorKind::*;
        match self {
            Capacity { len, cap } => write!(
                f,
                "Output overflowed a buffer of {} bytes after {} bytes were written.",
                cap, len
            ),
        }
    }
}
