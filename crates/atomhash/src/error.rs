use thiserror::Error;

/// A violated precondition of one of the atom name primitives.
///
/// These indicate a bug or unchecked input at the call site; nothing is
/// written to the caller's buffers when one is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomError {
    /// The name has more characters than the atom limit allows.
    #[error("atom name has {len} characters, limit is {max}")]
    InvalidLength {
        /// Characters in the rejected name.
        len: usize,
        /// The limit in effect.
        max: usize,
    },
    /// The scratch buffer cannot hold the converted name.
    #[error("scratch buffer holds {capacity} bytes, conversion needs {required}")]
    BufferTooSmall {
        /// Length of the buffer supplied by the caller.
        capacity: usize,
        /// Bytes the conversion would write.
        required: usize,
    },
    /// A 7-bit name contains a byte at or above 0x80.
    #[error("byte at offset {position} is not 7-bit ASCII")]
    NotAscii {
        /// Offset of the first offending byte.
        position: usize,
    },
    /// A UTF-8 name does not decode.
    #[error("invalid UTF-8 after {valid_up_to} bytes")]
    InvalidUtf8 {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
    },
}
