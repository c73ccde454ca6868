//! Latin-1 to UTF-8 re-encoding of atom names.
//!
//! Latin-1 maps each byte onto the code point of the same value, so the
//! conversion is a per-byte rewrite: bytes below 0x80 are copied, bytes at or
//! above 0x80 become a two-byte UTF-8 sequence. Names that are pure ASCII are
//! already valid UTF-8 and are handed back without touching the scratch
//! buffer.
//!
//! The result is a [`Utf8Name`], which records whether the caller's scratch
//! buffer was used.
use alloc::borrow::Cow;
use core::{
    fmt,
    iter::FusedIterator,
    ops::{Deref, DerefMut},
};

use bstr::{BStr, ByteSlice};

use crate::{
    error::AtomError,
    hash::atom_hash,
    limits::{MAX_ATOM_CHARACTERS, MAX_ATOM_SZ_FROM_LATIN1},
    targets,
};

/// An atom name in its final UTF-8 encoding.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Utf8Name<'a> {
    /// The input needed no conversion; this is the caller's own slice.
    Unchanged(&'a [u8]),
    /// The input was re-encoded into the caller's scratch buffer.
    Converted(&'a [u8]),
}

impl<'a> Utf8Name<'a> {
    /// The UTF-8 bytes of the name.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            Self::Unchanged(bytes) | Self::Converted(bytes) => bytes,
        }
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the name is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Whether the bytes live in the scratch buffer rather than the input.
    #[must_use]
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }

    /// Number of characters (Unicode scalar values) in the name.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.as_bytes().chars().count()
    }

    /// The atom table hash of the name, see [`atom_hash`].
    #[must_use]
    pub fn hash(&self) -> u32 {
        atom_hash(self.as_bytes())
    }
}

impl fmt::Debug for Utf8Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = if self.is_converted() {
            "Converted"
        } else {
            "Unchanged"
        };
        f.debug_tuple(variant)
            .field(&BStr::new(self.as_bytes()))
            .finish()
    }
}

impl fmt::Display for Utf8Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(BStr::new(self.as_bytes()), f)
    }
}

impl AsRef<[u8]> for Utf8Name<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// A stack buffer large enough to convert any name of at most
/// [`MAX_ATOM_CHARACTERS`] Latin-1 characters.
#[derive(Clone)]
pub struct Latin1Scratch([u8; MAX_ATOM_SZ_FROM_LATIN1]);

impl Latin1Scratch {
    /// Creates a zeroed scratch buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self([0; MAX_ATOM_SZ_FROM_LATIN1])
    }
}

impl Default for Latin1Scratch {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Latin1Scratch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Latin1Scratch")
            .field("capacity", &self.0.len())
            .finish()
    }
}

impl Deref for Latin1Scratch {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl DerefMut for Latin1Scratch {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

/// Length in bytes of the UTF-8 encoding of the Latin-1 name `src`.
///
/// One byte per character below 0x80 and two for the rest. No limit is
/// applied; this only measures.
#[must_use]
pub fn latin1_utf8_len(src: &[u8]) -> usize {
    src.len() + src.iter().filter(|&&chr| chr & 0x80 != 0).count()
}

/// Lazily yields the UTF-8 encoding of a Latin-1 name, one byte at a time.
///
/// Created by [`latin1_utf8_bytes`].
#[derive(Debug, Clone)]
pub struct Latin1Utf8Bytes<'a> {
    rest: &'a [u8],
    /// Continuation byte of the character whose lead was just yielded.
    pending: Option<u8>,
    remaining: usize,
}

impl Iterator for Latin1Utf8Bytes<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let byte = match self.pending.take() {
            Some(cont) => cont,
            None => {
                let (&chr, rest) = self.rest.split_first()?;
                self.rest = rest;
                if chr & 0x80 == 0 {
                    chr
                } else {
                    self.pending = Some(0x80 | (chr & 0x3F));
                    0xC0 | (chr >> 6)
                }
            }
        };
        self.remaining -= 1;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Latin1Utf8Bytes<'_> {}

impl FusedIterator for Latin1Utf8Bytes<'_> {}

/// Converts a Latin-1 name to UTF-8 without a buffer.
///
/// The iterator yields the same bytes [`latin1_to_utf8`] would write, and its
/// `len()` is [`latin1_utf8_len`] of the input. Unlike [`latin1_to_utf8`] it
/// applies no length limit.
///
/// ```rust
/// use atomhash::latin1_utf8_bytes;
///
/// let bytes = latin1_utf8_bytes(b"caf\xe9");
/// assert_eq!(bytes.len(), 5);
/// assert!(bytes.eq("café".bytes()));
/// ```
#[must_use]
pub fn latin1_utf8_bytes(src: &[u8]) -> Latin1Utf8Bytes<'_> {
    Latin1Utf8Bytes {
        rest: src,
        pending: None,
        remaining: latin1_utf8_len(src),
    }
}

/// Re-encodes a Latin-1 atom name as UTF-8.
///
/// Returns [`Utf8Name::Unchanged`] with `src` itself when every byte is below
/// 0x80. Otherwise the converted name is written to the front of `scratch`
/// and returned as [`Utf8Name::Converted`]. The converted length is between
/// `src.len()` and `2 * src.len()`.
///
/// # Errors
///
/// - [`AtomError::InvalidLength`] if `src` is longer than
///   [`MAX_ATOM_CHARACTERS`].
/// - [`AtomError::BufferTooSmall`] if conversion is needed and `scratch` is
///   shorter than the converted name. A [`Latin1Scratch`] is always large
///   enough.
pub fn latin1_to_utf8<'a>(
    src: &'a [u8],
    scratch: &'a mut [u8],
) -> Result<Utf8Name<'a>, AtomError> {
    if src.len() > MAX_ATOM_CHARACTERS {
        log::debug!(target: targets::LATIN1, "rejecting {} byte Latin-1 name", src.len());
        return Err(AtomError::InvalidLength {
            len: src.len(),
            max: MAX_ATOM_CHARACTERS,
        });
    }

    let Some(first) = src.iter().position(|&chr| chr & 0x80 != 0) else {
        return Ok(Utf8Name::Unchanged(src));
    };

    let required = latin1_utf8_len(src);
    if scratch.len() < required {
        log::debug!(
            target: targets::LATIN1,
            "scratch of {} bytes too small for {required} byte conversion",
            scratch.len()
        );
        return Err(AtomError::BufferTooSmall {
            capacity: scratch.len(),
            required,
        });
    }

    log::trace!(
        target: targets::LATIN1,
        "converting {:?}, first non-ASCII byte at {first}",
        BStr::new(src)
    );

    scratch[..first].copy_from_slice(&src[..first]);
    let mut dst = first;
    for &chr in &src[first..] {
        if chr & 0x80 == 0 {
            scratch[dst] = chr;
            dst += 1;
        } else {
            scratch[dst] = 0xC0 | (chr >> 6);
            scratch[dst + 1] = 0x80 | (chr & 0x3F);
            dst += 2;
        }
    }
    debug_assert_eq!(dst, required);

    let converted: &'a [u8] = scratch;
    Ok(Utf8Name::Converted(&converted[..dst]))
}

/// Like [`latin1_to_utf8`], but allocates the converted name.
///
/// ASCII names are borrowed; only names that needed conversion allocate.
///
/// # Errors
///
/// [`AtomError::InvalidLength`] if `src` is longer than
/// [`MAX_ATOM_CHARACTERS`].
pub fn latin1_to_utf8_owned(src: &[u8]) -> Result<Cow<'_, [u8]>, AtomError> {
    let mut scratch = Latin1Scratch::new();
    Ok(match latin1_to_utf8(src, &mut scratch)? {
        Utf8Name::Unchanged(_) => Cow::Borrowed(src),
        Utf8Name::Converted(bytes) => Cow::Owned(bytes.to_vec()),
    })
}
