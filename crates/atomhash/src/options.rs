use crate::limits::MAX_ATOM_CHARACTERS;

/// How the bytes of an incoming atom name are to be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtomEncoding {
    /// Plain 7-bit ASCII. Any byte at or above 0x80 is an error.
    SevenBitAscii,
    /// One byte per character, code points U+0000 to U+00FF.
    #[default]
    Latin1,
    /// Already UTF-8; validated but never rewritten.
    Utf8,
}

/// Configuration for [`normalize`](crate::normalize).
///
/// # Default
///
/// Latin-1 input with the full [`MAX_ATOM_CHARACTERS`] limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AtomOptions {
    /// Encoding of the incoming name.
    ///
    /// # Default
    ///
    /// [`AtomEncoding::Latin1`]
    pub encoding: AtomEncoding,

    /// Maximum number of characters accepted.
    ///
    /// Values above [`MAX_ATOM_CHARACTERS`] are treated as
    /// [`MAX_ATOM_CHARACTERS`]: the conversion buffers are sized for that
    /// limit and cannot be widened per call.
    ///
    /// # Default
    ///
    /// [`MAX_ATOM_CHARACTERS`]
    pub max_characters: usize,
}

impl AtomOptions {
    /// The character limit actually enforced.
    #[must_use]
    pub fn effective_max_characters(&self) -> usize {
        self.max_characters.min(MAX_ATOM_CHARACTERS)
    }
}

impl Default for AtomOptions {
    fn default() -> Self {
        Self {
            encoding: AtomEncoding::default(),
            max_characters: MAX_ATOM_CHARACTERS,
        }
    }
}
