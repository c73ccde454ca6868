//! The atom table hash.
//!
//! This is hashpjw with one twist: a two-byte UTF-8 sequence whose lead byte
//! is 0xC2 or 0xC3 (code points U+0080 to U+00FF) is folded back into the
//! single Latin-1 byte it encodes before mixing. A name therefore hashes the
//! same in its Latin-1 and UTF-8 forms, which keeps bucket placement stable
//! for tables that hold atoms created under either encoding.
use core::hash::{BuildHasherDefault, Hasher};

/// Folds one logical unit into the accumulator.
#[inline]
const fn mix(h: u32, v: u8) -> u32 {
    let h = (h << 4).wrapping_add(v as u32);
    let g = h & 0xF000_0000;
    if g == 0 { h } else { h ^ (g >> 24) ^ g }
}

#[inline]
const fn is_latin1_lead(byte: u8) -> bool {
    byte & 0xFE == 0xC2
}

#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Recovers the Latin-1 byte from a `0xC2`/`0xC3` lead and its continuation.
/// Only the low eight bits of the shifted lead survive.
#[inline]
const fn fold(lead: u8, next: u8) -> u8 {
    (lead << 6) | (next & 0x3F)
}

/// Hashes an atom name.
///
/// `name` should already be in its final encoding. The empty name hashes to
/// zero. A trailing `0xC2`/`0xC3` byte with nothing after it is mixed on its
/// own.
///
/// ```rust
/// use atomhash::atom_hash;
///
/// const OK: u32 = atom_hash(b"ok");
/// assert_eq!(OK, 1883);
/// assert_eq!(atom_hash(&[0xC2, 0xA9]), atom_hash(&[0xA9]));
/// ```
#[must_use]
pub const fn atom_hash(name: &[u8]) -> u32 {
    let mut h = 0;
    let mut i = 0;
    while i < name.len() {
        let mut v = name[i];
        i += 1;
        if i < name.len() && is_latin1_lead(v) && is_continuation(name[i]) {
            v = fold(v, name[i]);
            i += 1;
        }
        h = mix(h, v);
    }
    h
}

/// Odd multiplier spreading the 28 significant bits of an atom hash across a
/// `u64` (2^64 divided by the golden ratio).
const SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// Streaming form of [`atom_hash`].
///
/// Bytes may be written in any number of pieces; [`AtomHasher::value`]
/// equals [`atom_hash`] over their concatenation, including when a folded
/// pair is split between two writes.
///
/// [`Hasher::finish`] does not return that value directly. hashpjw never sets
/// the top nibble of its 32 bits, and hash tables such as `HashMap` take
/// their control bits from the top of the 64-bit hash, so `finish` multiplies
/// the value by an odd constant. The mapping is a bijection: names with
/// distinct atom hashes keep distinct `finish` results.
///
/// `Hash` implementations for slices and strings write a length prefix or
/// terminator, so hashing a `&[u8]` through this hasher does not give the
/// same value as calling [`atom_hash`] on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtomHasher {
    h: u32,
    /// Lead byte waiting to see whether a continuation byte follows.
    pending: Option<u8>,
}

impl AtomHasher {
    /// Creates a hasher with an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self { h: 0, pending: None }
    }

    /// The hash of everything written so far.
    #[must_use]
    pub const fn value(&self) -> u32 {
        match self.pending {
            Some(lead) => mix(self.h, lead),
            None => self.h,
        }
    }
}

impl Hasher for AtomHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if let Some(lead) = self.pending.take() {
                if is_continuation(byte) {
                    self.h = mix(self.h, fold(lead, byte));
                    continue;
                }
                self.h = mix(self.h, lead);
            }
            if is_latin1_lead(byte) {
                self.pending = Some(byte);
            } else {
                self.h = mix(self.h, byte);
            }
        }
    }

    fn finish(&self) -> u64 {
        u64::from(self.value()).wrapping_mul(SPREAD)
    }
}

/// [`BuildHasher`](core::hash::BuildHasher) producing [`AtomHasher`]s.
pub type BuildAtomHasher = BuildHasherDefault<AtomHasher>;
