//! Size limits shared by the encoder and its callers.

/// Maximum number of characters in an atom name.
///
/// In Latin-1 one character is one byte, so this is also the byte limit for a
/// Latin-1 name.
pub const MAX_ATOM_CHARACTERS: usize = 255;

/// Largest UTF-8 encoding of a Latin-1 name of [`MAX_ATOM_CHARACTERS`]
/// characters. Every byte at or above 0x80 becomes two bytes.
pub const MAX_ATOM_SZ_FROM_LATIN1: usize = 2 * MAX_ATOM_CHARACTERS;

/// Absolute byte limit for a UTF-8 atom name: four bytes per character.
pub const MAX_ATOM_SZ_LIMIT: usize = 4 * MAX_ATOM_CHARACTERS;

const _: () = assert!(MAX_ATOM_SZ_FROM_LATIN1 == 2 * MAX_ATOM_CHARACTERS);
const _: () = assert!(MAX_ATOM_SZ_FROM_LATIN1 <= MAX_ATOM_SZ_LIMIT);
const _: () = assert!(MAX_ATOM_CHARACTERS <= u8::MAX as usize);
