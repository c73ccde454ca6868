//! Primitives for interning atom names in a runtime symbol table.
//!
//! Two independent routines live here:
//!
//! - [`latin1_to_utf8`] re-encodes a legacy Latin-1 atom name into UTF-8,
//!   leaving pure ASCII names untouched and uncopied.
//! - [`atom_hash`] computes the 32-bit hashpjw variant used to place a name in
//!   a bucketed atom table. It folds two-byte UTF-8 sequences for U+0080 to
//!   U+00FF back into their Latin-1 byte, so a name hashes the same whether it
//!   is stored as Latin-1 or as UTF-8.
//!
//! The usual flow normalizes a name first and hashes the result:
//!
//! ```rust
//! use atomhash::{Latin1Scratch, atom_hash, latin1_to_utf8};
//!
//! let mut scratch = Latin1Scratch::new();
//! let name = latin1_to_utf8(b"caf\xe9", &mut scratch).unwrap();
//! assert!(name.is_converted());
//! assert_eq!(name.as_bytes(), "café".as_bytes());
//! assert_eq!(atom_hash(name.as_bytes()), atom_hash(b"caf\xe9"));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod hash;
mod latin1;
mod limits;
mod normalize;
mod options;

pub mod targets;

#[cfg(test)]
mod tests;

pub use error::AtomError;
pub use hash::{AtomHasher, BuildAtomHasher, atom_hash};
pub use latin1::{
    Latin1Scratch, Latin1Utf8Bytes, Utf8Name, latin1_to_utf8, latin1_to_utf8_owned,
    latin1_utf8_bytes, latin1_utf8_len,
};
pub use limits::{MAX_ATOM_CHARACTERS, MAX_ATOM_SZ_FROM_LATIN1, MAX_ATOM_SZ_LIMIT};
pub use normalize::normalize;
pub use options::{AtomEncoding, AtomOptions};
