//! Log targets used by this crate.

/// Latin-1 to UTF-8 conversion.
pub const LATIN1: &str = "atomhash::latin1";
/// Name validation in [`normalize`](crate::normalize).
pub const NORMALIZE: &str = "atomhash::normalize";
