//! Validation and normalization of incoming atom names.
//!
//! A name reaches the atom table as 7-bit ASCII, Latin-1 or UTF-8. Whatever
//! the source encoding, the table stores UTF-8, so [`normalize`] checks the
//! name against the configured limits and converts Latin-1 where needed.
use bstr::{BStr, ByteSlice};

use crate::{
    error::AtomError,
    latin1::{Utf8Name, latin1_to_utf8},
    limits::MAX_ATOM_SZ_LIMIT,
    options::{AtomEncoding, AtomOptions},
    targets,
};

/// Validates `name` and brings it into UTF-8.
///
/// ASCII and UTF-8 names are never rewritten and come back as
/// [`Utf8Name::Unchanged`]. Latin-1 names follow
/// [`latin1_to_utf8`](crate::latin1_to_utf8) and may use `scratch`.
///
/// # Errors
///
/// - [`AtomError::InvalidLength`] when the name has more characters than
///   [`AtomOptions::effective_max_characters`].
/// - [`AtomError::NotAscii`] for a 7-bit name containing a byte at or above
///   0x80.
/// - [`AtomError::InvalidUtf8`] for a UTF-8 name that does not decode.
/// - [`AtomError::BufferTooSmall`] when a Latin-1 name needs more room than
///   `scratch` has.
pub fn normalize<'a>(
    name: &'a [u8],
    options: &AtomOptions,
    scratch: &'a mut [u8],
) -> Result<Utf8Name<'a>, AtomError> {
    let max = options.effective_max_characters();
    match options.encoding {
        AtomEncoding::SevenBitAscii => {
            if let Some(position) = name.iter().position(|&byte| !byte.is_ascii()) {
                log::debug!(
                    target: targets::NORMALIZE,
                    "{:?} is not 7-bit, byte {position}",
                    BStr::new(name)
                );
                return Err(AtomError::NotAscii { position });
            }
            check_length(name.len(), max)?;
            Ok(Utf8Name::Unchanged(name))
        }
        AtomEncoding::Latin1 => {
            check_length(name.len(), max)?;
            latin1_to_utf8(name, scratch)
        }
        AtomEncoding::Utf8 => {
            if let Err(err) = name.to_str() {
                log::debug!(
                    target: targets::NORMALIZE,
                    "{:?} is not UTF-8: {err}",
                    BStr::new(name)
                );
                return Err(AtomError::InvalidUtf8 {
                    valid_up_to: err.valid_up_to(),
                });
            }
            check_length(name.chars().count(), max)?;
            debug_assert!(name.len() <= MAX_ATOM_SZ_LIMIT);
            Ok(Utf8Name::Unchanged(name))
        }
    }
}

fn check_length(len: usize, max: usize) -> Result<(), AtomError> {
    if len > max {
        log::debug!(target: targets::NORMALIZE, "{len} characters exceeds limit of {max}");
        return Err(AtomError::InvalidLength { len, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec};

    use rstest::rstest;

    use super::*;
    use crate::{Latin1Scratch, limits::MAX_ATOM_CHARACTERS};

    fn options(encoding: AtomEncoding) -> AtomOptions {
        AtomOptions {
            encoding,
            ..AtomOptions::default()
        }
    }

    #[rstest]
    #[case::ascii(AtomEncoding::SevenBitAscii)]
    #[case::latin1(AtomEncoding::Latin1)]
    #[case::utf8(AtomEncoding::Utf8)]
    fn ascii_names_pass_through_every_encoding(#[case] encoding: AtomEncoding) {
        let mut scratch = Latin1Scratch::new();
        let name = normalize(b"ok", &options(encoding), &mut scratch).unwrap();
        assert_eq!(name, Utf8Name::Unchanged(b"ok"));
    }

    #[test]
    fn seven_bit_rejects_high_byte() {
        let mut scratch = Latin1Scratch::new();
        assert_eq!(
            normalize(b"ab\xe9", &options(AtomEncoding::SevenBitAscii), &mut scratch),
            Err(AtomError::NotAscii { position: 2 })
        );
    }

    #[test]
    fn latin1_is_converted() {
        let mut scratch = Latin1Scratch::new();
        let name = normalize(b"caf\xe9", &AtomOptions::default(), &mut scratch).unwrap();
        assert_eq!(name, Utf8Name::Converted("café".as_bytes()));
    }

    #[test]
    fn utf8_is_validated_not_rewritten() {
        let mut scratch = Latin1Scratch::new();
        let src = "café".as_bytes();
        let name = normalize(src, &options(AtomEncoding::Utf8), &mut scratch).unwrap();
        assert_eq!(name, Utf8Name::Unchanged(src));
        assert_eq!(name.char_count(), 4);

        assert_eq!(
            normalize(b"caf\xe9", &options(AtomEncoding::Utf8), &mut scratch),
            Err(AtomError::InvalidUtf8 { valid_up_to: 3 })
        );
    }

    #[test]
    fn utf8_limit_counts_characters_not_bytes() {
        let mut scratch = Latin1Scratch::new();
        let wide: String = core::iter::repeat_n('\u{1F600}', MAX_ATOM_CHARACTERS).collect();
        assert_eq!(wide.len(), MAX_ATOM_SZ_LIMIT);

        let name = normalize(wide.as_bytes(), &options(AtomEncoding::Utf8), &mut scratch).unwrap();
        assert_eq!(name.char_count(), MAX_ATOM_CHARACTERS);

        let wider = wide + "x";
        assert_eq!(
            normalize(wider.as_bytes(), &options(AtomEncoding::Utf8), &mut scratch),
            Err(AtomError::InvalidLength {
                len: MAX_ATOM_CHARACTERS + 1,
                max: MAX_ATOM_CHARACTERS,
            })
        );
    }

    #[rstest]
    #[case::ascii(AtomEncoding::SevenBitAscii)]
    #[case::latin1(AtomEncoding::Latin1)]
    #[case::utf8(AtomEncoding::Utf8)]
    fn configured_limit_applies(#[case] encoding: AtomEncoding) {
        let opts = AtomOptions {
            encoding,
            max_characters: 3,
        };
        let mut scratch = Latin1Scratch::new();
        assert!(normalize(b"abc", &opts, &mut scratch).is_ok());
        assert_eq!(
            normalize(b"abcd", &opts, &mut scratch),
            Err(AtomError::InvalidLength { len: 4, max: 3 })
        );
    }

    #[test]
    fn limit_is_clamped_to_atom_maximum() {
        let opts = AtomOptions {
            max_characters: usize::MAX,
            ..AtomOptions::default()
        };
        assert_eq!(opts.effective_max_characters(), MAX_ATOM_CHARACTERS);

        let mut scratch = Latin1Scratch::new();
        let src = vec![b'a'; MAX_ATOM_CHARACTERS + 1];
        assert_eq!(
            normalize(&src, &opts, &mut scratch),
            Err(AtomError::InvalidLength {
                len: MAX_ATOM_CHARACTERS + 1,
                max: MAX_ATOM_CHARACTERS,
            })
        );
    }
}
