use alloc::vec::Vec;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::arbitrary::{Latin1Name, test_count};
use crate::{Latin1Scratch, Utf8Name, latin1_to_utf8, latin1_utf8_bytes, latin1_utf8_len};

/// Property: ASCII names come back as the caller's own slice.
#[test]
fn ascii_is_identity_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(name: Latin1Name) -> bool {
        let ascii: Vec<u8> = name.0.iter().map(|byte| byte & 0x7F).collect();
        let mut scratch = Latin1Scratch::new();
        match latin1_to_utf8(&ascii, &mut scratch) {
            Ok(Utf8Name::Unchanged(out)) => out.as_ptr() == ascii.as_ptr() && out == &ascii[..],
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Latin1Name) -> bool);
}

/// Property: output length is the input length plus one per high byte, which
/// keeps it within `[len, 2 * len]`.
#[test]
fn expansion_bound_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(name: Latin1Name) -> bool {
        let src = &name.0;
        let high = src.iter().filter(|&&byte| byte >= 0x80).count();
        let mut scratch = Latin1Scratch::new();
        let Ok(out) = latin1_to_utf8(src, &mut scratch) else {
            return false;
        };
        out.len() == src.len() + high
            && (src.len()..=2 * src.len()).contains(&out.len())
            && out.is_converted() == (high > 0)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Latin1Name) -> bool);
}

/// Property: the conversion agrees with decoding each byte as a `char`.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn matches_char_decoding(name: Latin1Name) -> bool {
    let expected: alloc::string::String = name.0.iter().map(|&byte| char::from(byte)).collect();
    let mut scratch = Latin1Scratch::new();
    latin1_to_utf8(&name.0, &mut scratch)
        .is_ok_and(|out| out.as_bytes() == expected.as_bytes() && out.char_count() == name.0.len())
}

/// Property: the lazy conversion yields exactly the scratch conversion, and
/// both length queries agree with it.
#[test]
fn lazy_bytes_match_scratch_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(name: Latin1Name) -> bool {
        let mut scratch = Latin1Scratch::new();
        let Ok(out) = latin1_to_utf8(&name.0, &mut scratch) else {
            return false;
        };
        let bytes = latin1_utf8_bytes(&name.0);
        bytes.len() == out.len()
            && latin1_utf8_len(&name.0) == out.len()
            && bytes.eq(out.as_bytes().iter().copied())
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Latin1Name) -> bool);
}

/// Property: `size_hint` stays exact at every step of the lazy conversion.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn lazy_bytes_size_hint_is_exact(name: Latin1Name) -> bool {
    let mut bytes = latin1_utf8_bytes(&name.0);
    let mut left = latin1_utf8_len(&name.0);
    loop {
        if bytes.size_hint() != (left, Some(left)) {
            return false;
        }
        match bytes.next() {
            Some(_) => left -= 1,
            None => return left == 0,
        }
    }
}
