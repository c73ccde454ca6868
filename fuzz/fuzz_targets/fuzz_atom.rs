#![no_main]
use core::hash::Hasher;

use arbitrary::Arbitrary;
use atomhash::{
    AtomEncoding, AtomError, AtomHasher, AtomOptions, Latin1Scratch, MAX_ATOM_CHARACTERS,
    Utf8Name, atom_hash, latin1_to_utf8, latin1_utf8_bytes, latin1_utf8_len, normalize,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Encoding {
    SevenBitAscii,
    Latin1,
    Utf8,
}

impl From<Encoding> for AtomEncoding {
    fn from(encoding: Encoding) -> Self {
        match encoding {
            Encoding::SevenBitAscii => Self::SevenBitAscii,
            Encoding::Latin1 => Self::Latin1,
            Encoding::Utf8 => Self::Utf8,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    name: &'a [u8],
    encoding: Encoding,
    max_characters: u16,
    scratch_len: u16,
    split: u8,
}

fn check_latin1(name: &[u8], scratch_len: usize) {
    let mut scratch = vec![0u8; scratch_len];
    let high = name.iter().filter(|&&byte| byte >= 0x80).count();
    assert_eq!(latin1_utf8_len(name), name.len() + high);
    assert_eq!(latin1_utf8_bytes(name).len(), name.len() + high);
    match latin1_to_utf8(name, &mut scratch) {
        Ok(Utf8Name::Unchanged(out)) => {
            assert_eq!(high, 0);
            assert_eq!(out.as_ptr(), name.as_ptr());
        }
        Ok(Utf8Name::Converted(out)) => {
            assert!(high > 0);
            assert_eq!(out.len(), name.len() + high);
            let expected: String = name.iter().map(|&byte| char::from(byte)).collect();
            assert_eq!(out, expected.as_bytes());
            assert!(latin1_utf8_bytes(name).eq(out.iter().copied()));
        }
        Err(AtomError::InvalidLength { len, .. }) => {
            assert!(len > MAX_ATOM_CHARACTERS);
        }
        Err(AtomError::BufferTooSmall { capacity, required }) => {
            assert_eq!(capacity, scratch_len);
            assert!(required > capacity);
        }
        Err(err) => panic!("unexpected error from latin1_to_utf8: {err}"),
    }
}

fn check_hash(name: &[u8], split: usize) {
    let (head, tail) = name.split_at(split.min(name.len()));
    let mut hasher = AtomHasher::new();
    hasher.write(head);
    hasher.write(tail);
    assert_eq!(hasher.value(), atom_hash(name));

    let mut scratch = Latin1Scratch::new();
    if let Ok(out) = latin1_to_utf8(name, &mut scratch) {
        let foldable = name
            .windows(2)
            .any(|pair| pair[0] & 0xFE == 0xC2 && pair[1] & 0xC0 == 0x80);
        if !foldable {
            assert_eq!(out.hash(), atom_hash(name));
        }
    }
}

fuzz_target!(|input: Input<'_>| {
    check_latin1(input.name, usize::from(input.scratch_len));
    check_hash(input.name, usize::from(input.split));

    let options = AtomOptions {
        encoding: input.encoding.into(),
        max_characters: usize::from(input.max_characters),
    };
    let mut scratch = Latin1Scratch::new();
    if let Ok(out) = normalize(input.name, &options, &mut scratch) {
        assert!(out.char_count() <= options.effective_max_characters());
        assert!(core::str::from_utf8(out.as_bytes()).is_ok());
    }
});
