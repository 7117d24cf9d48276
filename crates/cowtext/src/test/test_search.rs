use super::SCENARIO;
use crate::search::{Algorithm, find_with, glob_matches, GlobFlags};
use crate::{ByteStr, WideStr};

const ALGOS: [Algorithm; 3] = [Algorithm::Kmp, Algorithm::Quick, Algorithm::Sum];

#[test]
fn test_algorithms_agree() {
    let data = SCENARIO.as_bytes();
    let patterns: [&[u8]; 8] = [
        b"this",
        b"voila :)",
        b"is,",
        b"t",
        b")",
        b"zzz",
        b"nonsense test",
        SCENARIO.as_bytes(),
    ];
    for pat in patterns {
        let expect = find_with(Algorithm::Quick, pat, data);
        for algo in ALGOS {
            assert_eq!(find_with(algo, pat, data), expect, "{algo:?} on {pat:?}");
        }
    }
}

#[test]
fn test_algorithms_agree_on_edges() {
    for algo in ALGOS {
        assert_eq!(find_with(algo, b"", b"data"), Some(0));
        assert_eq!(find_with(algo, b"too long", b"short"), None);
        assert_eq!(find_with(algo, b"x", b"x"), Some(0));
    }
}

#[test]
fn test_agreement_on_wide_units() {
    let data: Vec<u16> = "just a simple test".encode_utf16().collect();
    let pat: Vec<u16> = "simple".encode_utf16().collect();
    for algo in ALGOS {
        assert_eq!(find_with(algo, &pat, &data), Some(7));
    }
}

#[test]
fn test_nocase_quick_search() {
    let s = ByteStr::from(SCENARIO);
    assert_eq!(
        find_with(Algorithm::QuickNoCase, b"FIXED", s.units()),
        Some(28)
    );
    assert_eq!(find_with(Algorithm::Quick, b"FIXED", s.units()), None);
}

#[test]
fn test_glob_on_wide_strings() {
    let pat = WideStr::from("vf*.c??");
    let name = WideStr::from("vfutils.cpp");
    assert!(glob_matches(pat.units(), name.units(), GlobFlags::default()));

    let miss = WideStr::from("vfutils.h");
    assert!(!glob_matches(pat.units(), miss.units(), GlobFlags::default()));
}
