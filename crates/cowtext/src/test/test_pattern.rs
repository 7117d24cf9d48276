use super::SCENARIO;
use crate::error::TextError;
use crate::pattern::{find_regexp, join, rfind_regexp, split, split_simple, Matcher};
use crate::ByteStr;

#[test]
fn test_regexp_mode_with_captures() {
    let mut m = Matcher::new();
    m.compile(r"(f[a-z]+), (n[a-z]+)", "").unwrap();
    assert!(m.is_ok());
    assert_eq!(m.error_str(), "OK");

    let line = ByteStr::from(SCENARIO);
    assert_eq!(m.find(&line), 3);
    assert_eq!(m.capture(0).unwrap(), "fixed, nonsense");
    assert_eq!(m.capture(1).unwrap(), "fixed");
    assert_eq!(m.capture(2).unwrap(), "nonsense");
    assert_eq!(m.capture_start(1), Some(28));
    assert_eq!(m.capture_end(1), Some(33));
    assert!(m.capture(3).is_none());

    assert_eq!(m.find(&ByteStr::from("no such thing")), 0);
    assert!(m.capture(0).is_none());
}

#[test]
fn test_captures_survive_subject_edits() {
    let mut m = Matcher::new();
    m.compile("fixed", "f").unwrap();

    let mut line = ByteStr::from(SCENARIO);
    assert_eq!(m.find(&line), 1);
    line.up(); // detaches the caller, not the snapshot
    assert_eq!(m.capture(0).unwrap(), "fixed");
    assert_eq!(m.capture_start(0), Some(28));
}

#[test]
fn test_literal_and_hex_modes() {
    let line = ByteStr::from(SCENARIO);

    let mut m = Matcher::new();
    m.compile("FIXED", "fi").unwrap();
    assert_eq!(m.find(&line), 1);
    assert_eq!(m.capture_start(0), Some(28));

    // 66 69 78 65 64 = "fixed"
    let mut m = Matcher::new();
    m.compile("66 69 78 65 64", "h").unwrap();
    assert_eq!(m.find(&line), 1);
    assert_eq!(m.capture(0).unwrap(), "fixed");
}

#[test]
fn test_later_mode_flag_wins() {
    let mut m = Matcher::new();
    m.compile("f.xed", "fr").unwrap();
    assert_eq!(m.find(&ByteStr::from(SCENARIO)), 1);

    let mut m = Matcher::new();
    m.compile("f.xed", "rf").unwrap();
    assert_eq!(m.find(&ByteStr::from(SCENARIO)), 0);
}

#[test]
fn test_compile_errors() {
    let mut m = Matcher::new();
    assert!(matches!(
        m.compile("x", "q"),
        Err(TextError::BadOption('q'))
    ));
    assert!(!m.is_ok());
    assert!(m.error_str().contains("invalid option"));

    assert!(matches!(m.compile("(", ""), Err(TextError::Regex(_))));
    assert!(!m.is_ok());

    assert!(matches!(
        m.compile("5g", "h"),
        Err(TextError::BadHexPattern)
    ));

    let line = ByteStr::from("anything");
    assert_eq!(m.find(&line), 0);
    assert_eq!(m.error_str(), "no pattern compiled");
}

#[test]
fn test_split_and_join_round_the_scenario() {
    let line = ByteStr::from(SCENARIO);
    let arr = split("[, \t]+", &line, -1).unwrap();
    assert_eq!(arr.count(), 11);
    assert_eq!(arr.get(0), "this");
    assert_eq!(arr.get(4), "simple.");
    assert_eq!(arr.get(-1), ":)");

    let glued = join(&arr, b" ");
    assert_eq!(
        glued,
        "this is just a simple. but fixed nonsense test voila :)"
    );
}

#[test]
fn test_split_maxcount_bounds_fields() {
    let line = ByteStr::from("a b c d");
    let arr = split("[ ]+", &line, 2).unwrap();
    assert_eq!(arr.count(), 2);
    assert_eq!(arr.get(0), "a");
    assert_eq!(arr.get(1), "b c d");
}

#[test]
fn test_split_simple() {
    let arr = split_simple(b"::", &ByteStr::from("a::b::c"), -1);
    assert_eq!(arr.count(), 3);
    assert_eq!(arr.get(1), "b");

    let none = split_simple(b"|", &ByteStr::from("plain"), -1);
    assert_eq!(none.count(), 1);
    assert_eq!(none.get(0), "plain");
}

#[test]
fn test_find_regexp_offsets() {
    let line = ByteStr::from(SCENARIO);
    assert_eq!(find_regexp(&line, "n[a-z]+", 0).unwrap(), Some(35));
    assert_eq!(find_regexp(&line, "is", 3).unwrap(), Some(5));
    assert_eq!(find_regexp(&line, "zzz", 0).unwrap(), None);
    assert!(find_regexp(&line, "(", 0).is_err());
}

#[test]
fn test_rfind_regexp_prefers_rightmost_overlap() {
    let line = ByteStr::from("aaa");
    assert_eq!(rfind_regexp(&line, "aa").unwrap(), Some(1));
    assert_eq!(rfind_regexp(&line, "b").unwrap(), None);
}
