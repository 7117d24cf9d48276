use super::SCENARIO;
use crate::{ByteArray, ByteMap, ByteStr};

#[test]
fn test_string_copies_share_until_write() {
    let a = ByteStr::from(SCENARIO);
    let b = a.clone();
    assert_eq!(a.refs(), 2);
    assert_eq!(b.refs(), 2);

    let mut b = b;
    b.up();
    assert_eq!(a.refs(), 1);
    assert_eq!(b.refs(), 1);
    assert_eq!(a, SCENARIO);
    assert_eq!(b.get(0), b'T');
}

#[test]
fn test_no_detach_on_unchanged_write() {
    let mut a = ByteStr::from("same");
    let b = a.clone();
    a.set_unit(0, b's');
    assert_eq!(a.refs(), 2);
    a.set_unit(0, b'S');
    assert_eq!(a.refs(), 1);
    assert_eq!(b, "same");
}

#[test]
fn test_reader_never_detaches() {
    let a = ByteStr::from(SCENARIO);
    let b = a.clone();
    assert_eq!(a.find(b"fixed", 0), Some(28));
    assert_eq!(a.substr(0, 4), "this");
    assert_eq!(a.refs(), 2);
    drop(b);
}

#[test]
fn test_array_detach_copies_handles_only() {
    let mut arr = ByteArray::new();
    arr.push_str("one");
    arr.push_str("two");

    let mut other = arr.clone();
    assert_eq!(arr.refs(), 2);
    other.set(0, &ByteStr::from("ONE"));
    assert_eq!(arr.get(0), "one");
    assert_eq!(other.get(0), "ONE");
    assert_eq!(arr.refs(), 1);
}

#[test]
fn test_element_handle_survives_overwrite() {
    let mut arr = ByteArray::new();
    arr.push_str("keep");
    let snapshot = arr.get(0);
    arr.set(0, &ByteStr::from("gone"));
    assert_eq!(snapshot, "keep");
    assert_eq!(arr.get(0), "gone");
}

#[test]
fn test_map_copies_share_arena() {
    let mut m = ByteMap::new();
    m.set_str("k", "v");
    let mut c = m.clone();
    assert_eq!(m.refs(), 2);
    c.set_str("k2", "v2");
    assert_eq!(m.count(), 1);
    assert_eq!(c.count(), 2);
    assert!(!m.exists(b"k2"));
}
