use crate::{ByteArray, ByteMap, ByteStr};

fn map_of(pairs: &[(&str, &str)]) -> ByteMap {
    let mut m = ByteMap::new();
    for (k, v) in pairs {
        m.set_str(k, v);
    }
    m
}

#[test]
fn test_set_get_exists() {
    let mut m = ByteMap::new();
    m.set_str("one", "1");
    m.set_str("two", "2");
    assert_eq!(m.count(), 2);
    assert_eq!(m.get_str("one").unwrap(), "1");
    assert!(m.exists(b"two"));
    assert!(!m.exists(b"three"));
    assert!(m.get_str("onetwo").is_none());
    // a prefix of a stored key is not a key by itself
    assert!(!m.exists(b"on"));
}

#[test]
fn test_overwrite_keeps_count() {
    let mut m = map_of(&[("k", "old")]);
    m.set_str("k", "new");
    assert_eq!(m.count(), 1);
    assert_eq!(m.get_str("k").unwrap(), "new");
}

#[test]
fn test_empty_key_is_ignored() {
    let mut m = ByteMap::new();
    m.set_str("", "v");
    assert_eq!(m.count(), 0);
    assert!(m.get(b"").is_none());
    assert!(!m.del(b""));
}

#[test]
fn test_del_keeps_prefix_sharing_keys() {
    let mut m = map_of(&[("art", "1"), ("artist", "2"), ("arc", "3")]);
    assert!(m.del(b"art"));
    assert_eq!(m.count(), 2);
    assert!(!m.exists(b"art"));
    assert_eq!(m.get_str("artist").unwrap(), "2");
    assert_eq!(m.get_str("arc").unwrap(), "3");

    assert!(m.del(b"artist"));
    assert!(!m.del(b"artist"));
    assert!(!m.del(b"missing"));
    assert_eq!(m.count(), 1);
    assert_eq!(m.get_str("arc").unwrap(), "3");
}

#[test]
fn test_del_branch() {
    let mut m = map_of(&[("art", "1"), ("artist", "2"), ("arc", "3"), ("zen", "4")]);
    assert_eq!(m.del_branch(b"art"), 2);
    assert_eq!(m.count(), 2);
    assert!(m.exists(b"arc"));
    assert!(m.exists(b"zen"));
    assert_eq!(m.del_branch(b"nothing"), 0);
    assert_eq!(m.del_branch(b""), 2);
    assert!(m.is_empty());
}

#[test]
fn test_keys_values_pair_up() {
    let m = map_of(&[("b", "2"), ("a", "1"), ("c", "3")]);
    let ka = m.keys();
    let va = m.values();
    assert_eq!(ka.count(), 3);
    assert_eq!(va.count(), 3);
    for z in 0..3 {
        let k = ka.get(z);
        assert_eq!(m.get(k.units()).unwrap(), va.get(z));
    }

    let mut sorted: Vec<String> = (0..3).map(|z| ka.get(z).to_string_lossy()).collect();
    sorted.sort();
    assert_eq!(sorted, ["a", "b", "c"]);
}

#[test]
fn test_reverse_swaps_keys_and_values() {
    let mut m = map_of(&[("one", "1"), ("two", "2")]);
    m.reverse();
    assert_eq!(m.count(), 2);
    assert_eq!(m.get_str("1").unwrap(), "one");
    assert_eq!(m.get_str("2").unwrap(), "two");
    assert!(m.get_str("one").is_none());
}

#[test]
fn test_merge_overwrites() {
    let mut m = map_of(&[("a", "1"), ("b", "2")]);
    let other = map_of(&[("b", "20"), ("c", "30")]);
    m.merge(&other);
    assert_eq!(m.count(), 3);
    assert_eq!(m.get_str("b").unwrap(), "20");
    assert_eq!(m.get_str("c").unwrap(), "30");
}

#[test]
fn test_merge_array_pairs() {
    let mut arr = ByteArray::new();
    for e in ["k1", "v1", "k2", "v2", "odd"] {
        arr.push_str(e);
    }
    let mut m = ByteMap::new();
    m.merge_array(&arr);
    assert_eq!(m.count(), 3);
    assert_eq!(m.get_str("k1").unwrap(), "v1");
    assert_eq!(m.get_str("k2").unwrap(), "v2");
    // odd trailing key gets an empty value
    assert_eq!(m.get_str("odd").unwrap(), "");
}

#[test]
fn test_array_from_map_interleaves() {
    let m = map_of(&[("k", "v")]);
    let arr = ByteArray::from(&m);
    assert_eq!(arr.count(), 2);
    assert_eq!(arr.get(0), "k");
    assert_eq!(arr.get(1), "v");
}

#[test]
fn test_fload_fsave_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.txt");

    let m = map_of(&[("alpha", "1"), ("beta", "2"), ("alphabet", "3")]);
    m.fsave(&path).unwrap();

    let mut back = ByteMap::new();
    back.fload(&path).unwrap();
    assert_eq!(back.count(), 3);
    for k in ["alpha", "beta", "alphabet"] {
        assert_eq!(back.get_str(k), m.get_str(k));
    }
}

#[test]
fn test_deep_keys_do_not_recurse() {
    let mut m = ByteMap::new();
    let deep = "x".repeat(100_000);
    m.set(deep.as_bytes(), &ByteStr::from("deep"));
    assert_eq!(m.count(), 1);
    assert_eq!(m.get(deep.as_bytes()).unwrap(), "deep");
    assert_eq!(m.keys().get(0).len(), 100_000);
    assert!(m.del(deep.as_bytes()));
    assert!(m.is_empty());

    let clone_safe = {
        let mut big = ByteMap::new();
        big.set(deep.as_bytes(), &ByteStr::from("v"));
        big.clone()
    };
    assert_eq!(clone_safe.count(), 1);
}
