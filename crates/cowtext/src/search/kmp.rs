// Knuth-Morris-Pratt search.
// Linear in pattern plus data; the failure table is bounded by a fixed
// maximum pattern size, larger patterns report not-found.

use crate::unit::Unit;

pub const MAX_KMP_PATTERN: usize = 1024;

fn preprocess<U: Unit>(p: &[U]) -> Vec<isize> {
    let ps = p.len();
    let mut next = vec![0isize; ps + 1];
    next[0] = -1;
    let mut i = 0usize;
    let mut j: isize = -1;
    while i < ps {
        while j > -1 && p[i] != p[j as usize] {
            j = next[j as usize];
        }
        i += 1;
        j += 1;
        next[i] = if i < ps && p[i] == p[j as usize] {
            next[j as usize]
        } else {
            j
        };
    }
    next
}

pub fn kmp_search<U: Unit>(p: &[U], d: &[U]) -> Option<usize> {
    let ps = p.len();
    let ds = d.len();
    if ps == 0 {
        return Some(0);
    }
    if ps > MAX_KMP_PATTERN || ps > ds {
        return None;
    }

    let next = preprocess(p);
    let mut i: isize = 0;
    let mut j = 0usize;
    while j < ds {
        while i > -1 && p[i as usize] != d[j] {
            i = next[i as usize];
        }
        i += 1;
        j += 1;
        if i >= ps as isize {
            return Some(j - i as usize);
        }
    }
    None
}
