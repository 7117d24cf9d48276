// Quick search (Boyer-Moore-Horspool family).
// The bad-character table has 256 slots indexed by the low byte of the
// code unit; colliding units fall back to the smallest safe shift.

use crate::unit::Unit;

const ALPHABET: usize = 256;

#[inline]
fn bucket<U: Unit>(u: U) -> usize {
    (u.to_u32() as usize) & (ALPHABET - 1)
}

fn preprocess<U: Unit>(p: &[U], nocase: bool) -> [usize; ALPHABET] {
    let ps = p.len();
    let mut badc = [ps + 1; ALPHABET];
    for (i, &u) in p.iter().enumerate() {
        let u = if nocase { u.to_upper() } else { u };
        let shift = ps - i;
        if shift < badc[bucket(u)] {
            badc[bucket(u)] = shift;
        }
    }
    badc
}

fn search<U: Unit>(p: &[U], d: &[U], nocase: bool) -> Option<usize> {
    let ps = p.len();
    let ds = d.len();
    if ps == 0 {
        return Some(0);
    }
    if ps > ds {
        return None;
    }

    let eq = |a: U, b: U| {
        if nocase {
            a.to_upper() == b.to_upper()
        } else {
            a == b
        }
    };

    let badc = preprocess(p, nocase);
    let mut j = 0usize;
    while j <= ds - ps {
        let mut i = ps;
        while i > 0 && eq(p[i - 1], d[j + i - 1]) {
            i -= 1;
        }
        if i == 0 {
            return Some(j);
        }
        if j + ps >= ds {
            break;
        }
        let next = if nocase { d[j + ps].to_upper() } else { d[j + ps] };
        j += badc[bucket(next)];
    }
    None
}

pub fn quick_search<U: Unit>(p: &[U], d: &[U]) -> Option<usize> {
    search(p, d, false)
}

pub fn quick_search_nocase<U: Unit>(p: &[U], d: &[U]) -> Option<usize> {
    search(p, d, true)
}
