// Shell-style filename matching: `?`, `*`, `[set]`, `[!set]` with ranges
// and backslash escapes. Returns 0 on match and a nonzero reason code on
// failure, so callers can keep the classic `== 0` test.

use crate::cow::CHARSET_BLOCK_SIZE;
use crate::string::Str;
use crate::unit::Unit;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlobFlags {
    /// Compare ASCII letters without case.
    pub casefold: bool,
    /// Treat backslash as a plain unit instead of an escape.
    pub noescape: bool,
}

#[inline]
fn u<U: Unit>(c: u8) -> U {
    U::from_u32(c as u32)
}

/// Match `data` against `pattern`. Zero means match; an empty pattern or
/// empty data never matches.
pub fn glob_match<U: Unit>(pattern: &[U], data: &[U], flags: GlobFlags) -> i32 {
    if pattern.is_empty() || data.is_empty() {
        return 1;
    }
    walk(pattern, data, flags)
}

pub fn glob_matches<U: Unit>(pattern: &[U], data: &[U], flags: GlobFlags) -> bool {
    glob_match(pattern, data, flags) == 0
}

fn walk<U: Unit>(mut p: &[U], mut s: &[U], flags: GlobFlags) -> i32 {
    loop {
        let Some(&pc) = p.first() else {
            return if s.is_empty() { 0 } else { 5 };
        };
        if !flags.noescape && pc == u(b'\\') {
            let Some(&lit) = p.get(1) else {
                return 6; // dangling escape
            };
            let Some(&sc) = s.first() else {
                return 7;
            };
            if lit != sc {
                return 7;
            }
            p = &p[2..];
            s = &s[1..];
        } else if pc == u(b'?') {
            if s.is_empty() {
                return 2;
            }
            p = &p[1..];
            s = &s[1..];
        } else if pc == u(b'*') {
            while p.first() == Some(&u(b'*')) {
                p = &p[1..];
            }
            if p.is_empty() {
                return 0;
            }
            while !s.is_empty() {
                if walk(p, s, flags) == 0 {
                    return 0;
                }
                s = &s[1..];
            }
            return 11; // star could not cover the tail
        } else if pc == u(b'[') {
            let (r, close) = match_charset(&p[1..], s.first().copied(), flags);
            if r != 0 {
                return r;
            }
            p = &p[1 + close + 1..]; // past the closing bracket
            s = &s[1..];
        } else {
            let Some(&sc) = s.first() else {
                return 5;
            };
            let hit = if flags.casefold {
                pc.to_upper() == sc.to_upper()
            } else {
                pc == sc
            };
            if !hit {
                return 5;
            }
            p = &p[1..];
            s = &s[1..];
        }
    }
}

/// Match one data unit against a bracket class. `p` starts just past the
/// opening bracket; on success the second value is the index of the
/// closing bracket within `p`.
fn match_charset<U: Unit>(p: &[U], c: Option<U>, flags: GlobFlags) -> (i32, usize) {
    let Some(c) = c else {
        return (8, 0);
    };

    let mut i = 0usize;
    let neg = matches!(p.first(), Some(&f) if f == u(b'!') || f == u(b'^'));
    if neg {
        i = 1;
    }

    let mut set: Str<U> = Str::new();
    set.set_block_size(CHARSET_BLOCK_SIZE);
    loop {
        match p.get(i) {
            None => return (3, i), // class never closed
            Some(&pu) if pu == u(b']') => break,
            Some(&pu) if !flags.noescape && pu == u(b'\\') => {
                let Some(&lit) = p.get(i + 1) else {
                    return (3, i);
                };
                set.push_unit(lit);
                i += 2;
            }
            Some(&pu) => {
                if p.get(i + 1) == Some(&u(b'-')) {
                    let Some(&hi) = p.get(i + 2) else {
                        return (3, i);
                    };
                    set.push_unit_range(pu, hi);
                    i += 3;
                } else {
                    set.push_unit(pu);
                    i += 1;
                }
            }
        }
    }
    if set.is_empty() {
        return (3, i);
    }

    let probe = if flags.casefold {
        set.up();
        c.to_upper()
    } else {
        c
    };
    let hit = set.find_unit(probe, 0).is_some();
    if hit != neg { (0, i) } else { (4, i) }
}
