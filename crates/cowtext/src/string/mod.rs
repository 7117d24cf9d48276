// Growable COW string over a quantized unit buffer
// Copies share one box; every mutator detaches first, readers never do.

mod edit;
mod num;

use crate::cow::{Buf, CowBox};
use crate::search;
use crate::unit::Unit;

pub struct Str<U: Unit> {
    pub(crate) b: CowBox<Buf<U>>,
}

pub type ByteStr = Str<u8>;
pub type WideStr = Str<u16>;

impl<U: Unit> Str<U> {
    pub fn new() -> Self {
        Str {
            b: CowBox::new(Buf::new()),
        }
    }

    pub fn from_units(units: &[U]) -> Self {
        let mut s = Str::new();
        s.set_units(units);
        s
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.b.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    #[inline]
    pub fn units(&self) -> &[U] {
        self.b.units()
    }

    /// Number of handles currently sharing this string's storage.
    pub fn refs(&self) -> usize {
        self.b.refs()
    }

    /// Switch to exact-fit allocation (or back to block quantization).
    pub fn compact(&mut self, compact: bool) {
        self.b.detach().set_compact(compact);
    }

    pub fn set_block_size(&mut self, block: usize) {
        self.b.detach().set_block(block);
    }

    pub fn capacity(&self) -> usize {
        self.b.capacity()
    }

    pub fn clear(&mut self) {
        self.b.detach().clear();
    }

    pub fn set_units(&mut self, src: &[U]) {
        self.b.detach().set_units(src);
    }

    pub fn cat_units(&mut self, src: &[U]) {
        if src.is_empty() {
            return;
        }
        self.b.detach().cat_units(src);
    }

    /// Bounded set: at most `n` units from a source of arbitrary length.
    pub fn setn_units(&mut self, src: &[U], n: usize) {
        let n = n.min(src.len());
        self.set_units(&src[..n]);
    }

    /// Bounded append, mirror of [`Str::setn_units`].
    pub fn catn_units(&mut self, src: &[U], n: usize) {
        let n = n.min(src.len());
        self.cat_units(&src[..n]);
    }

    pub fn set_str(&mut self, s: &str) {
        self.set_units(&U::units_from_str(s));
    }

    pub fn cat_str(&mut self, s: &str) {
        self.cat_units(&U::units_from_str(s));
    }

    pub fn cat(&mut self, other: &Str<U>) {
        // copy out first: `other` may share this string's box
        if other.is_empty() {
            return;
        }
        let src: Vec<U> = other.units().to_vec();
        self.b.detach().cat_units(&src);
    }

    pub fn to_string_lossy(&self) -> String {
        U::units_to_string(self.units())
    }

    /// Unit at `pos`; negative counts from the end. Out of range yields the
    /// terminator as a sentinel.
    pub fn get(&self, pos: isize) -> U {
        match self.index_of(pos) {
            Some(i) => self.units()[i],
            None => U::NUL,
        }
    }

    /// Set the unit at `pos`; out of range is a silent no-op. Does not
    /// detach when the write would not change anything.
    pub fn set_unit(&mut self, pos: isize, u: U) {
        if let Some(i) = self.index_of(pos) {
            if self.units()[i] != u {
                self.b.detach().units_mut()[i] = u;
            }
        }
    }

    /// Append one unit.
    pub fn push_unit(&mut self, u: U) {
        self.b.detach().push_unit(u);
    }

    /// Append every unit from `fr` to `to` inclusive.
    pub fn push_unit_range(&mut self, fr: U, to: U) {
        if fr > to {
            return;
        }
        let buf = self.b.detach();
        let mut v = fr.to_u32();
        loop {
            buf.push_unit(U::from_u32(v));
            if v == to.to_u32() {
                break;
            }
            v += 1;
        }
    }

    #[inline]
    fn index_of(&self, pos: isize) -> Option<usize> {
        let len = self.len() as isize;
        let pos = if pos < 0 { len + pos } else { pos };
        if pos < 0 || pos >= len {
            None
        } else {
            Some(pos as usize)
        }
    }

    /// First occurrence of unit `c` at or after `startpos`.
    pub fn find_unit(&self, c: U, startpos: usize) -> Option<usize> {
        self.units()
            .iter()
            .skip(startpos)
            .position(|&u| u == c)
            .map(|i| i + startpos)
    }

    /// Last occurrence of unit `c`.
    pub fn rfind_unit(&self, c: U) -> Option<usize> {
        self.units().iter().rposition(|&u| u == c)
    }

    /// First occurrence of `pat` at or after `startpos` (quick search).
    pub fn find(&self, pat: &[U], startpos: usize) -> Option<usize> {
        if startpos >= self.len() {
            return None;
        }
        search::quick_search(pat, &self.units()[startpos..]).map(|i| i + startpos)
    }

    /// Last occurrence of `pat`.
    pub fn rfind(&self, pat: &[U]) -> Option<usize> {
        if pat.is_empty() || pat.len() > self.len() {
            return None;
        }
        let d = self.units();
        (0..=d.len() - pat.len()).rev().find(|&z| &d[z..z + pat.len()] == pat)
    }

    /// How many units at or after `startpos` belong to `set`.
    pub fn count_units(&self, set: &[U], startpos: usize) -> usize {
        self.units()
            .iter()
            .skip(startpos)
            .filter(|u| set.contains(u))
            .count()
    }

    /// Non-overlapping occurrences of `pat` at or after `startpos`.
    pub fn count_str(&self, pat: &[U], startpos: usize) -> usize {
        if pat.is_empty() {
            return 0;
        }
        let mut cnt = 0;
        let mut pos = startpos;
        while let Some(z) = self.find(pat, pos) {
            cnt += 1;
            pos = z + pat.len();
        }
        cnt
    }
}

impl<U: Unit> Default for Str<U> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap handle copy: shares the box until either side mutates.
impl<U: Unit> Clone for Str<U> {
    fn clone(&self) -> Self {
        Str { b: self.b.share() }
    }
}

impl<U: Unit> PartialEq for Str<U> {
    fn eq(&self, other: &Self) -> bool {
        self.units() == other.units()
    }
}

impl<U: Unit> Eq for Str<U> {}

impl<U: Unit> PartialOrd for Str<U> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<U: Unit> Ord for Str<U> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.units().cmp(other.units())
    }
}

impl<U: Unit> PartialEq<&str> for Str<U> {
    fn eq(&self, other: &&str) -> bool {
        self.units() == U::units_from_str(other).as_slice()
    }
}

impl<U: Unit> From<&str> for Str<U> {
    fn from(s: &str) -> Self {
        let mut r = Str::new();
        r.set_str(s);
        r
    }
}

impl<U: Unit> From<i64> for Str<U> {
    fn from(n: i64) -> Self {
        let mut r = Str::new();
        r.set_i64(n);
        r
    }
}

impl<U: Unit> From<f64> for Str<U> {
    fn from(n: f64) -> Self {
        let mut r = Str::new();
        r.set_f64(n);
        r
    }
}

impl<U: Unit> std::fmt::Display for Str<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl<U: Unit> std::fmt::Debug for Str<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}
