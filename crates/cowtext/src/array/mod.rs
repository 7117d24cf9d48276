// COW string array.
// The box holds a vector of string handles, so detaching an array copies
// handles only; element data stays shared until the element itself is
// written. Capacity is quantized to array blocks.

mod fio;
mod sort;

use crate::cow::{ARRAY_BLOCK_SIZE, CowBox};
use crate::string::Str;
use crate::trie::StrMap;
use crate::unit::Unit;

#[derive(Clone)]
pub(crate) struct ArrayBuf<U: Unit> {
    data: Vec<Str<U>>,
}

impl<U: Unit> ArrayBuf<U> {
    fn new() -> Self {
        ArrayBuf { data: Vec::new() }
    }

    fn reserve_quantized(&mut self, additional: usize) {
        let need = self.data.len() + additional;
        if need > self.data.capacity() {
            let cap = need.div_ceil(ARRAY_BLOCK_SIZE) * ARRAY_BLOCK_SIZE;
            self.data.reserve_exact(cap - self.data.len());
        }
    }
}

pub struct StrArray<U: Unit> {
    pub(crate) b: CowBox<ArrayBuf<U>>,
    // foreach cursor and element allocation policy live on the handle,
    // not in the shared box
    fe: isize,
    compact: bool,
}

pub type ByteArray = StrArray<u8>;
pub type WideArray = StrArray<u16>;

impl<U: Unit> StrArray<U> {
    pub fn new() -> Self {
        StrArray {
            b: CowBox::new(ArrayBuf::new()),
            fe: -1,
            compact: false,
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.b.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.b.data.is_empty()
    }

    /// Number of handles currently sharing this array's storage.
    pub fn refs(&self) -> usize {
        self.b.refs()
    }

    /// Elements created from now on use exact-fit string buffers.
    pub fn compact(&mut self, compact: bool) {
        self.compact = compact;
    }

    pub fn undef(&mut self) {
        self.b.detach().data.clear();
        self.fe = -1;
    }

    pub fn clear(&mut self) {
        self.undef();
    }

    /// Element at `n` as a shared handle; negative counts from the end,
    /// out of range yields an empty string.
    pub fn get(&self, n: isize) -> Str<U> {
        match self.index_of(n) {
            Some(i) => self.b.data[i].clone(),
            None => Str::new(),
        }
    }

    /// Overwrite element `n`, extending the array with empty strings when
    /// `n` is past the end.
    pub fn set(&mut self, n: usize, s: &Str<U>) {
        // copy out first: `s` may live inside this very array
        let src: Vec<U> = s.units().to_vec();
        while n >= self.count() {
            self.push_units(&[]);
        }
        self.b.detach().data[n].set_units(&src);
    }

    /// Insert before position `n`; positions past the end are ignored.
    pub fn ins(&mut self, n: usize, s: &Str<U>) {
        if n > self.count() {
            return;
        }
        let e = self.make_element(s.units());
        let buf = self.b.detach();
        buf.reserve_quantized(1);
        buf.data.insert(n, e);
    }

    /// Remove element `n`; out of range is a no-op.
    pub fn del(&mut self, n: usize) {
        if n >= self.count() {
            return;
        }
        self.b.detach().data.remove(n);
    }

    /// Append, returning the new element count.
    pub fn push(&mut self, s: &Str<U>) -> usize {
        self.push_units(s.units().to_vec().as_slice())
    }

    pub fn push_str(&mut self, s: &str) -> usize {
        self.push_units(&U::units_from_str(s))
    }

    fn push_units(&mut self, units: &[U]) -> usize {
        let e = self.make_element(units);
        let buf = self.b.detach();
        buf.reserve_quantized(1);
        buf.data.push(e);
        buf.data.len()
    }

    pub fn pop(&mut self) -> Option<Str<U>> {
        if self.is_empty() {
            return None;
        }
        self.b.detach().data.pop()
    }

    /// Prepend, returning the new element count.
    pub fn unshift(&mut self, s: &Str<U>) -> usize {
        let e = self.make_element(&s.units().to_vec());
        let buf = self.b.detach();
        buf.reserve_quantized(1);
        buf.data.insert(0, e);
        buf.data.len()
    }

    pub fn shift(&mut self) -> Option<Str<U>> {
        if self.is_empty() {
            return None;
        }
        Some(self.b.detach().data.remove(0))
    }

    /// Append every element of `other`, which may alias this array.
    pub fn push_array(&mut self, other: &StrArray<U>) -> usize {
        let src: Vec<Str<U>> = other.b.data.clone();
        let buf = self.b.detach();
        buf.reserve_quantized(src.len());
        buf.data.extend(src);
        buf.data.len()
    }

    /// Prepend every element of `other`, keeping its order.
    pub fn unshift_array(&mut self, other: &StrArray<U>) -> usize {
        let src: Vec<Str<U>> = other.b.data.clone();
        let buf = self.b.detach();
        buf.reserve_quantized(src.len());
        buf.data.splice(0..0, src);
        buf.data.len()
    }

    /// Append a map as interleaved key, value, key, value elements.
    pub fn push_map(&mut self, map: &StrMap<U>) -> usize {
        map.for_each(|k, v| {
            self.push(k);
            self.push(v);
        });
        self.count()
    }

    /// Prepend a map as interleaved key, value pairs.
    pub fn unshift_map(&mut self, map: &StrMap<U>) -> usize {
        let mut tmp = StrArray::new();
        tmp.push_map(map);
        self.unshift_array(&tmp)
    }

    /// Length of the longest element, zero when empty.
    pub fn max_len(&self) -> usize {
        self.b.data.iter().map(Str::len).max().unwrap_or(0)
    }

    /// Length of the shortest element, zero when empty.
    pub fn min_len(&self) -> usize {
        self.b.data.iter().map(Str::len).min().unwrap_or(0)
    }

    /// Rewind the foreach cursor.
    pub fn reset(&mut self) {
        self.fe = -1;
    }

    /// Advance the cursor and return the element there, `None` at the end.
    pub fn next(&mut self) -> Option<Str<U>> {
        self.fe += 1;
        self.current()
    }

    /// Element under the cursor without advancing.
    pub fn current(&self) -> Option<Str<U>> {
        if self.fe >= 0 && (self.fe as usize) < self.count() {
            Some(self.b.data[self.fe as usize].clone())
        } else {
            None
        }
    }

    /// Cursor position, or -1 when exhausted or not started.
    pub fn current_index(&self) -> isize {
        if self.fe >= 0 && (self.fe as usize) < self.count() {
            self.fe
        } else {
            -1
        }
    }

    pub(crate) fn elements(&self) -> &[Str<U>] {
        &self.b.data
    }

    pub(crate) fn elements_mut(&mut self) -> &mut Vec<Str<U>> {
        &mut self.b.detach().data
    }

    fn make_element(&self, units: &[U]) -> Str<U> {
        let mut e = Str::new();
        if self.compact {
            e.compact(true);
        }
        e.set_units(units);
        e
    }

    #[inline]
    fn index_of(&self, n: isize) -> Option<usize> {
        let len = self.count() as isize;
        let n = if n < 0 { len + n } else { n };
        if n < 0 || n >= len { None } else { Some(n as usize) }
    }
}

impl<U: Unit> Default for StrArray<U> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap handle copy sharing the element vector; the cursor is per-handle
/// and starts rewound on the copy.
impl<U: Unit> Clone for StrArray<U> {
    fn clone(&self) -> Self {
        StrArray {
            b: self.b.share(),
            fe: -1,
            compact: self.compact,
        }
    }
}

impl<U: Unit> PartialEq for StrArray<U> {
    fn eq(&self, other: &Self) -> bool {
        self.b.data == other.b.data
    }
}

impl<U: Unit> Eq for StrArray<U> {}

impl<U: Unit> std::fmt::Debug for StrArray<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.b.data.iter()).finish()
    }
}

impl<U: Unit> From<&StrMap<U>> for StrArray<U> {
    fn from(map: &StrMap<U>) -> Self {
        let mut arr = StrArray::new();
        arr.push_map(map);
        arr
    }
}
