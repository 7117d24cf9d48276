// Quantized string buffer
// Capacity is rounded up to a block multiple (exact fit in compact mode) and
// a terminator unit always sits one past the logical length.

use crate::unit::Unit;

/// Default growth granularity for string buffers.
pub const STR_BLOCK_SIZE: usize = 256;
/// Default growth granularity for array element tables.
pub const ARRAY_BLOCK_SIZE: usize = 1024;
/// Growth granularity for small charset scratch buffers (glob classes).
pub const CHARSET_BLOCK_SIZE: usize = 32;

#[derive(Clone, Debug)]
pub struct Buf<U: Unit> {
    data: Vec<U>,
    len: usize,
    block: usize,
    compact: bool,
}

impl<U: Unit> Buf<U> {
    pub fn new() -> Self {
        Self::with_block(STR_BLOCK_SIZE)
    }

    pub fn with_block(block: usize) -> Self {
        let mut b = Buf {
            data: Vec::new(),
            len: 0,
            block: block.max(1),
            compact: false,
        };
        b.resize_buf(0);
        b
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn units(&self) -> &[U] {
        &self.data[..self.len]
    }

    #[inline]
    pub fn units_mut(&mut self) -> &mut [U] {
        &mut self.data[..self.len]
    }

    pub fn set_block(&mut self, block: usize) {
        self.block = block.max(1);
        self.resize_buf(self.len);
    }

    pub fn set_compact(&mut self, compact: bool) {
        self.compact = compact;
        if compact {
            self.resize_buf(self.len);
        }
    }

    #[inline]
    pub fn is_compact(&self) -> bool {
        self.compact
    }

    /// Reallocate for a logical length of `new_len` units. Quantizes unless
    /// compact; truncates the content if the new capacity cannot hold it.
    pub fn resize_buf(&mut self, new_len: usize) {
        let mut size = new_len + 1; // room for the terminator
        if !self.compact {
            size = size.div_ceil(self.block) * self.block;
        }
        if size != self.data.len() {
            self.data.resize(size, U::NUL);
        }
        if self.len > size - 1 {
            self.len = size - 1;
        }
        self.data[self.len] = U::NUL;
    }

    /// Set the logical length; capacity must already cover `new_len + 1`.
    #[inline]
    pub fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len < self.data.len());
        self.len = new_len;
        self.data[new_len] = U::NUL;
    }

    /// Grow-only capacity request.
    #[inline]
    fn grow(&mut self, new_len: usize) {
        if new_len + 1 > self.data.len() {
            self.resize_buf(new_len);
        }
    }

    /// Drop the slack once it exceeds one block.
    fn shrink_fit(&mut self) {
        if self.data.len() - (self.len + 1) > self.block {
            self.resize_buf(self.len);
        }
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.resize_buf(0);
        self.data[0] = U::NUL;
    }

    pub fn set_units(&mut self, src: &[U]) {
        self.grow(src.len());
        self.data[..src.len()].copy_from_slice(src);
        self.set_len(src.len());
        self.shrink_fit();
    }

    pub fn cat_units(&mut self, src: &[U]) {
        let new_len = self.len + src.len();
        self.grow(new_len);
        self.data[self.len..new_len].copy_from_slice(src);
        self.set_len(new_len);
    }

    pub fn push_unit(&mut self, u: U) {
        self.grow(self.len + 1);
        self.data[self.len] = u;
        self.set_len(self.len + 1);
    }

    /// Insert `src` at `pos`; `pos` must be <= len (checked by callers).
    pub fn insert_units(&mut self, pos: usize, src: &[U]) {
        debug_assert!(pos <= self.len);
        let new_len = self.len + src.len();
        self.grow(new_len);
        // shift the tail right, overlapping regions included
        self.data.copy_within(pos..self.len, pos + src.len());
        self.data[pos..pos + src.len()].copy_from_slice(src);
        self.set_len(new_len);
    }

    /// Delete up to `count` units starting at `pos`; out-of-range is clamped.
    pub fn delete_units(&mut self, pos: usize, count: usize) {
        if pos >= self.len || count == 0 {
            return;
        }
        let count = count.min(self.len - pos);
        self.data.copy_within(pos + count..self.len, pos);
        self.set_len(self.len - count);
        self.shrink_fit();
    }

    /// Truncate to `new_len` units; no-op when already shorter.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.set_len(new_len);
            self.shrink_fit();
        }
    }
}

impl<U: Unit> Default for Buf<U> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_is_quantized() {
        let mut b: Buf<u8> = Buf::new();
        assert_eq!(b.capacity(), STR_BLOCK_SIZE);
        b.set_units(&[b'x'; 300]);
        assert_eq!(b.capacity(), 2 * STR_BLOCK_SIZE);
        assert_eq!(b.len(), 300);
    }

    #[test]
    fn test_compact_is_exact_fit() {
        let mut b: Buf<u8> = Buf::new();
        b.set_compact(true);
        b.set_units(b"hello");
        assert_eq!(b.capacity(), 6);
    }

    #[test]
    fn test_terminator_follows_content() {
        let mut b: Buf<u8> = Buf::new();
        b.set_units(b"abc");
        b.delete_units(1, 1);
        assert_eq!(b.units(), b"ac");
        b.insert_units(1, b"xyz");
        assert_eq!(b.units(), b"axyzc");
    }

    #[test]
    fn test_shrink_keeps_one_block_slack() {
        let mut b: Buf<u8> = Buf::new();
        b.set_units(&[b'x'; 600]);
        assert_eq!(b.capacity(), 3 * STR_BLOCK_SIZE);
        b.truncate(500);
        // slack is 267 > 256, reallocates down
        assert_eq!(b.capacity(), 2 * STR_BLOCK_SIZE);
        b.truncate(400);
        // slack 111 <= 256, stays
        assert_eq!(b.capacity(), 2 * STR_BLOCK_SIZE);
    }
}
