// Shared-storage machinery
// Every container owns exactly one CowBox; copies share the box until one
// side mutates, at which point the writer detaches onto a private clone.

mod buf;

pub use buf::{ARRAY_BLOCK_SIZE, Buf, CHARSET_BLOCK_SIZE, STR_BLOCK_SIZE};

use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted backing storage with detach-on-write.
///
/// `share()` is O(1) and allocation-free; `detach()` clones the payload only
/// while the box is actually shared, so repeated writes after the first
/// detach stay cheap. Refcounts are plain (non-atomic) integers: sharing a
/// box across threads is not supported.
pub struct CowBox<T: Clone> {
    inner: Rc<T>,
}

impl<T: Clone> CowBox<T> {
    pub fn new(value: T) -> Self {
        CowBox {
            inner: Rc::new(value),
        }
    }

    /// Another handle on the same storage; bumps the refcount.
    pub fn share(&self) -> Self {
        CowBox {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Exclusive access for mutation. No-op when unshared, deep clone (and
    /// release of the previous reference) otherwise.
    pub fn detach(&mut self) -> &mut T {
        Rc::make_mut(&mut self.inner)
    }

    /// Current number of handles on this storage.
    pub fn refs(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<T: Clone> Deref for CowBox<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T: Clone> Clone for CowBox<T> {
    fn clone(&self) -> Self {
        self.share()
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for CowBox<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_bumps_refcount() {
        let a = CowBox::new(vec![1, 2, 3]);
        assert_eq!(a.refs(), 1);
        let b = a.share();
        assert_eq!(a.refs(), 2);
        assert_eq!(b.refs(), 2);
        drop(b);
        assert_eq!(a.refs(), 1);
    }

    #[test]
    fn test_detach_breaks_sharing_once() {
        let a = CowBox::new(vec![1, 2, 3]);
        let mut b = a.share();
        b.detach().push(4);
        assert_eq!(*a, vec![1, 2, 3]);
        assert_eq!(*b, vec![1, 2, 3, 4]);
        assert_eq!(a.refs(), 1);
        assert_eq!(b.refs(), 1);
        // second mutation must not clone again
        let p = b.detach() as *mut Vec<i32>;
        let q = b.detach() as *mut Vec<i32>;
        assert_eq!(p, q);
    }
}
