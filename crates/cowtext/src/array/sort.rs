// Ordering operations: quicksort with a median-of-three Hoare partition,
// whole-array reverse and a Fisher-Yates shuffle.

use std::cmp::Ordering;

use rand::Rng;

use super::StrArray;
use crate::string::Str;
use crate::unit::Unit;

impl<U: Unit> StrArray<U> {
    /// Sort lexicographically by code units. `reverse` flips the sorted
    /// result as a final pass, so equal elements end up in the same spots
    /// either way.
    pub fn sort(&mut self, reverse: bool) {
        self.sort_by(reverse, Str::cmp);
    }

    /// Sort with a caller-supplied comparison.
    pub fn sort_by<F>(&mut self, reverse: bool, cmp: F)
    where
        F: Fn(&Str<U>, &Str<U>) -> Ordering,
    {
        if self.count() < 2 {
            return;
        }
        let data = self.elements_mut();
        q_sort(data, &cmp);
        if reverse {
            data.reverse();
        }
    }

    /// Reverse the element order.
    pub fn reverse(&mut self) {
        if self.count() < 2 {
            return;
        }
        self.elements_mut().reverse();
    }

    /// Randomize the element order (Fisher-Yates).
    pub fn shuffle(&mut self) {
        if self.count() < 2 {
            return;
        }
        let data = self.elements_mut();
        let mut rng = rand::thread_rng();
        for i in (1..data.len()).rev() {
            let j = rng.gen_range(0..=i);
            data.swap(i, j);
        }
    }
}

fn q_sort<U, F>(v: &mut [Str<U>], cmp: &F)
where
    U: Unit,
    F: Fn(&Str<U>, &Str<U>) -> Ordering,
{
    if v.len() < 2 {
        return;
    }

    // median-of-three: order first, middle and last, pivot on the middle
    let last = v.len() - 1;
    let mid = v.len() / 2;
    if cmp(&v[mid], &v[0]) == Ordering::Less {
        v.swap(mid, 0);
    }
    if cmp(&v[last], &v[0]) == Ordering::Less {
        v.swap(last, 0);
    }
    if cmp(&v[last], &v[mid]) == Ordering::Less {
        v.swap(last, mid);
    }
    if v.len() <= 3 {
        return;
    }

    let pivot = v[mid].clone();
    let mut i: isize = -1;
    let mut j = v.len() as isize;
    let split = loop {
        i += 1;
        while cmp(&v[i as usize], &pivot) == Ordering::Less {
            i += 1;
        }
        j -= 1;
        while cmp(&v[j as usize], &pivot) == Ordering::Greater {
            j -= 1;
        }
        if i >= j {
            break j as usize;
        }
        v.swap(i as usize, j as usize);
    };

    let (lo, hi) = v.split_at_mut(split + 1);
    q_sort(lo, cmp);
    q_sort(hi, cmp);
}
