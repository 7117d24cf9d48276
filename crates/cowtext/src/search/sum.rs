// Rolling-sum search.
// Keeps a wrapping sum of the current window and compares units only when
// the sums agree. The first window is summed up front, then each step
// drops the outgoing unit and adds the incoming one.

use crate::unit::Unit;

#[inline]
fn window_sum<U: Unit>(w: &[U]) -> u32 {
    w.iter().fold(0u32, |acc, u| acc.wrapping_add(u.to_u32()))
}

pub fn sum_search<U: Unit>(p: &[U], d: &[U]) -> Option<usize> {
    let ps = p.len();
    let ds = d.len();
    if ps == 0 {
        return Some(0);
    }
    if ps > ds {
        return None;
    }

    let psum = window_sum(p);
    let mut sum = window_sum(&d[..ps]);
    let mut j = 0usize;
    loop {
        if sum == psum && &d[j..j + ps] == p {
            return Some(j);
        }
        if j + ps >= ds {
            return None;
        }
        sum = sum
            .wrapping_sub(d[j].to_u32())
            .wrapping_add(d[j + ps].to_u32());
        j += 1;
    }
}
