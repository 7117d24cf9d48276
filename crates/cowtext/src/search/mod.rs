// Exact-substring search algorithms and the glob matcher.
// All three algorithms share one signature and must agree on every input;
// quick search is the default used by the string type and pattern facade.

mod glob;
mod kmp;
mod quick;
mod sum;

pub use glob::{GlobFlags, glob_match, glob_matches};
pub use kmp::kmp_search;
pub use quick::{quick_search, quick_search_nocase};
pub use sum::sum_search;

use crate::unit::Unit;

/// Which exact-substring algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Kmp,
    Quick,
    QuickNoCase,
    Sum,
}

/// First offset of `pattern` inside `data`, or `None`.
pub fn find_with<U: Unit>(algo: Algorithm, pattern: &[U], data: &[U]) -> Option<usize> {
    match algo {
        Algorithm::Kmp => kmp_search(pattern, data),
        Algorithm::Quick => quick_search(pattern, data),
        Algorithm::QuickNoCase => quick_search_nocase(pattern, data),
        Algorithm::Sum => sum_search(pattern, data),
    }
}
