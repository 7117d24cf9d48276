pub mod test_cow;
pub mod test_pattern;
pub mod test_search;
pub mod test_trie;


// shared scenario line used across the suites
pub const SCENARIO: &str = "this is, just a simple. but fixed, nonsense test, voila :)";
