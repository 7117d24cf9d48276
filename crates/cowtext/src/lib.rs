// cowtext
// Value-semantics text toolkit: copy-on-write string, string array and
// string-keyed trie map over shared quantized buffers, with substring,
// glob and regex search on top.

#[cfg(test)]
mod test;

pub mod array;
pub mod cow;
pub mod error;
pub mod pattern;
pub mod search;
pub mod string;
pub mod trie;
pub mod unit;

#[cfg(feature = "serde")]
pub mod serde;

pub use array::{ByteArray, StrArray, WideArray};
pub use error::{TextError, TextResult};
pub use pattern::{Matcher, hex_to_pattern, join, split, split_simple};
pub use search::{Algorithm, GlobFlags, glob_match, glob_matches};
pub use string::{ByteStr, Str, WideStr};
pub use trie::{ByteMap, StrMap, WideMap};
pub use unit::Unit;
