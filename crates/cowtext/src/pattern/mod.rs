// Pattern facade over three match modes: real regular expressions, plain
// substring find and hex-decoded binary find. The mode and flags come
// from a perl-ish option string: i m s x tune the regex engine (i also
// applies to the find modes), f h r pick the mode, last one wins.
//
// A match keeps a COW snapshot of the subject line, so captures stay
// valid and zero-copy even when the caller edits their string afterward.

mod hex;

pub use hex::hex_to_pattern;

use std::cell::RefCell;

use ahash::AHashMap;
use regex::bytes::{Regex, RegexBuilder};

use crate::array::StrArray;
use crate::error::{TextError, TextResult};
use crate::search;
use crate::string::Str;
use crate::unit::Unit;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum MatchMode {
    #[default]
    Regexp,
    Literal,
    Hex,
}

#[derive(Clone, Copy, Debug, Default)]
struct Options {
    mode: MatchMode,
    nocase: bool,
    multiline: bool,
    dotall: bool,
    extended: bool,
}

fn parse_options(opt: &str) -> TextResult<Options> {
    let mut o = Options::default();
    for c in opt.chars() {
        match c {
            'i' => o.nocase = true,
            'm' => o.multiline = true,
            's' => o.dotall = true,
            'x' => o.extended = true,
            'f' => o.mode = MatchMode::Literal,
            'h' => o.mode = MatchMode::Hex,
            'r' => o.mode = MatchMode::Regexp,
            other => return Err(TextError::BadOption(other)),
        }
    }
    Ok(o)
}

enum Prog {
    Re(Regex),
    Find { pat: Vec<u8>, nocase: bool },
}

/// A compiled pattern plus the state of its last match.
pub struct Matcher {
    prog: Option<Prog>,
    subject: Option<Str<u8>>,
    caps: Vec<Option<(usize, usize)>>,
    errstr: String,
}

impl Matcher {
    pub fn new() -> Self {
        Matcher {
            prog: None,
            subject: None,
            caps: Vec::new(),
            errstr: String::new(),
        }
    }

    /// Compile `pattern` under the given option string. On failure the
    /// matcher keeps no program and reports the error both ways, as a
    /// result and through [`Matcher::error_str`].
    pub fn compile(&mut self, pattern: &str, opt: &str) -> TextResult<()> {
        self.prog = None;
        self.subject = None;
        self.caps.clear();
        match self.build(pattern, opt) {
            Ok(prog) => {
                self.prog = Some(prog);
                self.errstr = String::from("OK");
                Ok(())
            }
            Err(e) => {
                self.errstr = e.to_string();
                Err(e)
            }
        }
    }

    fn build(&self, pattern: &str, opt: &str) -> TextResult<Prog> {
        let o = parse_options(opt)?;
        match o.mode {
            MatchMode::Regexp => {
                let re = RegexBuilder::new(pattern)
                    .case_insensitive(o.nocase)
                    .multi_line(o.multiline)
                    .dot_matches_new_line(o.dotall)
                    .ignore_whitespace(o.extended)
                    .build()?;
                Ok(Prog::Re(re))
            }
            MatchMode::Literal => {
                if pattern.is_empty() {
                    return Err(TextError::NoPattern);
                }
                Ok(Prog::Find {
                    pat: pattern.as_bytes().to_vec(),
                    nocase: o.nocase,
                })
            }
            MatchMode::Hex => Ok(Prog::Find {
                pat: hex_to_pattern(pattern)?,
                nocase: o.nocase,
            }),
        }
    }

    /// Whether a program is compiled and ready to match.
    pub fn is_ok(&self) -> bool {
        self.prog.is_some()
    }

    pub fn error_str(&self) -> &str {
        &self.errstr
    }

    /// Match `line` and return how many capture groups the match carries
    /// (group 0 included), zero for no match or no program. The find
    /// modes report a single group covering the found pattern.
    pub fn find(&mut self, line: &Str<u8>) -> usize {
        let Some(prog) = &self.prog else {
            self.errstr = String::from("no pattern compiled");
            return 0;
        };
        self.caps.clear();
        self.subject = Some(line.clone());
        match prog {
            Prog::Re(re) => match re.captures(line.units()) {
                Some(c) => {
                    self.caps = c
                        .iter()
                        .map(|g| g.map(|m| (m.start(), m.end())))
                        .collect();
                    self.caps.len()
                }
                None => 0,
            },
            Prog::Find { pat, nocase } => {
                let pos = if *nocase {
                    search::quick_search_nocase(pat, line.units())
                } else {
                    search::quick_search(pat, line.units())
                };
                match pos {
                    Some(p) => {
                        self.caps.push(Some((p, p + pat.len())));
                        1
                    }
                    None => 0,
                }
            }
        }
    }

    /// Text of capture group `n` from the last match, out of the COW
    /// snapshot taken at match time.
    pub fn capture(&self, n: usize) -> Option<Str<u8>> {
        let (s, e) = (*self.caps.get(n)?)?;
        let subj = self.subject.as_ref()?;
        if s == e {
            return Some(Str::new());
        }
        Some(subj.substr(s as isize, (e - s) as isize))
    }

    /// Start offset of capture group `n`.
    pub fn capture_start(&self, n: usize) -> Option<usize> {
        (*self.caps.get(n)?).map(|(s, _)| s)
    }

    /// End offset (exclusive) of capture group `n`.
    pub fn capture_end(&self, n: usize) -> Option<usize> {
        (*self.caps.get(n)?).map(|(_, e)| e)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

// Compiled regexes for the free-standing utilities. Splitting a large
// file line by line recompiles the same separator over and over without
// this.
thread_local! {
    static RE_CACHE: RefCell<AHashMap<String, Regex>> = RefCell::new(AHashMap::new());
}

fn cached_regex(pattern: &str) -> TextResult<Regex> {
    RE_CACHE.with(|c| {
        let mut c = c.borrow_mut();
        if let Some(re) = c.get(pattern) {
            return Ok(re.clone());
        }
        let re = Regex::new(pattern)?;
        c.insert(pattern.to_string(), re.clone());
        Ok(re)
    })
}

/// Split `source` on a regex separator. `maxcount` bounds the number of
/// produced fields, -1 means unbounded; the unsplit remainder becomes the
/// last field either way.
pub fn split(pattern: &str, source: &Str<u8>, maxcount: isize) -> TextResult<StrArray<u8>> {
    let re = cached_regex(pattern)?;
    let mut arr = StrArray::new();
    let mut maxcount = maxcount;
    let mut rest = source.units();
    while !rest.is_empty() {
        let Some(m) = re.find(rest) else {
            break;
        };
        if m.end() == 0 {
            break; // zero-width separator would never advance
        }
        if maxcount != -1 {
            maxcount -= 1;
            if maxcount == 0 {
                break;
            }
        }
        arr.push(&Str::from_units(&rest[..m.start()]));
        rest = &rest[m.end()..];
    }
    if !rest.is_empty() {
        arr.push(&Str::from_units(rest));
    }
    Ok(arr)
}

/// Split on an exact delimiter string.
pub fn split_simple<U: Unit>(delim: &[U], source: &Str<U>, maxcount: isize) -> StrArray<U> {
    let mut arr = StrArray::new();
    if delim.is_empty() {
        if !source.is_empty() {
            arr.push(source);
        }
        return arr;
    }
    let mut maxcount = maxcount;
    let mut rest = source.units();
    while let Some(pos) = search::quick_search(delim, rest) {
        if maxcount != -1 {
            maxcount -= 1;
            if maxcount == 0 {
                break;
            }
        }
        arr.push(&Str::from_units(&rest[..pos]));
        rest = &rest[pos + delim.len()..];
    }
    if !rest.is_empty() {
        arr.push(&Str::from_units(rest));
    }
    arr
}

/// Glue the array back into one string.
pub fn join<U: Unit>(arr: &StrArray<U>, glue: &[U]) -> Str<U> {
    let mut out = Str::new();
    let n = arr.count();
    for z in 0..n {
        out.cat(&arr.get(z as isize));
        if z + 1 < n {
            out.cat_units(glue);
        }
    }
    out
}

/// First regex match at or after `startpos`, as an absolute offset.
pub fn find_regexp(target: &Str<u8>, pattern: &str, startpos: usize) -> TextResult<Option<usize>> {
    let re = cached_regex(pattern)?;
    if startpos > target.len() {
        return Ok(None);
    }
    Ok(re
        .find(&target.units()[startpos..])
        .map(|m| startpos + m.start()))
}

/// Rightmost regex match start: suffixes are probed right to left, so an
/// overlapping later match wins over the leftmost one.
pub fn rfind_regexp(target: &Str<u8>, pattern: &str) -> TextResult<Option<usize>> {
    let re = cached_regex(pattern)?;
    let d = target.units();
    for start in (0..d.len()).rev() {
        if let Some(m) = re.find(&d[start..]) {
            return Ok(Some(start + m.start()));
        }
    }
    Ok(None)
}
