// Line-oriented file load and save: one element per line, trailing
// newlines stripped on load.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::StrArray;
use crate::error::TextResult;
use crate::unit::Unit;

impl<U: Unit> StrArray<U> {
    /// Replace the contents with the lines of `path`.
    pub fn fload(&mut self, path: impl AsRef<Path>) -> TextResult<()> {
        let f = File::open(path)?;
        self.fload_reader(BufReader::new(f))
    }

    pub fn fload_reader<R: BufRead>(&mut self, mut r: R) -> TextResult<()> {
        self.undef();
        let mut line = String::new();
        loop {
            line.clear();
            if r.read_line(&mut line)? == 0 {
                break;
            }
            while line.ends_with('\n') {
                line.pop();
            }
            if line.ends_with('\r') {
                line.pop();
            }
            self.push_str(&line);
        }
        Ok(())
    }

    /// Write one element per line.
    pub fn fsave(&self, path: impl AsRef<Path>) -> TextResult<()> {
        let f = File::create(path)?;
        let mut w = BufWriter::new(f);
        self.fsave_writer(&mut w)?;
        w.flush()?;
        Ok(())
    }

    pub fn fsave_writer<W: Write>(&self, w: &mut W) -> TextResult<()> {
        for e in self.elements() {
            w.write_all(e.to_string_lossy().as_bytes())?;
            w.write_all(b"\n")?;
        }
        Ok(())
    }
}
