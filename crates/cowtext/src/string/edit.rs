// Positional editing, shaping and tokenizing operations.
// Out-of-range positions are clamped or ignored, never reported.

use super::Str;
use crate::unit::Unit;

impl<U: Unit> Str<U> {
    /// Insert `src` at `pos`; positions past the end are ignored.
    pub fn ins(&mut self, pos: usize, src: &[U]) {
        if pos > self.len() || src.is_empty() {
            return;
        }
        self.b.detach().insert_units(pos, src);
    }

    pub fn ins_unit(&mut self, pos: usize, u: U) {
        self.ins(pos, &[u]);
    }

    /// Delete up to `count` units starting at `pos`.
    pub fn del(&mut self, pos: usize, count: usize) {
        if pos > self.len() {
            return;
        }
        self.b.detach().delete_units(pos, count);
    }

    /// Replace every occurrence of `out` with `inp`, left to right.
    pub fn replace(&mut self, out: &[U], inp: &[U]) {
        if out.is_empty() {
            return;
        }
        let mut z = self.find(out, 0);
        while let Some(pos) = z {
            self.del(pos, out.len());
            self.ins(pos, inp);
            z = self.find(out, pos + inp.len());
        }
    }

    /// `count` units from `pos`; negative `pos` counts from the end,
    /// `count == -1` extends to the end. Clamped to the available data.
    pub fn substr(&self, pos: isize, count: isize) -> Str<U> {
        let sl = self.len() as isize;
        let pos = if pos < 0 { (sl + pos).max(0) } else { pos };
        if pos >= sl {
            return Str::new();
        }
        let count = if count == -1 { sl - pos } else { count };
        if count < 1 {
            return Str::new();
        }
        let count = count.min(sl - pos) as usize;
        let pos = pos as usize;
        Str::from_units(&self.units()[pos..pos + count])
    }

    /// Leftmost `count` units.
    pub fn left(&self, count: isize) -> Str<U> {
        self.substr(0, count)
    }

    /// Rightmost `count` units.
    pub fn right(&self, count: isize) -> Str<U> {
        self.substr(self.len() as isize - count, count)
    }

    /// Truncate in place to the leftmost `count` units.
    pub fn sleft(&mut self, count: usize) {
        if count < self.len() {
            self.b.detach().truncate(count);
        }
    }

    /// Keep only the rightmost `count` units.
    pub fn sright(&mut self, count: usize) {
        let sl = self.len();
        if count < sl {
            self.b.detach().delete_units(0, sl - count);
        }
    }

    /// Trim `count` units off the front.
    pub fn trim_left(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        if count >= self.len() {
            self.clear();
        } else {
            self.b.detach().delete_units(0, count);
        }
    }

    /// Trim `count` units off the end.
    pub fn trim_right(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let sl = self.len();
        if count >= sl {
            self.clear();
        } else {
            self.b.detach().truncate(sl - count);
        }
    }

    /// Drop the last unit (perl-ish chop).
    pub fn chop(&mut self) {
        self.trim_right(1);
    }

    /// Strip every leading unit found in `set`.
    pub fn cut_left(&mut self, set: &[U]) {
        let n = self
            .units()
            .iter()
            .take_while(|u| set.contains(u))
            .count();
        self.trim_left(n);
    }

    /// Strip every trailing unit found in `set`.
    pub fn cut_right(&mut self, set: &[U]) {
        let n = self
            .units()
            .iter()
            .rev()
            .take_while(|u| set.contains(u))
            .count();
        self.trim_right(n);
    }

    /// Strip `set` units from both ends.
    pub fn cut(&mut self, set: &[U]) {
        self.cut_right(set);
        self.cut_left(set);
    }

    /// Strip plain spaces from both ends.
    pub fn cut_spc(&mut self) {
        self.cut(&[U::from_u32(b' ' as u32)]);
    }

    /// Expand to a field of |`width`| units filled with `fill`; the sign of
    /// `width` picks the justify side (positive pads on the left). Content
    /// already at or past the width is left alone.
    pub fn pad(&mut self, width: isize, fill: U) {
        let w = width.unsigned_abs();
        let sl = self.len();
        if w <= sl {
            return;
        }
        let filler = vec![fill; w - sl];
        if width > 0 {
            self.ins(0, &filler);
        } else {
            self.cat_units(&filler);
        }
    }

    /// Insert `delim` as a thousands separator, honoring a decimal point.
    pub fn comma(&mut self, delim: U) {
        let dot = self
            .rfind_unit(U::from_u32(b'.' as u32))
            .unwrap_or(self.len()) as isize;
        let mut pos = dot - 3;
        while pos > 0 {
            self.ins_unit(pos as usize, delim);
            pos -= 3;
        }
    }

    /// Repeat the current content `n` times ("1" * 5 = "11111").
    pub fn mul(&mut self, n: usize) {
        if n == 0 {
            self.clear();
            return;
        }
        let once: Vec<U> = self.units().to_vec();
        let buf = self.b.detach();
        for _ in 1..n {
            buf.cat_units(&once);
        }
    }

    pub fn reverse(&mut self) {
        self.b.detach().units_mut().reverse();
    }

    /// ASCII uppercase, in place.
    pub fn up(&mut self) {
        for u in self.b.detach().units_mut() {
            *u = u.to_upper();
        }
    }

    /// ASCII lowercase, in place.
    pub fn low(&mut self) {
        for u in self.b.detach().units_mut() {
            *u = u.to_lower();
        }
    }

    /// Swap the case of every ASCII letter.
    pub fn flip_case(&mut self) {
        for u in self.b.detach().units_mut() {
            *u = u.flip_case();
        }
    }

    /// Translate units listed in `from` to the unit at the same position in
    /// `to`. The two tables must be the same length or nothing happens.
    pub fn tr(&mut self, from: &[U], to: &[U]) {
        if from.len() != to.len() {
            return;
        }
        for u in self.b.detach().units_mut() {
            if let Some(i) = from.iter().position(|c| c == u) {
                *u = to[i];
            }
        }
    }

    /// Squeeze runs of any unit from `set` down to a single occurrence.
    pub fn squeeze(&mut self, set: &[U]) {
        if set.is_empty() || self.is_empty() {
            return;
        }
        let mut out: Vec<U> = Vec::with_capacity(self.len());
        let mut run: Option<U> = None;
        for &u in self.units() {
            if run == Some(u) {
                continue;
            }
            run = if set.contains(&u) { Some(u) } else { None };
            out.push(u);
        }
        if out.len() != self.len() {
            self.set_units(&out);
        }
    }

    /// Take the run before the first delimiter and remove it, together with
    /// that delimiter, from this string. `None` once the next token would be
    /// empty.
    pub fn word(&mut self, delimiters: &[U]) -> Option<Str<U>> {
        let z = self
            .units()
            .iter()
            .position(|u| delimiters.contains(u))
            .unwrap_or(self.len());
        if z == 0 {
            return None;
        }
        let tok = Str::from_units(&self.units()[..z]);
        if z < self.len() {
            self.trim_left(z + 1); // token plus the delimiter itself
        } else {
            self.clear();
        }
        Some(tok)
    }

    /// Rear-side tokenizer: the run after the last delimiter.
    pub fn rword(&mut self, delimiters: &[U]) -> Option<Str<U>> {
        if self.is_empty() {
            return None;
        }
        match self.units().iter().rposition(|u| delimiters.contains(u)) {
            Some(p) => {
                let tok = Str::from_units(&self.units()[p + 1..]);
                self.sleft(p);
                Some(tok)
            }
            None => {
                let tok = self.clone();
                self.clear();
                Some(tok)
            }
        }
    }

    /// Reduce to `width` units by replacing the middle with "...".
    pub fn dot_reduce(&mut self, width: usize) {
        let sl = self.len();
        if sl <= width || width < 4 {
            return;
        }
        let pos = (width - 3) / 2;
        self.del(pos, sl - width + 3);
        let dots = [U::from_u32(b'.' as u32); 3];
        self.ins(pos, &dots);
    }
}
