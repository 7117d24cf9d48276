// Numeric formatting and parsing.
// Integers go through itoa; floats print with 10 fractional digits and the
// trailing zeros (and a bare point) trimmed off.

use super::Str;
use crate::unit::Unit;

impl<U: Unit> Str<U> {
    pub fn set_i64(&mut self, n: i64) {
        let mut buf = itoa::Buffer::new();
        self.set_str(buf.format(n));
    }

    pub fn set_f64(&mut self, d: f64) {
        let mut s = format!("{:.10}", d);
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        self.set_str(&s);
    }

    /// Store a double with the fraction dropped.
    pub fn set_f64_int(&mut self, d: f64) {
        self.set_str(&format!("{:.0}", d));
    }

    /// Parse a leading integer, strtol style: optional whitespace and sign,
    /// then digits; trailing garbage is ignored, no digits means zero.
    pub fn to_i64(&self) -> i64 {
        let s = self.to_string_lossy();
        let t = s.trim_start();
        let mut end = 0;
        for (i, c) in t.char_indices() {
            if (i == 0 && (c == '+' || c == '-')) || c.is_ascii_digit() {
                end = i + c.len_utf8();
            } else {
                break;
            }
        }
        t[..end].parse::<i64>().unwrap_or(0)
    }

    /// Parse a leading float (sign, digits, fraction, optional exponent).
    pub fn to_f64(&self) -> f64 {
        let s = self.to_string_lossy();
        let t = s.trim_start();
        let bytes = t.as_bytes();
        let mut i = 0;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i < bytes.len() && bytes[i] == b'.' {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
        }
        if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
            let mut j = i + 1;
            if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                j += 1;
            }
            if j < bytes.len() && bytes[j].is_ascii_digit() {
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }
                i = j;
            }
        }
        t[..i].parse::<f64>().unwrap_or(0.0)
    }

    /// True when the space-trimmed content is one or more plain digits.
    pub fn is_int(&self) -> bool {
        let mut t = self.clone();
        t.cut_spc();
        !t.is_empty() && t.count_units(&digits::<U>(), 0) == t.len()
    }

    /// True for `digits.digits` with exactly one point and no exponent.
    pub fn is_double(&self) -> bool {
        let mut t = self.clone();
        t.cut_spc();
        let dc = t.count_units(&digits::<U>(), 0);
        let cc = t.count_units(&[U::from_u32(b'.' as u32)], 0);
        !t.is_empty() && dc + cc == t.len() && cc == 1
    }

    /// Parse a hex string after trimming spaces; any non-hex digit yields
    /// zero.
    pub fn hex_to_i64(&self) -> i64 {
        let mut t = self.clone();
        t.cut_spc();
        t.up();
        let mut acc: i64 = 0;
        for &u in t.units() {
            let v = u.to_u32();
            let d = match v {
                0x30..=0x39 => (v - 0x30) as i64,
                0x41..=0x46 => (v - 0x41 + 10) as i64,
                _ => return 0,
            };
            acc = acc.wrapping_mul(16).wrapping_add(d);
        }
        acc
    }
}

fn digits<U: Unit>() -> [U; 10] {
    let mut d = [U::NUL; 10];
    for (i, slot) in d.iter_mut().enumerate() {
        *slot = U::from_u32(b'0' as u32 + i as u32);
    }
    d
}
