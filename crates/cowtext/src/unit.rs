// Fixed-width code unit abstraction
// One generic implementation serves both the byte (u8) and wide (u16) widths.

/// A fixed-width code unit stored in string buffers.
///
/// Case mapping is ASCII-only by design; units outside the ASCII range are
/// returned unchanged.
pub trait Unit:
    Copy + Eq + Ord + Default + std::fmt::Debug + std::hash::Hash + 'static
{
    /// Terminator value kept one past the logical length of every buffer.
    const NUL: Self;

    fn to_u32(self) -> u32;
    fn from_u32(v: u32) -> Self;

    /// Encode a `&str` into a unit sequence for this width.
    fn units_from_str(s: &str) -> Vec<Self>;
    /// Decode a unit sequence back to `String`, lossy on invalid data.
    fn units_to_string(units: &[Self]) -> String;

    #[inline]
    fn to_upper(self) -> Self {
        let v = self.to_u32();
        if (b'a' as u32..=b'z' as u32).contains(&v) {
            Self::from_u32(v - 32)
        } else {
            self
        }
    }

    #[inline]
    fn to_lower(self) -> Self {
        let v = self.to_u32();
        if (b'A' as u32..=b'Z' as u32).contains(&v) {
            Self::from_u32(v + 32)
        } else {
            self
        }
    }

    /// Swap the case of an ASCII letter, leave anything else alone.
    #[inline]
    fn flip_case(self) -> Self {
        let v = self.to_u32();
        if (b'a' as u32..=b'z' as u32).contains(&v) {
            Self::from_u32(v - 32)
        } else if (b'A' as u32..=b'Z' as u32).contains(&v) {
            Self::from_u32(v + 32)
        } else {
            self
        }
    }
}

impl Unit for u8 {
    const NUL: Self = 0;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_u32(v: u32) -> Self {
        v as u8
    }

    fn units_from_str(s: &str) -> Vec<Self> {
        s.as_bytes().to_vec()
    }

    fn units_to_string(units: &[Self]) -> String {
        String::from_utf8_lossy(units).into_owned()
    }
}

impl Unit for u16 {
    const NUL: Self = 0;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_u32(v: u32) -> Self {
        v as u16
    }

    fn units_from_str(s: &str) -> Vec<Self> {
        s.encode_utf16().collect()
    }

    fn units_to_string(units: &[Self]) -> String {
        String::from_utf16_lossy(units)
    }
}
