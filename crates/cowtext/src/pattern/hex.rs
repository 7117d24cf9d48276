// Hex pattern decoding: "63 6F 77" style strings into raw bytes.
// Digits come in pairs, whitespace between pairs is free-form.

use crate::error::{TextError, TextResult};

fn hex_code(ch: u8) -> Option<u8> {
    match ch.to_ascii_uppercase() {
        c @ b'0'..=b'9' => Some(c - b'0'),
        c @ b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decode a whitespace-separated hex string into bytes. A lone digit or
/// any non-hex character fails, as does an all-whitespace input.
pub fn hex_to_pattern(s: &str) -> TextResult<Vec<u8>> {
    let mut out = Vec::new();
    let mut it = s.bytes().peekable();
    loop {
        while matches!(it.peek(), Some(b' ' | b'\t')) {
            it.next();
        }
        let Some(hi) = it.next() else {
            break;
        };
        let hi = hex_code(hi).ok_or(TextError::BadHexPattern)?;
        let lo = it
            .next()
            .and_then(hex_code)
            .ok_or(TextError::BadHexPattern)?;
        out.push((hi << 4) | lo);
    }
    if out.is_empty() {
        return Err(TextError::BadHexPattern);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_spaced_pairs() {
        assert_eq!(hex_to_pattern("63 6F 77 74 65 78 74").unwrap(), b"cowtext");
        assert_eq!(hex_to_pattern("4a4B").unwrap(), b"JK");
    }

    #[test]
    fn test_bad_input_is_rejected() {
        assert!(hex_to_pattern("5").is_err());
        assert!(hex_to_pattern("5g").is_err());
        assert!(hex_to_pattern("").is_err());
        assert!(hex_to_pattern("  ").is_err());
    }
}
