use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// An 8-bit sRGB triple. Channels are kept in `[0, 255]`; nothing here does
/// any color-space conversion.
#[allow(non_camel_case_types)]
pub type sRGB = [u8; 3];

pub fn as_index(c: &sRGB) -> usize {
    // RGB order, same packing as the hex notation.
    let mut out: usize = c[2] as usize;
    out |= (c[1] as usize) << 8;
    out |= (c[0] as usize) << 16;
    out
}

pub fn from_index(i: usize) -> sRGB {
    [(i >> 16) as u8, (i >> 8) as u8, i as u8]
}

pub fn to_string(c: &sRGB) -> String {
    format!("#{:06x}", as_index(c)).to_uppercase()
}

/// Appends a fully opaque alpha channel.
pub fn opaque(c: &sRGB) -> [u8; 4] {
    [c[0], c[1], c[2], 0xFF]
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("color {0:?} does not start with '#'")]
    MissingHash(String),
    #[error("color {0:?} must have exactly 6 hex digits after '#'")]
    BadLength(String),
    #[error("color {0:?} contains non-hex digits")]
    InvalidDigits(String),
}

static HEX_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{6}$").expect("hex regex is valid"));

/// Parses `#RRGGBB` (case-insensitive). There is no alpha form.
pub fn parse_hex(s: &str) -> Result<sRGB, ColorError> {
    let digits = s
        .strip_prefix('#')
        .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
    if digits.chars().count() != 6 {
        return Err(ColorError::BadLength(s.to_string()));
    }
    if !HEX_DIGITS.is_match(digits) {
        return Err(ColorError::InvalidDigits(s.to_string()));
    }
    let n = usize::from_str_radix(digits, 16)
        .map_err(|_| ColorError::InvalidDigits(s.to_string()))?;
    Ok(from_index(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    #[test]
    fn test_parse_known_colors() {
        assert_eq!(parse_hex("#D93A33"), Ok([0xD9, 0x3A, 0x33]));
        assert_eq!(parse_hex("#d93a33"), Ok([0xD9, 0x3A, 0x33]));
        assert_eq!(parse_hex("#000000"), Ok([0x00, 0x00, 0x00]));
        assert_eq!(parse_hex("#FFFFFF"), Ok([0xFF, 0xFF, 0xFF]));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(
            parse_hex("not-a-color"),
            Err(ColorError::MissingHash("not-a-color".to_string()))
        );
        assert!(matches!(parse_hex("D93A33"), Err(ColorError::MissingHash(_))));
        assert!(matches!(parse_hex("#D93A3"), Err(ColorError::BadLength(_))));
        assert!(matches!(parse_hex("#D93A33FF"), Err(ColorError::BadLength(_))));
        assert!(matches!(parse_hex("#"), Err(ColorError::BadLength(_))));
        assert!(matches!(parse_hex("#GG0000"), Err(ColorError::InvalidDigits(_))));
        assert!(matches!(parse_hex("#+12345"), Err(ColorError::InvalidDigits(_))));
        // Six characters but not six bytes.
        assert!(matches!(parse_hex("#ééé000"), Err(ColorError::InvalidDigits(_))));
    }

    #[test]
    fn test_string_roundtrip() {
        for (r, g, b) in iproduct!((0x00..=0xFF).step_by(17), (0x00..=0xFF).step_by(5), [0x00, 0x7F, 0xFF]) {
            let c: sRGB = [r, g, b];
            assert_eq!(parse_hex(&to_string(&c)), Ok(c));
        }
    }

    #[test]
    fn test_to_string_is_upper_case() {
        assert_eq!(to_string(&[0xec, 0xbd, 0x50]), "#ECBD50");
        assert_eq!(to_string(&[0x01, 0x02, 0x03]), "#010203");
    }

    #[test]
    fn test_opaque() {
        assert_eq!(opaque(&[1, 2, 3]), [1, 2, 3, 0xFF]);
    }
}
