//! RGB color handling for XPM color tables.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when parsing a hex color string.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("hex color must look like #RRGGBB, got {0:?}")]
    BadFormat(String),

    #[error("invalid hex digits in {0:?}")]
    BadDigits(String),
}

/// An opaque RGB color parsed from a `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string.
    ///
    /// XPM color tables only carry 6-digit hex colors, so shorter or longer
    /// forms are rejected rather than guessed at.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let hex = s.strip_prefix('#').ok_or_else(|| ColorError::BadFormat(s.to_string()))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::BadFormat(s.to_string()));
        }

        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::BadDigits(s.to_string()))
        };

        Ok(Self {
            r: byte(0..2)?,
            g: byte(2..4)?,
            b: byte(4..6)?,
        })
    }

    /// The color as an `[r, g, b]` triple.
    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let c = Rgb::from_hex("#FF5500").unwrap();
        assert_eq!(c, Rgb::new(255, 85, 0));
        assert_eq!(c.as_array(), [255, 85, 0]);
    }

    #[test]
    fn test_parse_lowercase_hex() {
        assert_eq!(Rgb::from_hex("#ff00ff").unwrap(), Rgb::new(255, 0, 255));
    }

    #[test]
    fn test_reject_missing_hash() {
        assert!(Rgb::from_hex("FF5500").is_err());
    }

    #[test]
    fn test_reject_short_and_long_forms() {
        assert!(Rgb::from_hex("#FFF").is_err());
        assert!(Rgb::from_hex("#FF5500AA").is_err());
    }

    #[test]
    fn test_reject_non_hex_digits() {
        assert!(Rgb::from_hex("#GG0000").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let c = Rgb::from_hex("#1A2B3C").unwrap();
        assert_eq!(c.to_string(), "#1A2B3C");
    }
}
