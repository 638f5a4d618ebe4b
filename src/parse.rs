//! Parse and format hex color strings of the form `"#RRGGBB"`. The leading
//! `#` is optional when parsing.

use std::fmt;
use std::str::FromStr;

use crate::Color;

/// The ways a hex color string can fail to parse.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    /// The string did not contain exactly six hexadecimal digits.
    #[error("expected 6 hexadecimal digits, found {0}")]
    InvalidLength(usize),
    /// The string contained a character that is not a hexadecimal digit.
    #[error("invalid hexadecimal digit {0:?}")]
    InvalidDigit(char),
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        let count = digits.chars().count();
        if count != 6 {
            return Err(ParseColorError::InvalidLength(count));
        }

        let mut hex = 0;
        for c in digits.chars() {
            let digit = c.to_digit(16).ok_or(ParseColorError::InvalidDigit(c))?;
            hex = (hex << 4) | digit;
        }

        Ok(Color::Hex(hex))
    }
}

impl fmt::Display for Color {
    /// Format the color as a lowercase hex string with a leading `#`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.to_hex())
    }
}
