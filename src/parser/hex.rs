use crate::error::{ConversionError, Result};
use crate::math::hex::decode_hex_digits;
use crate::types::{Channels, Notation};

/// Width-only classification of `#`-prefixed text.
pub fn hex_notation(text: &str) -> Result<Notation> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    match digits.len() {
        3 => Ok(Notation::Hex3),
        4 => Ok(Notation::Hex4),
        6 => Ok(Notation::Hex6),
        8 => Ok(Notation::Hex8),
        _ => Err(ConversionError::MalformedHex(text.to_string())),
    }
}

/// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex(text: &str) -> Result<Channels> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    decode_hex_digits(digits)
        .map(Channels::from)
        .ok_or_else(|| ConversionError::MalformedHex(text.to_string()))
}
