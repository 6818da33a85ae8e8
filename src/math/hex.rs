use super::unit_to_byte;

/// Decode the digits of a hex color (without the leading `#`) to RGBA.
///
/// - 3 or 4 digits: one nibble per channel (4-bit depth), each scaled from
///   0-15 to 0-255. A missing alpha nibble reads as `f`.
/// - 6 or 8 digits: one byte per channel. A missing alpha byte reads as `ff`.
///
/// Returns `None` for any other width or a non-hex digit.
pub fn decode_hex_digits(digits: &str) -> Option<[u8; 4]> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        3 | 4 => {
            let mut nibbles = [0xf_u8; 4];
            for (slot, c) in nibbles.iter_mut().zip(digits.chars()) {
                *slot = c.to_digit(16)? as u8;
            }
            Some(nibbles.map(expand_nibble))
        }
        6 | 8 => {
            let mut bytes = [0xff_u8; 4];
            for (i, slot) in bytes.iter_mut().enumerate().take(digits.len() / 2) {
                *slot = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok()?;
            }
            Some(bytes)
        }
        _ => None,
    }
}

/// 4-bit channel to 8-bit: `round(n * 255 / 15)`.
fn expand_nibble(n: u8) -> u8 {
    unit_to_byte(f64::from(n) / 15.0)
}
