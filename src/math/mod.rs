pub mod hex;
pub mod hsl;

/// Scale a unit fraction (0.0-1.0) to a byte, rounding half up.
/// `value * 255 + 0.5`, truncated. Callers validate the range first.
pub fn unit_to_byte(value: f64) -> u8 {
    (value * 255.0 + 0.5) as u8
}
