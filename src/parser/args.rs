use crate::error::{ChannelName, ConversionError, Result};
use crate::math::unit_to_byte;

/// Split the argument list of a functional notation such as `rgb(1,2,3)`.
///
/// `text` is normalized (no whitespace) and already known to start with
/// `prefix` and end with `)`. Fails unless there are exactly `N` arguments.
pub fn split_arguments<'a, const N: usize>(text: &'a str, prefix: &str) -> Result<[&'a str; N]> {
    let inner = text
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| ConversionError::malformed_args(text, "unbalanced parentheses"))?;

    let parts: Vec<&str> = inner.split(',').collect();
    let found = parts.len();
    parts.try_into().map_err(|_| {
        ConversionError::malformed_args(text, format!("expected {N} arguments, found {found}"))
    })
}

/// Splits an integer literal `[+-]?[0-9]+` into (negative, digits).
fn integer_literal(token: &str) -> Option<(bool, &str)> {
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((negative, digits))
}

/// `Ok(None)` for a well-formed integer too large for `i64`.
fn parse_integer(text: &str, token: &str) -> Result<Option<i64>> {
    if integer_literal(token).is_none() {
        return Err(ConversionError::malformed_args(text, format!("{token:?} is not an integer")));
    }
    Ok(token.parse::<i64>().ok())
}

/// An integer hue in degrees. Any value is accepted; the result is reduced
/// modulo 360 (sign kept), so arbitrarily long literals never overflow.
pub fn parse_hue(text: &str, token: &str) -> Result<i64> {
    let (negative, digits) = integer_literal(token).ok_or_else(|| {
        ConversionError::malformed_args(text, format!("{token:?} is not an integer"))
    })?;
    let degrees = digits
        .bytes()
        .fold(0_i64, |acc, b| (acc * 10 + i64::from(b - b'0')) % 360);
    Ok(if negative { -degrees } else { degrees })
}

/// An integer color channel in 0-255. Out-of-range values are rejected, not clamped.
pub fn parse_channel(text: &str, token: &str, channel: ChannelName) -> Result<u8> {
    parse_integer(text, token)?
        .and_then(|value| u8::try_from(value).ok())
        .ok_or_else(|| ConversionError::out_of_range(channel, token))
}

/// A float alpha in [0, 1], returned as a byte.
pub fn parse_alpha(text: &str, token: &str) -> Result<u8> {
    let not_a_number = || ConversionError::malformed_args(text, format!("{token:?} is not a number"));
    let alpha = token.parse::<f64>().map_err(|_| not_a_number())?;
    // `nan`, `inf` and `infinity` parse, but are words rather than numbers
    if token.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e') {
        return Err(not_a_number());
    }
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ConversionError::out_of_range(ChannelName::Alpha, token));
    }
    Ok(unit_to_byte(alpha))
}

/// An integer percentage such as `25%`, returned as a unit fraction.
pub fn parse_percentage(text: &str, token: &str, channel: ChannelName) -> Result<f64> {
    let digits = token.strip_suffix('%').ok_or_else(|| {
        ConversionError::malformed_args(text, format!("{token:?} is not a percentage"))
    })?;
    let value = parse_integer(text, digits)?
        .filter(|value| (0..=100).contains(value))
        .ok_or_else(|| ConversionError::out_of_range(channel, token))?;
    Ok(value as f64 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn splits_exact_count() {
        let [a, b, c] = split_arguments::<3>("rgb(1,2,3)", "rgb(").unwrap();
        assert_eq!((a, b, c), ("1", "2", "3"));
    }

    #[test]
    fn wrong_count_is_malformed() {
        let err = split_arguments::<3>("rgb(1,2)", "rgb(").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedArgumentList);
        let err = split_arguments::<3>("rgb(1,2,3,4)", "rgb(").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedArgumentList);
        let err = split_arguments::<3>("rgb()", "rgb(").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedArgumentList);
    }

    #[test]
    fn channel_bounds() {
        assert_eq!(parse_channel("", "0", ChannelName::Red).unwrap(), 0);
        assert_eq!(parse_channel("", "255", ChannelName::Red).unwrap(), 255);
        let err = parse_channel("", "256", ChannelName::Red).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidChannelValue);
        let err = parse_channel("", "-1", ChannelName::Green).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidChannelValue);
    }

    #[test]
    fn channel_must_be_integer() {
        for token in ["1.5", "", "x", "1e2"] {
            let err = parse_channel("", token, ChannelName::Blue).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedArgumentList, "{token:?}");
        }
    }

    #[test]
    fn alpha_rounds_half_up() {
        assert_eq!(parse_alpha("", "0.5").unwrap(), 128);
        assert_eq!(parse_alpha("", "0").unwrap(), 0);
        assert_eq!(parse_alpha("", "1").unwrap(), 255);
        assert_eq!(parse_alpha("", ".25").unwrap(), 64);
    }

    #[test]
    fn alpha_bounds() {
        for token in ["2", "-0.1", "1.01"] {
            let err = parse_alpha("", token).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidChannelValue, "{token:?}");
        }
    }

    #[test]
    fn alpha_rejects_non_numbers() {
        for token in ["nan", "inf", "half", ""] {
            let err = parse_alpha("", token).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedArgumentList, "{token:?}");
        }
    }

    #[test]
    fn oversized_integers_are_out_of_range() {
        let huge = "99999999999999999999";
        let err = parse_channel("", huge, ChannelName::Red).unwrap_err();
        assert_eq!(err, ConversionError::out_of_range(ChannelName::Red, huge));
        let err = parse_channel("", "-99999999999999999999", ChannelName::Red).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidChannelValue);
        let err = parse_percentage("", "100000000000000000000%", ChannelName::Lightness).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidChannelValue);
    }

    #[test]
    fn hue_reduces_modulo_360() {
        assert_eq!(parse_hue("", "220").unwrap(), 220);
        assert_eq!(parse_hue("", "580").unwrap(), 220);
        assert_eq!(parse_hue("", "-140").unwrap(), -140);
        assert_eq!(parse_hue("", "+360").unwrap(), 0);
        // 10^20 = 280 (mod 360)
        assert_eq!(parse_hue("", "99999999999999999999").unwrap(), 279);
        for token in ["1.5", "", "-", "x"] {
            let err = parse_hue("", token).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedArgumentList, "{token:?}");
        }
    }

    #[test]
    fn overflowing_alpha_is_out_of_range() {
        for token in ["1e400", "-1e400"] {
            let err = parse_alpha("", token).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidChannelValue, "{token:?}");
        }
        assert_eq!(parse_alpha("", "5e-1").unwrap(), 128);
    }

    #[test]
    fn percentage_requires_suffix() {
        assert_eq!(parse_percentage("", "25%", ChannelName::Saturation).unwrap(), 0.25);
        let err = parse_percentage("", "25", ChannelName::Saturation).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedArgumentList);
    }

    #[test]
    fn percentage_bounds() {
        assert_eq!(parse_percentage("", "100%", ChannelName::Lightness).unwrap(), 1.0);
        for token in ["101%", "-1%", "120%"] {
            let err = parse_percentage("", token, ChannelName::Lightness).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidChannelValue, "{token:?}");
        }
    }
}
