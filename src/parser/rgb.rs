use super::args::{parse_alpha, parse_channel, split_arguments};
use crate::error::{ChannelName, Result};
use crate::types::Channels;

/// `rgb(r,g,b)` with integer channels; alpha is always 255.
pub fn parse_rgb(text: &str) -> Result<Channels> {
    let [r, g, b] = split_arguments::<3>(text, "rgb(")?;
    Ok(Channels::opaque(
        parse_channel(text, r, ChannelName::Red)?,
        parse_channel(text, g, ChannelName::Green)?,
        parse_channel(text, b, ChannelName::Blue)?,
    ))
}

/// `rgba(r,g,b,a)` with integer channels and a float alpha in [0, 1].
pub fn parse_rgba(text: &str) -> Result<Channels> {
    let [r, g, b, a] = split_arguments::<4>(text, "rgba(")?;
    Ok(Channels::new(
        parse_channel(text, r, ChannelName::Red)?,
        parse_channel(text, g, ChannelName::Green)?,
        parse_channel(text, b, ChannelName::Blue)?,
        parse_alpha(text, a)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConversionError, ErrorKind};

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(parse_rgb("rgb(1,1,0)").unwrap(), Channels::opaque(1, 1, 0));
    }

    #[test]
    fn rgba_alpha() {
        assert_eq!(parse_rgba("rgba(255,255,0,0)").unwrap(), Channels::new(255, 255, 0, 0));
        assert_eq!(parse_rgba("rgba(255,255,0,1)").unwrap(), Channels::new(255, 255, 0, 255));
        assert_eq!(parse_rgba("rgba(0,0,0,0.5)").unwrap(), Channels::new(0, 0, 0, 128));
    }

    #[test]
    fn out_of_range_channel_names_the_channel() {
        let err = parse_rgb("rgb(1,999,1)").unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidChannelValue {
                channel: ChannelName::Green,
                value: "999".to_string(),
            }
        );
    }

    #[test]
    fn out_of_range_alpha() {
        assert_eq!(parse_rgba("rgba(1,1,1,2)").unwrap_err().kind(), ErrorKind::InvalidChannelValue);
    }

    #[test]
    fn argument_count_is_strict() {
        assert_eq!(parse_rgb("rgb(1,1,1,1)").unwrap_err().kind(), ErrorKind::MalformedArgumentList);
        assert_eq!(parse_rgba("rgba(1,1,1)").unwrap_err().kind(), ErrorKind::MalformedArgumentList);
    }

    #[test]
    fn alpha_must_be_numeric() {
        assert_eq!(parse_rgba("rgba(1,1,1,x)").unwrap_err().kind(), ErrorKind::MalformedArgumentList);
    }
}
