use super::args::{parse_alpha, parse_hue, parse_percentage, split_arguments};
use crate::error::{ChannelName, Result};
use crate::math::hsl::hsl_to_rgb;
use crate::types::Channels;

/// `hsl(h,s%,l%)`: integer hue in degrees, integer percentages.
pub fn parse_hsl(text: &str) -> Result<Channels> {
    let [h, s, l] = split_arguments::<3>(text, "hsl(")?;
    hsl_channels(text, h, s, l)
}

/// `hsla(h,s%,l%,a)`: the `hsl` path, then alpha from the fourth argument.
pub fn parse_hsla(text: &str) -> Result<Channels> {
    let [h, s, l, a] = split_arguments::<4>(text, "hsla(")?;
    let color = hsl_channels(text, h, s, l)?;
    Ok(color.with_alpha(parse_alpha(text, a)?))
}

fn hsl_channels(text: &str, h: &str, s: &str, l: &str) -> Result<Channels> {
    let hue = parse_hue(text, h)?;
    let saturation = parse_percentage(text, s, ChannelName::Saturation)?;
    let lightness = parse_percentage(text, l, ChannelName::Lightness)?;
    let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
    Ok(Channels::opaque(r, g, b))
}
