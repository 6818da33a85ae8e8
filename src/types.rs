use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConversionError;

/// Four 8-bit channels: the canonical output of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Channels {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Channels {
    pub const TRANSPARENT: Channels = Channels::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Lowercase hex: `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<[u8; 4]> for Channels {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Channels> for [u8; 4] {
    fn from(c: Channels) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parses with the builtin name table.
impl FromStr for Channels {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::Converter::new().convert(s)
    }
}

/// Which textual grammar matched an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Notation {
    /// `#rgb`
    Hex3,
    /// `#rgba`
    Hex4,
    /// `#rrggbb`
    Hex6,
    /// `#rrggbbaa`
    Hex8,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    /// A named color from the name table.
    Keyword,
    /// The literal `transparent`.
    Transparent,
}

impl Notation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex3 => "hex3",
            Self::Hex4 => "hex4",
            Self::Hex6 => "hex6",
            Self::Hex8 => "hex8",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Keyword => "keyword",
            Self::Transparent => "transparent",
        }
    }

    pub fn is_hex(self) -> bool {
        matches!(self, Self::Hex3 | Self::Hex4 | Self::Hex6 | Self::Hex8)
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
