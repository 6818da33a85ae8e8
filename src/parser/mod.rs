pub mod args;
pub mod hex;
pub mod hsl;
pub mod keywords;
pub mod rgb;

use crate::error::{ConversionError, Result};
use crate::types::{Channels, Notation};
use keywords::NameTable;

/// Converts color text to [`Channels`].
///
/// Holds only a shared reference to a frozen [`NameTable`], so it is `Copy`
/// and can be used from any thread. Each call is independent:
///   1. normalize: trim, lowercase, drop all whitespace
///   2. dispatch on prefix/suffix: `#`, `rgb(`, `rgba(`, `hsl(`, `hsla(`
///   3. otherwise look up a keyword, then the literal `transparent`
#[derive(Debug, Clone, Copy)]
pub struct Converter<'t> {
    names: &'t NameTable,
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter<'static> {
    /// A converter backed by the builtin CSS named colors.
    pub fn new() -> Self {
        Self::with_table(NameTable::builtin())
    }
}

impl<'t> Converter<'t> {
    pub fn with_table(names: &'t NameTable) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &'t NameTable {
        self.names
    }

    /// Convert color text to channels.
    pub fn convert(&self, text: &str) -> Result<Channels> {
        self.convert_tagged(text).map(|(_, channels)| channels)
    }

    /// Convert and also report which notation matched.
    pub fn convert_tagged(&self, text: &str) -> Result<(Notation, Channels)> {
        let normalized = normalize(text);
        let result = self.dispatch(&normalized);
        if let Err(err) = &result {
            tracing::debug!(kind = %err.kind(), input = %text, "color conversion rejected");
        }
        result
    }

    /// Identify the notation without parsing numeric arguments.
    ///
    /// Hex width is checked here since it is what selects the notation;
    /// digit alphabet and argument values are not.
    pub fn classify(&self, text: &str) -> Result<Notation> {
        self.classify_normalized(&normalize(text))
    }

    fn classify_normalized(&self, text: &str) -> Result<Notation> {
        if text.starts_with('#') {
            return hex::hex_notation(text);
        }
        let functional = |prefix: &str| text.starts_with(prefix) && text.ends_with(')');
        let notation = if functional("rgb(") {
            Notation::Rgb
        } else if functional("rgba(") {
            Notation::Rgba
        } else if functional("hsl(") {
            Notation::Hsl
        } else if functional("hsla(") {
            Notation::Hsla
        } else if self.names.get(text).is_some() {
            Notation::Keyword
        } else if text == "transparent" {
            Notation::Transparent
        } else {
            return Err(ConversionError::UnrecognizedFormat(text.to_string()));
        };
        Ok(notation)
    }

    fn dispatch(&self, text: &str) -> Result<(Notation, Channels)> {
        let notation = self.classify_normalized(text)?;
        tracing::trace!(%notation, text, "dispatching color");

        let channels = match notation {
            Notation::Hex3 | Notation::Hex4 | Notation::Hex6 | Notation::Hex8 => {
                hex::parse_hex(text)?
            }
            Notation::Rgb => rgb::parse_rgb(text)?,
            Notation::Rgba => rgb::parse_rgba(text)?,
            Notation::Hsl => hsl::parse_hsl(text)?,
            Notation::Hsla => hsl::parse_hsla(text)?,
            Notation::Keyword => {
                let value = self
                    .names
                    .get(text)
                    .ok_or_else(|| ConversionError::UnrecognizedFormat(text.to_string()))?;
                hex::parse_hex(value)?
            }
            Notation::Transparent => Channels::TRANSPARENT,
        };
        Ok((notation, channels))
    }
}

/// Trim, lowercase and remove every whitespace character.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
