//! Error types for color conversion

use std::fmt;

use thiserror::Error;

/// The error type for [`Converter`](crate::Converter) operations.
///
/// Every variant is terminal: the input is wrong and retrying with the same
/// text yields the same error.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// The text matches none of the notations and is not a known keyword.
    #[error("unrecognized color format: {0:?}")]
    UnrecognizedFormat(String),

    /// `#`-prefixed text with an unsupported digit count or a non-hex digit.
    #[error("malformed hex color: {0:?}")]
    MalformedHex(String),

    /// Wrong argument count or an unparsable numeric token inside
    /// `rgb()`, `rgba()`, `hsl()` or `hsla()`.
    #[error("malformed argument list in {text:?}: {reason}")]
    MalformedArgumentList {
        /// The normalized color text.
        text: String,
        /// What was wrong with the arguments.
        reason: String,
    },

    /// A well-formed number outside the range allowed for its channel.
    #[error("{channel} value {value} is out of range")]
    InvalidChannelValue {
        /// Which argument was rejected.
        channel: ChannelName,
        /// The offending token as written.
        value: String,
    },
}

impl ConversionError {
    /// The category of this error, without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedFormat(_) => ErrorKind::UnrecognizedFormat,
            Self::MalformedHex(_) => ErrorKind::MalformedHex,
            Self::MalformedArgumentList { .. } => ErrorKind::MalformedArgumentList,
            Self::InvalidChannelValue { .. } => ErrorKind::InvalidChannelValue,
        }
    }

    pub(crate) fn malformed_args(text: &str, reason: impl Into<String>) -> Self {
        Self::MalformedArgumentList {
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(channel: ChannelName, value: &str) -> Self {
        Self::InvalidChannelValue {
            channel,
            value: value.to_string(),
        }
    }
}

/// Fieldless mirror of [`ConversionError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnrecognizedFormat,
    MalformedHex,
    MalformedArgumentList,
    InvalidChannelValue,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnrecognizedFormat => "UnrecognizedFormat",
            Self::MalformedHex => "MalformedHex",
            Self::MalformedArgumentList => "MalformedArgumentList",
            Self::InvalidChannelValue => "InvalidChannelValue",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names the functional-notation argument a [`ConversionError::InvalidChannelValue`]
/// refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelName {
    Red,
    Green,
    Blue,
    Alpha,
    Saturation,
    Lightness,
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Alpha => "alpha",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
        };
        f.write_str(name)
    }
}

/// Result alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConversionError>;
