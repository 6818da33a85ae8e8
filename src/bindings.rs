//! Node entry points. Compiled only with the `node` feature.

use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::engine::convert_all_tagged;
use crate::error::ConversionError;
use crate::parser::Converter;
use crate::types::{Channels, Notation};

/// A successful conversion as seen from JS.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ColorResult {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    pub a: u32,
    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque
    pub hex: String,
    /// "hex3" | "hex4" | "hex6" | "hex8" | "rgb" | "rgba" | "hsl" | "hsla" | "keyword" | "transparent"
    pub notation: String,
}

/// One slot of a batch conversion. Exactly one of `color` / `error_kind` is set.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ColorOutcome {
    pub input: String,
    pub color: Option<ColorResult>,
    /// "UnrecognizedFormat" | "MalformedHex" | "MalformedArgumentList" | "InvalidChannelValue"
    pub error_kind: Option<String>,
    pub error_message: Option<String>,
}

impl ColorResult {
    fn new(notation: Notation, c: Channels) -> Self {
        Self {
            r: c.r.into(),
            g: c.g.into(),
            b: c.b.into(),
            a: c.a.into(),
            hex: c.to_hex(),
            notation: notation.as_str().to_string(),
        }
    }
}

impl ColorOutcome {
    fn from_result(input: &str, result: crate::error::Result<(Notation, Channels)>) -> Self {
        match result {
            Ok((notation, channels)) => Self {
                input: input.to_string(),
                color: Some(ColorResult::new(notation, channels)),
                error_kind: None,
                error_message: None,
            },
            Err(err) => Self {
                input: input.to_string(),
                color: None,
                error_kind: Some(err.kind().to_string()),
                error_message: Some(err.to_string()),
            },
        }
    }
}

fn to_napi_error(err: ConversionError) -> Error {
    Error::new(Status::InvalidArg, format!("{}: {err}", err.kind()))
}

#[napi]
pub fn health_check() -> String {
    "css-color-native ok".to_string()
}

/// Convert one color string. Throws on invalid input.
#[napi]
pub fn convert_color(text: String) -> Result<ColorResult> {
    let (notation, channels) = Converter::new()
        .convert_tagged(&text)
        .map_err(to_napi_error)?;
    Ok(ColorResult::new(notation, channels))
}

/// Convert many color strings in parallel. Never throws; failures are
/// reported per entry.
#[napi]
pub fn convert_colors(texts: Vec<String>) -> Vec<ColorOutcome> {
    convert_all_tagged(&Converter::new(), &texts)
        .into_iter()
        .zip(&texts)
        .map(|(result, text)| ColorOutcome::from_result(text, result))
        .collect()
}
