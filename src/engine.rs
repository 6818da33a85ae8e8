use rayon::prelude::*;

use crate::error::Result;
use crate::parser::Converter;
use crate::types::{Channels, Notation};

/// Convert many color strings in parallel.
///
/// Uses Rayon's `par_iter()`; the converter only reads the frozen name table,
/// so every worker shares it without locking. Results come back in input
/// order, one per input, and a failing entry does not affect the others.
pub fn convert_all<S>(converter: &Converter<'_>, inputs: &[S]) -> Vec<Result<Channels>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|text| converter.convert(text.as_ref()))
        .collect()
}

/// Same as [`convert_all`], also reporting the notation of each input.
pub fn convert_all_tagged<S>(
    converter: &Converter<'_>,
    inputs: &[S],
) -> Vec<Result<(Notation, Channels)>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|text| converter.convert_tagged(text.as_ref()))
        .collect()
}
