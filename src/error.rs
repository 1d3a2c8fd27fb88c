//! Error types for element-set parsing and orbit propagation.

use thiserror::Error;

/// Errors produced while parsing a two-line element set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TleError {
    /// Line is shorter than the fixed 69-column record.
    #[error("TLE line {line} is {length} bytes, expected at least 69")]
    Length { line: u8, length: usize },

    /// Line contains non-ASCII bytes, so column offsets are meaningless.
    #[error("TLE line {line} contains non-ASCII bytes")]
    Encoding { line: u8 },

    /// A fixed-column field did not parse as a number.
    #[error("TLE line {line}, field `{field}`: cannot parse {text:?}")]
    Field {
        line: u8,
        field: &'static str,
        text: String,
    },
}

/// Kepler's equation failed to converge within the iteration bound.
///
/// This is the only runtime failure mode of propagation; it can only be
/// reached with eccentricities at or beyond 1, or with non-finite input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error(
    "Kepler solver did not converge after {iterations} iterations \
     (M = {mean_anomaly}, e = {eccentricity})"
)]
pub struct KeplerError {
    pub mean_anomaly: f64,
    pub eccentricity: f64,
    pub iterations: usize,
}
