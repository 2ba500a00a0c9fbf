//! Error types for share decoding and interpolation

use num_bigint::BigInt;

/// Result alias for the decode and interpolation core
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the core.
///
/// Every variant is fatal to the single decode or interpolation that raised
/// it. Callers decide whether other inputs keep going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("base {base} is outside the supported range 2..=36")]
    InvalidBase { base: u32 },

    #[error("share value is empty")]
    EmptyValue,

    #[error("character '{digit}' at position {position} is not a valid base-{base} digit")]
    InvalidDigit {
        digit: char,
        position: usize,
        base: u32,
    },

    #[error("two points share the x coordinate {x}")]
    DegenerateInput { x: BigInt },

    #[error("insufficient points: need {needed}, but only {available} available")]
    InsufficientPoints { needed: usize, available: usize },

    #[error("interpolated value is not an integer; shares are malformed or too few")]
    NonIntegralSecret,
}
