//! Error types.

use core::fmt;

/// Result type with this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by the public entry points.
///
/// Arithmetic internals are total and never fail; errors arise only from
/// operand validation, buffer sizing, point/key validation and RNG failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The output buffer is too small for the result.
    BufferTooSmall,

    /// An input is longer than the fixed operand width, or a modulus does not
    /// occupy its full width (most significant bit clear) or is even.
    OperandTooLarge,

    /// The exponent is zero where a non-trivial exponent is required.
    ZeroExponent,

    /// The coordinates do not satisfy the curve equation, or a point failed
    /// the order check.
    InvalidPoint,

    /// The point is the point at infinity.
    PointAtInfinity,

    /// A coordinate or scalar is outside its admissible range.
    OutOfRange,

    /// The private scalar does not correspond to the public point.
    KeyMismatch,

    /// The random number generator failed, or retries were exhausted.
    Random,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => f.write_str("output buffer too small"),
            Error::OperandTooLarge => f.write_str("operand too large or modulus not full-width"),
            Error::ZeroExponent => f.write_str("exponent is zero"),
            Error::InvalidPoint => f.write_str("point is not on the curve"),
            Error::PointAtInfinity => f.write_str("point is the point at infinity"),
            Error::OutOfRange => f.write_str("value out of range"),
            Error::KeyMismatch => f.write_str("public key does not match private key"),
            Error::Random => f.write_str("random number generation failed"),
        }
    }
}

impl core::error::Error for Error {}
