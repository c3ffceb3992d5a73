// ============================================================================
// Numeric Errors
// Error types for numeral codec, conversion and arithmetic operations
// ============================================================================

use super::kind::NumberKind;
use std::fmt;

/// Errors that can occur while encoding, decoding, converting or combining
/// numbers through the [`Number`](super::Number) contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Magnitude outside `[1, 3999]` at a checked numeral boundary
    DomainRange,
    /// Text contains a character outside the numeral alphabet
    Decode {
        /// The offending character
        symbol: char,
        /// Character index of the offending symbol
        position: usize,
    },
    /// Source kind is not part of the target's supported conversion set
    UnsupportedKind(NumberKind),
    /// Entry point exists on the contract but has no meaning for this type
    NotImplemented(&'static str),
    /// Result exceeded the target type's maximum value
    Overflow,
    /// Result below the target type's minimum value
    Underflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// Input string or value is invalid
    InvalidInput,
    /// A partition worker panicked during parallel summation
    PartitionPanicked,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DomainRange => {
                write!(f, "domain range: magnitude must be between 1 and 3999")
            },
            NumericError::Decode { symbol, position } => write!(
                f,
                "decode error: '{}' at position {} is not a numeral symbol",
                symbol, position
            ),
            NumericError::UnsupportedKind(kind) => {
                write!(f, "unsupported conversion source kind: {}", kind)
            },
            NumericError::NotImplemented(what) => write!(f, "not implemented: {}", what),
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::PartitionPanicked => {
                write!(f, "summation worker panicked while reducing a partition")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::DomainRange.to_string(),
            "domain range: magnitude must be between 1 and 3999"
        );
        assert_eq!(
            NumericError::Decode {
                symbol: 'Q',
                position: 2
            }
            .to_string(),
            "decode error: 'Q' at position 2 is not a numeral symbol"
        );
        assert_eq!(
            NumericError::UnsupportedKind(NumberKind::I128).to_string(),
            "unsupported conversion source kind: i128"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
        assert_ne!(
            NumericError::UnsupportedKind(NumberKind::I128),
            NumericError::UnsupportedKind(NumberKind::U128)
        );
    }
}
