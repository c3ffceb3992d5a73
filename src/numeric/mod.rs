// ============================================================================
// Numeric Module
// Roman numeral value type and the generic numeric contract
// ============================================================================
//
// This module provides:
// - Number: capability contract shared by every numeric implementer
// - Numeral: bounded magnitude in [1, 3999] with canonical numeral text
// - NumberKind/NumberValue: closed tagged dispatch for conversions
// - codec: greedy encoder and subtractive-pair decoder
// - NumericError: Error types for codec, conversion and arithmetic
//
// Design principles:
// - Checked entry points return Result (no panics)
// - Closed set of conversion kinds, matched exhaustively per target
// - Implementers share no base type; generic code bounds on `Number`

pub mod codec;
mod contract;
mod errors;
mod kind;
mod numeral;

pub use contract::Number;
pub use errors::{NumericError, NumericResult};
pub use kind::{NumberKind, NumberValue};
pub use numeral::Numeral;
