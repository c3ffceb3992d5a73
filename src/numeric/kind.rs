// ============================================================================
// Number Kinds
// Closed tagged representation of every value the contract can convert
// ============================================================================
//
// Conversion between contract implementers goes through `NumberValue`: the
// source tags itself with its kind, and each target matches the tag
// exhaustively. There is no open dispatch; a kind a target does not accept
// is rejected by that target's match arm.

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;

/// Tag identifying the concrete type behind a [`NumberValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    I8,
    I16,
    I32,
    I64,
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    U128,
    Usize,
    F32,
    F64,
    Decimal,
    /// A character, converted by its ordinal value
    Char,
    Numeral,
}

impl NumberKind {
    /// Rust-facing name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            NumberKind::I8 => "i8",
            NumberKind::I16 => "i16",
            NumberKind::I32 => "i32",
            NumberKind::I64 => "i64",
            NumberKind::I128 => "i128",
            NumberKind::Isize => "isize",
            NumberKind::U8 => "u8",
            NumberKind::U16 => "u16",
            NumberKind::U32 => "u32",
            NumberKind::U64 => "u64",
            NumberKind::U128 => "u128",
            NumberKind::Usize => "usize",
            NumberKind::F32 => "f32",
            NumberKind::F64 => "f64",
            NumberKind::Decimal => "decimal",
            NumberKind::Char => "char",
            NumberKind::Numeral => "numeral",
        }
    }

    /// True for the binary floating point kinds.
    pub const fn is_floating_point(self) -> bool {
        matches!(self, NumberKind::F32 | NumberKind::F64)
    }
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A numeric value tagged with its concrete kind.
///
/// Produced by [`Number::to_value`](super::Number::to_value) and consumed by
/// the `from_value*` family on the target type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    Char(char),
    /// Raw numeral magnitude (not necessarily in the canonical range)
    Numeral(i32),
}

impl From<char> for NumberValue {
    fn from(c: char) -> Self {
        NumberValue::Char(c)
    }
}

/// Integer view of a value, split by sign so that every source fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Integral {
    Negative(i128),
    NonNegative(u128),
}

impl Integral {
    fn from_signed(v: i128) -> Self {
        if v < 0 {
            Integral::Negative(v)
        } else {
            Integral::NonNegative(v.unsigned_abs())
        }
    }
}

impl NumberValue {
    /// The kind tag of this value.
    pub const fn kind(&self) -> NumberKind {
        match self {
            NumberValue::I8(_) => NumberKind::I8,
            NumberValue::I16(_) => NumberKind::I16,
            NumberValue::I32(_) => NumberKind::I32,
            NumberValue::I64(_) => NumberKind::I64,
            NumberValue::I128(_) => NumberKind::I128,
            NumberValue::Isize(_) => NumberKind::Isize,
            NumberValue::U8(_) => NumberKind::U8,
            NumberValue::U16(_) => NumberKind::U16,
            NumberValue::U32(_) => NumberKind::U32,
            NumberValue::U64(_) => NumberKind::U64,
            NumberValue::U128(_) => NumberKind::U128,
            NumberValue::Usize(_) => NumberKind::Usize,
            NumberValue::F32(_) => NumberKind::F32,
            NumberValue::F64(_) => NumberKind::F64,
            NumberValue::Decimal(_) => NumberKind::Decimal,
            NumberValue::Char(_) => NumberKind::Char,
            NumberValue::Numeral(_) => NumberKind::Numeral,
        }
    }

    /// Integer part of the value, truncated toward zero.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN
    /// - `Overflow` / `Underflow` for floats beyond the 128-bit range
    pub(crate) fn integral(self) -> NumericResult<Integral> {
        match self {
            NumberValue::I8(v) => Ok(Integral::from_signed(i128::from(v))),
            NumberValue::I16(v) => Ok(Integral::from_signed(i128::from(v))),
            NumberValue::I32(v) => Ok(Integral::from_signed(i128::from(v))),
            NumberValue::I64(v) => Ok(Integral::from_signed(i128::from(v))),
            NumberValue::I128(v) => Ok(Integral::from_signed(v)),
            NumberValue::Isize(v) => Ok(Integral::from_signed(v as i128)),
            NumberValue::U8(v) => Ok(Integral::NonNegative(u128::from(v))),
            NumberValue::U16(v) => Ok(Integral::NonNegative(u128::from(v))),
            NumberValue::U32(v) => Ok(Integral::NonNegative(u128::from(v))),
            NumberValue::U64(v) => Ok(Integral::NonNegative(u128::from(v))),
            NumberValue::U128(v) => Ok(Integral::NonNegative(v)),
            NumberValue::Usize(v) => Ok(Integral::NonNegative(v as u128)),
            NumberValue::F32(v) => float_integral(f64::from(v)),
            NumberValue::F64(v) => float_integral(v),
            NumberValue::Decimal(d) => d
                .trunc()
                .to_i128()
                .map(Integral::from_signed)
                .ok_or(NumericError::Overflow),
            NumberValue::Char(c) => Ok(Integral::NonNegative(u128::from(u32::from(c)))),
            NumberValue::Numeral(m) => Ok(Integral::from_signed(i128::from(m))),
        }
    }

    /// Integer part of the value, never failing: NaN maps to zero and
    /// out-of-range floats saturate at the 128-bit bounds.
    pub(crate) fn integral_lossy(self) -> Integral {
        match self {
            NumberValue::F32(v) => float_integral_lossy(f64::from(v)),
            NumberValue::F64(v) => float_integral_lossy(v),
            other => other.integral().unwrap_or(Integral::NonNegative(0)),
        }
    }

    /// The value as a binary double. Wide integers may round.
    pub(crate) fn to_f64(self) -> NumericResult<f64> {
        match self {
            NumberValue::I8(v) => Ok(f64::from(v)),
            NumberValue::I16(v) => Ok(f64::from(v)),
            NumberValue::I32(v) => Ok(f64::from(v)),
            NumberValue::I64(v) => Ok(v as f64),
            NumberValue::I128(v) => Ok(v as f64),
            NumberValue::Isize(v) => Ok(v as f64),
            NumberValue::U8(v) => Ok(f64::from(v)),
            NumberValue::U16(v) => Ok(f64::from(v)),
            NumberValue::U32(v) => Ok(f64::from(v)),
            NumberValue::U64(v) => Ok(v as f64),
            NumberValue::U128(v) => Ok(v as f64),
            NumberValue::Usize(v) => Ok(v as f64),
            NumberValue::F32(v) => Ok(f64::from(v)),
            NumberValue::F64(v) => Ok(v),
            NumberValue::Decimal(d) => d.to_f64().ok_or(NumericError::PrecisionLoss),
            NumberValue::Char(c) => Ok(f64::from(u32::from(c))),
            NumberValue::Numeral(m) => Ok(f64::from(m)),
        }
    }

    /// The value as a decimal, keeping fractional digits of floats.
    ///
    /// # Errors
    /// - `InvalidInput` for NaN
    /// - `Overflow` / `Underflow` when the value exceeds the decimal range
    pub(crate) fn to_decimal(self) -> NumericResult<Decimal> {
        match self {
            NumberValue::Decimal(d) => Ok(d),
            NumberValue::F32(v) => float_to_decimal(f64::from(v)),
            NumberValue::F64(v) => float_to_decimal(v),
            other => match other.integral()? {
                Integral::Negative(v) => Decimal::from_i128(v).ok_or(NumericError::Underflow),
                Integral::NonNegative(v) => Decimal::from_u128(v).ok_or(NumericError::Overflow),
            },
        }
    }
}

fn float_integral(v: f64) -> NumericResult<Integral> {
    if v.is_nan() {
        return Err(NumericError::InvalidInput);
    }

    let t = v.trunc();
    if t < 0.0 {
        if t < i128::MIN as f64 {
            Err(NumericError::Underflow)
        } else {
            Ok(Integral::Negative(t as i128))
        }
    } else if t >= u128::MAX as f64 {
        Err(NumericError::Overflow)
    } else {
        Ok(Integral::NonNegative(t as u128))
    }
}

fn float_integral_lossy(v: f64) -> Integral {
    // `as` casts from float saturate and map NaN to zero
    if v < 0.0 {
        Integral::Negative(v as i128)
    } else {
        Integral::NonNegative(v as u128)
    }
}

fn float_to_decimal(v: f64) -> NumericResult<Decimal> {
    if v.is_nan() {
        return Err(NumericError::InvalidInput);
    }
    Decimal::from_f64(v).ok_or(if v < 0.0 {
        NumericError::Underflow
    } else {
        NumericError::Overflow
    })
}
