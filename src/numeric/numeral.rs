// ============================================================================
// Numeral
// Bounded integer value with a canonical Roman numeral text form
// ============================================================================

use super::codec::{self, EncodedNumeral, MAX_MAGNITUDE, MIN_MAGNITUDE};
use super::contract::Number;
use super::errors::{NumericError, NumericResult};
use super::kind::{NumberKind, NumberValue};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

/// Integer magnitude whose canonical text is a Roman numeral.
///
/// Every checked entry point ([`Number::create`], [`Numeral::from_magnitude`],
/// addition, formatting) enforces `1 <= magnitude <= 3999`. Raw construction
/// through [`Numeral::new`] and the operators other than `+` do not.
///
/// # Operator asymmetry
/// `+` is checked and returns a `NumericResult`. `-`, `*`, `/`, `%` and
/// unary `-` compute on the raw `i32` magnitude (wrapping on `i32` overflow)
/// and may leave `[1, 3999]` without failing. `/` and `%` panic on a zero
/// divisor exactly as `i32` does; use [`Numeral::checked_div`] or
/// [`Numeral::checked_rem`] to get an error instead.
///
/// # Example
/// ```
/// use numeral_math::numeric::{Number, Numeral};
///
/// let five = Numeral::parse("V").unwrap();
/// let four = Numeral::parse("IV").unwrap();
/// let nine = (five + four).unwrap();
/// assert_eq!(nine.format().unwrap(), "IX");
///
/// // Unchecked: the difference is outside the canonical range
/// assert_eq!((four - five).magnitude(), -1);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Numeral(i32);

impl Numeral {
    /// Smallest canonical magnitude
    pub const MIN_VALUE: i32 = MIN_MAGNITUDE;

    /// Largest canonical magnitude
    pub const MAX_VALUE: i32 = MAX_MAGNITUDE;

    /// Additive identity. Magnitude 0 has no numeral text.
    pub const ZERO: Self = Self(0);

    /// Multiplicative identity (I)
    pub const ONE: Self = Self(1);

    /// I
    pub const MIN: Self = Self(MIN_MAGNITUDE);

    /// MMMCMXCIX
    pub const MAX: Self = Self(MAX_MAGNITUDE);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap a raw magnitude without any range check.
    #[inline]
    pub const fn new(magnitude: i32) -> Self {
        Self(magnitude)
    }

    /// Create from a magnitude, checking the canonical range.
    ///
    /// # Errors
    /// Returns `DomainRange` if `magnitude` is outside `[1, 3999]`.
    #[inline]
    pub fn from_magnitude(magnitude: i64) -> NumericResult<Self> {
        Self::narrow(i128::from(magnitude))
    }

    fn narrow(wide: i128) -> NumericResult<Self> {
        if (i128::from(Self::MIN_VALUE)..=i128::from(Self::MAX_VALUE)).contains(&wide) {
            Ok(Self(wide as i32))
        } else {
            Err(NumericError::DomainRange)
        }
    }

    fn narrow_float(v: f64) -> NumericResult<Self> {
        // Written so that NaN fails the check
        if v >= f64::from(Self::MIN_VALUE) && v <= f64::from(Self::MAX_VALUE) {
            Ok(Self(v.trunc() as i32))
        } else {
            Err(NumericError::DomainRange)
        }
    }

    fn narrow_decimal(d: Decimal) -> NumericResult<Self> {
        if d < Decimal::from(Self::MIN_VALUE) || d > Decimal::from(Self::MAX_VALUE) {
            return Err(NumericError::DomainRange);
        }
        d.trunc()
            .to_i32()
            .map(Self)
            .ok_or(NumericError::DomainRange)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The raw magnitude.
    #[inline]
    pub const fn magnitude(self) -> i32 {
        self.0
    }

    /// True if the magnitude has canonical numeral text.
    #[inline]
    pub const fn is_canonical(self) -> bool {
        self.0 >= MIN_MAGNITUDE && self.0 <= MAX_MAGNITUDE
    }

    /// Encode into an inline buffer without allocating.
    ///
    /// # Errors
    /// Returns `DomainRange` if the magnitude is outside `[1, 3999]`.
    #[inline]
    pub fn encode(self) -> NumericResult<EncodedNumeral> {
        codec::encode(self.0)
    }

    // ========================================================================
    // Checked division
    // ========================================================================

    /// Division truncating toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` has magnitude 0
    /// - `Overflow` for `i32::MIN / -1`
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        self.0
            .checked_div(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Remainder with the sign of the dividend.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` has magnitude 0
    /// - `Overflow` for `i32::MIN % -1`
    pub fn checked_rem(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        self.0
            .checked_rem(rhs.0)
            .map(Self)
            .ok_or(NumericError::Overflow)
    }

    /// Quotient and remainder in one call. Neither is range checked.
    pub fn div_rem(self, rhs: Self) -> NumericResult<(Self, Self)> {
        Ok((self.checked_div(rhs)?, self.checked_rem(rhs)?))
    }
}

// ============================================================================
// Numeric Contract
// ============================================================================

impl Number for Numeral {
    const ZERO: Self = Numeral::ZERO;
    const ONE: Self = Numeral::ONE;
    const KIND: NumberKind = NumberKind::Numeral;

    #[inline]
    fn to_value(self) -> NumberValue {
        NumberValue::Numeral(self.0)
    }

    /// Convert a tagged value into a numeral.
    ///
    /// Kinds that always fit the `i32` magnitude are widened as-is. Kinds
    /// that must narrow are checked against `[1, 3999]` first; floats and
    /// decimals then truncate toward zero. 128-bit integers are not accepted.
    fn from_value(value: NumberValue) -> NumericResult<Self> {
        let result = match value {
            NumberValue::I8(v) => Ok(Self(i32::from(v))),
            NumberValue::I16(v) => Ok(Self(i32::from(v))),
            NumberValue::I32(v) => Ok(Self(v)),
            NumberValue::U8(v) => Ok(Self(i32::from(v))),
            NumberValue::U16(v) => Ok(Self(i32::from(v))),
            // Ordinals stop at 0x10FFFF
            NumberValue::Char(c) => i32::try_from(u32::from(c))
                .map(Self)
                .map_err(|_| NumericError::DomainRange),
            NumberValue::I64(v) => Self::narrow(i128::from(v)),
            NumberValue::Isize(v) => Self::narrow(v as i128),
            NumberValue::U32(v) => Self::narrow(i128::from(v)),
            NumberValue::U64(v) => Self::narrow(i128::from(v)),
            NumberValue::Usize(v) => Self::narrow(v as i128),
            NumberValue::Numeral(m) => Self::narrow(i128::from(m)),
            NumberValue::F32(v) => Self::narrow_float(f64::from(v)),
            NumberValue::F64(v) => Self::narrow_float(v),
            NumberValue::Decimal(d) => Self::narrow_decimal(d),
            NumberValue::I128(_) | NumberValue::U128(_) => {
                Err(NumericError::UnsupportedKind(value.kind()))
            },
        };

        if let Err(error) = &result {
            tracing::trace!(kind = %value.kind(), %error, "numeral conversion rejected");
        }
        result
    }

    /// Same as [`from_value`](Number::from_value): out-of-range input fails.
    fn from_value_saturating(value: NumberValue) -> NumericResult<Self> {
        Self::from_value(value)
    }

    /// Same as [`from_value`](Number::from_value): out-of-range input fails.
    fn from_value_truncating(value: NumberValue) -> NumericResult<Self> {
        Self::from_value(value)
    }

    /// Checked: the sum is routed through `create` as a wide integer.
    fn try_add(self, rhs: Self) -> NumericResult<Self> {
        Self::create(i64::from(self.0) + i64::from(rhs.0))
    }

    #[inline]
    fn negate(self) -> Self {
        -self
    }

    #[inline]
    fn increment(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[inline]
    fn decrement(self) -> Self {
        Self(self.0.wrapping_sub(1))
    }

    fn clamp_between(self, min: Self, max: Self) -> NumericResult<Self> {
        if min > max {
            return Err(NumericError::InvalidInput);
        }
        Self::create(i64::from(self.0.clamp(min.0, max.0)))
    }

    fn absolute(self) -> NumericResult<Self> {
        Self::create(i64::from(self.0).abs())
    }

    /// Only positive numerals have a sign that is itself a numeral.
    fn sign(self) -> NumericResult<Self> {
        Self::create(i64::from(self.0.signum()))
    }

    fn parse(text: &str) -> NumericResult<Self> {
        codec::decode(text).map(Self)
    }

    fn parse_radix(_text: &str, _radix: u32) -> NumericResult<Self> {
        Err(NumericError::NotImplemented("radix parsing of numeral text"))
    }

    fn format(&self) -> NumericResult<String> {
        Ok(self.encode()?.to_string())
    }

    fn try_format(&self, dest: &mut [u8]) -> Option<usize> {
        let text = self.encode().ok()?;
        dest.get_mut(..text.len())?.copy_from_slice(text.as_bytes());
        Some(text.len())
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Add for Numeral {
    type Output = NumericResult<Numeral>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(rhs)
    }
}

// Unchecked from here on: results may leave [1, 3999]

impl Sub for Numeral {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Mul for Numeral {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_mul(rhs.0))
    }
}

impl Div for Numeral {
    type Output = Self;

    /// # Panics
    /// Panics if `rhs` has magnitude 0.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_div(rhs.0))
    }
}

impl Rem for Numeral {
    type Output = Self;

    /// # Panics
    /// Panics if `rhs` has magnitude 0.
    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        Self(self.0.wrapping_rem(rhs.0))
    }
}

impl Neg for Numeral {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(self.0.wrapping_neg())
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<Numeral> for i32 {
    #[inline]
    fn from(n: Numeral) -> i32 {
        n.0
    }
}

impl TryFrom<i64> for Numeral {
    type Error = NumericError;

    fn try_from(magnitude: i64) -> Result<Self, Self::Error> {
        Self::from_magnitude(magnitude)
    }
}

impl FromStr for Numeral {
    type Err = NumericError;

    /// Decode numeral text. See [`codec::decode`] for the accepted forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec::decode(s).map(Self)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Numeral {
    /// Writes the canonical text, or the raw magnitude when it is outside
    /// `[1, 3999]`. Use [`Number::format`] to reject those with `DomainRange`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

impl fmt::Debug for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.encode() {
            Ok(text) => write!(f, "Numeral({}, magnitude={})", text, self.0),
            Err(_) => write!(f, "Numeral(magnitude={})", self.0),
        }
    }
}

// ============================================================================
// Serialization (canonical text)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Numeral {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self
            .encode()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        serializer.serialize_str(&text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Numeral {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse()
            .map_err(<D::Error as serde::de::Error>::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
