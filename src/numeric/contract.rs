// ============================================================================
// Numeric Contract
// Capability set shared by the numeral type and the native numeric types
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::kind::{Integral, NumberKind, NumberValue};
use rust_decimal::Decimal;
use std::fmt::Debug;
use std::ops::{Div, Mul, Rem, Sub};
use std::str::FromStr;

/// Operations a type must provide to take part in generic numeric algorithms.
///
/// Implementers share no base type; each one provides its own identities,
/// arithmetic, conversion and text handling. Generic code is written as
/// `fn f<T: Number>(..)`.
///
/// # Addition
/// Addition is the one operation generic algorithms accumulate with, so it
/// is exposed as the fallible [`try_add`](Number::try_add) rather than as an
/// operator bound. The remaining binary operators follow each type's own
/// operator semantics.
///
/// # Conversion
/// Values cross between implementers as a tagged [`NumberValue`]. The source
/// tags itself with [`to_value`](Number::to_value), and the target decides in
/// [`from_value`](Number::from_value) which kinds it accepts and how it
/// narrows them.
///
/// # Example
/// ```
/// use numeral_math::numeric::{Number, Numeral};
///
/// let n = Numeral::create(12_i64).unwrap();
/// assert_eq!(n.format().unwrap(), "XII");
/// assert_eq!(i32::create(n).unwrap(), 12);
/// ```
pub trait Number:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// Additive identity
    const ZERO: Self;

    /// Multiplicative identity
    const ONE: Self;

    /// Kind tag carried by values of this type
    const KIND: NumberKind;

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Tag this value with its kind.
    fn to_value(self) -> NumberValue;

    /// Checked conversion from a tagged value.
    fn from_value(value: NumberValue) -> NumericResult<Self>;

    /// Conversion that clamps out-of-range values to the type's bounds.
    fn from_value_saturating(value: NumberValue) -> NumericResult<Self>;

    /// Conversion that discards out-of-range bits.
    fn from_value_truncating(value: NumberValue) -> NumericResult<Self>;

    /// Checked conversion from any other implementer.
    #[inline]
    fn create<U: Number>(value: U) -> NumericResult<Self> {
        Self::from_value(value.to_value())
    }

    #[inline]
    fn create_saturating<U: Number>(value: U) -> NumericResult<Self> {
        Self::from_value_saturating(value.to_value())
    }

    #[inline]
    fn create_truncating<U: Number>(value: U) -> NumericResult<Self> {
        Self::from_value_truncating(value.to_value())
    }

    /// Checked conversion reporting failure as `None`.
    #[inline]
    fn try_create<U: Number>(value: U) -> Option<Self> {
        Self::create(value).ok()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition. Never wraps.
    fn try_add(self, rhs: Self) -> NumericResult<Self>;

    /// Unary minus.
    fn negate(self) -> Self;

    /// Unary plus.
    #[inline]
    fn plus(self) -> Self {
        self
    }

    fn increment(self) -> Self;

    fn decrement(self) -> Self;

    // ========================================================================
    // Comparison helpers
    // ========================================================================

    #[inline]
    fn minimum(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    #[inline]
    fn maximum(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    /// Restrict `self` to `[min, max]`.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `min > max`.
    fn clamp_between(self, min: Self, max: Self) -> NumericResult<Self> {
        if min > max {
            return Err(NumericError::InvalidInput);
        }
        Ok(self.maximum(min).minimum(max))
    }

    fn absolute(self) -> NumericResult<Self>;

    /// -1, 0 or 1 in this type.
    fn sign(self) -> NumericResult<Self>;

    // ========================================================================
    // Text
    // ========================================================================

    fn parse(text: &str) -> NumericResult<Self>;

    /// Parse reporting failure as `None`.
    #[inline]
    fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Parse digits in the given radix.
    fn parse_radix(text: &str, radix: u32) -> NumericResult<Self>;

    fn format(&self) -> NumericResult<String>;

    /// Write the formatted value into `dest`.
    ///
    /// Returns the number of bytes written, or `None` if the value cannot be
    /// formatted or `dest` is too small. `dest` is untouched on failure.
    fn try_format(&self, dest: &mut [u8]) -> Option<usize> {
        let text = self.format().ok()?;
        let bytes = text.as_bytes();
        dest.get_mut(..bytes.len())?.copy_from_slice(bytes);
        Some(bytes.len())
    }
}

// ============================================================================
// Native Integers
// ============================================================================

fn check_radix(radix: u32) -> NumericResult<()> {
    if (2..=36).contains(&radix) {
        Ok(())
    } else {
        Err(NumericError::InvalidInput)
    }
}

macro_rules! integer_number_common {
    ($t:ty, $kind:ident) => {
        const ZERO: Self = 0;
        const ONE: Self = 1;
        const KIND: NumberKind = NumberKind::$kind;

        #[inline]
        fn to_value(self) -> NumberValue {
            NumberValue::$kind(self)
        }

        fn from_value(value: NumberValue) -> NumericResult<Self> {
            match value.integral()? {
                Integral::Negative(v) => <$t>::try_from(v).map_err(|_| NumericError::Underflow),
                Integral::NonNegative(v) => <$t>::try_from(v).map_err(|_| NumericError::Overflow),
            }
        }

        fn from_value_saturating(value: NumberValue) -> NumericResult<Self> {
            Ok(match value.integral_lossy() {
                Integral::Negative(v) => <$t>::try_from(v).unwrap_or(<$t>::MIN),
                Integral::NonNegative(v) => <$t>::try_from(v).unwrap_or(<$t>::MAX),
            })
        }

        fn from_value_truncating(value: NumberValue) -> NumericResult<Self> {
            // Float to integer truncation saturates, as `as` does
            if value.kind().is_floating_point() {
                return Self::from_value_saturating(value);
            }
            Ok(match value.integral_lossy() {
                Integral::Negative(v) => v as $t,
                Integral::NonNegative(v) => v as $t,
            })
        }

        #[inline]
        fn increment(self) -> Self {
            self.wrapping_add(1)
        }

        #[inline]
        fn decrement(self) -> Self {
            self.wrapping_sub(1)
        }

        fn parse(text: &str) -> NumericResult<Self> {
            text.parse::<$t>().map_err(|_| NumericError::InvalidInput)
        }

        fn parse_radix(text: &str, radix: u32) -> NumericResult<Self> {
            check_radix(radix)?;
            <$t>::from_str_radix(text, radix).map_err(|_| NumericError::InvalidInput)
        }

        fn format(&self) -> NumericResult<String> {
            Ok(self.to_string())
        }
    };
}

macro_rules! impl_signed_number {
    ($($t:ty => $kind:ident),* $(,)?) => {$(
        impl Number for $t {
            integer_number_common!($t, $kind);

            #[inline]
            fn try_add(self, rhs: Self) -> NumericResult<Self> {
                <$t>::checked_add(self, rhs).ok_or(if rhs < 0 {
                    NumericError::Underflow
                } else {
                    NumericError::Overflow
                })
            }

            #[inline]
            fn negate(self) -> Self {
                self.wrapping_neg()
            }

            fn absolute(self) -> NumericResult<Self> {
                self.checked_abs().ok_or(NumericError::Overflow)
            }

            fn sign(self) -> NumericResult<Self> {
                Ok(self.signum())
            }
        }
    )*};
}

macro_rules! impl_unsigned_number {
    ($($t:ty => $kind:ident),* $(,)?) => {$(
        impl Number for $t {
            integer_number_common!($t, $kind);

            #[inline]
            fn try_add(self, rhs: Self) -> NumericResult<Self> {
                <$t>::checked_add(self, rhs).ok_or(NumericError::Overflow)
            }

            #[inline]
            fn negate(self) -> Self {
                self.wrapping_neg()
            }

            fn absolute(self) -> NumericResult<Self> {
                Ok(self)
            }

            fn sign(self) -> NumericResult<Self> {
                Ok(if self == 0 { 0 } else { 1 })
            }
        }
    )*};
}

impl_signed_number!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    i128 => I128,
    isize => Isize,
);

impl_unsigned_number!(
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    usize => Usize,
);

// ============================================================================
// Native Floating Point
// ============================================================================

macro_rules! impl_float_number {
    ($($t:ty => $kind:ident),* $(,)?) => {$(
        impl Number for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const KIND: NumberKind = NumberKind::$kind;

            #[inline]
            fn to_value(self) -> NumberValue {
                NumberValue::$kind(self)
            }

            fn from_value(value: NumberValue) -> NumericResult<Self> {
                let wide = value.to_f64()?;
                let narrowed = wide as $t;
                if wide.is_finite() && narrowed.is_infinite() {
                    return Err(if wide < 0.0 {
                        NumericError::Underflow
                    } else {
                        NumericError::Overflow
                    });
                }
                Ok(narrowed)
            }

            fn from_value_saturating(value: NumberValue) -> NumericResult<Self> {
                let wide = value.to_f64()?;
                if wide.is_finite() {
                    Ok(wide.clamp(<$t>::MIN as f64, <$t>::MAX as f64) as $t)
                } else {
                    Ok(wide as $t)
                }
            }

            fn from_value_truncating(value: NumberValue) -> NumericResult<Self> {
                Ok(value.to_f64()? as $t)
            }

            #[inline]
            fn try_add(self, rhs: Self) -> NumericResult<Self> {
                Ok(self + rhs)
            }

            #[inline]
            fn negate(self) -> Self {
                -self
            }

            #[inline]
            fn increment(self) -> Self {
                self + 1.0
            }

            #[inline]
            fn decrement(self) -> Self {
                self - 1.0
            }

            fn absolute(self) -> NumericResult<Self> {
                Ok(self.abs())
            }

            fn sign(self) -> NumericResult<Self> {
                if self.is_nan() {
                    Err(NumericError::InvalidInput)
                } else if self > 0.0 {
                    Ok(1.0)
                } else if self < 0.0 {
                    Ok(-1.0)
                } else {
                    Ok(0.0)
                }
            }

            fn parse(text: &str) -> NumericResult<Self> {
                text.parse::<$t>().map_err(|_| NumericError::InvalidInput)
            }

            fn parse_radix(text: &str, radix: u32) -> NumericResult<Self> {
                if radix == 10 {
                    Self::parse(text)
                } else {
                    Err(NumericError::NotImplemented(
                        "non-decimal radix for floating point",
                    ))
                }
            }

            fn format(&self) -> NumericResult<String> {
                Ok(self.to_string())
            }
        }
    )*};
}

impl_float_number!(f32 => F32, f64 => F64);

// ============================================================================
// Decimal
// ============================================================================

impl Number for Decimal {
    const ZERO: Self = Decimal::ZERO;
    const ONE: Self = Decimal::ONE;
    const KIND: NumberKind = NumberKind::Decimal;

    #[inline]
    fn to_value(self) -> NumberValue {
        NumberValue::Decimal(self)
    }

    fn from_value(value: NumberValue) -> NumericResult<Self> {
        value.to_decimal()
    }

    fn from_value_saturating(value: NumberValue) -> NumericResult<Self> {
        match value.to_decimal() {
            Err(NumericError::Overflow) => Ok(Decimal::MAX),
            Err(NumericError::Underflow) => Ok(Decimal::MIN),
            other => other,
        }
    }

    fn from_value_truncating(value: NumberValue) -> NumericResult<Self> {
        Self::from_value(value)
    }

    #[inline]
    fn try_add(self, rhs: Self) -> NumericResult<Self> {
        self.checked_add(rhs).ok_or(if rhs.is_sign_negative() {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        })
    }

    #[inline]
    fn negate(self) -> Self {
        -self
    }

    #[inline]
    fn increment(self) -> Self {
        self.saturating_add(Decimal::ONE)
    }

    #[inline]
    fn decrement(self) -> Self {
        self.saturating_sub(Decimal::ONE)
    }

    fn absolute(self) -> NumericResult<Self> {
        Ok(self.abs())
    }

    fn sign(self) -> NumericResult<Self> {
        Ok(if self.is_zero() {
            Decimal::ZERO
        } else if self.is_sign_negative() {
            Decimal::NEGATIVE_ONE
        } else {
            Decimal::ONE
        })
    }

    fn parse(text: &str) -> NumericResult<Self> {
        Decimal::from_str(text).map_err(|_| NumericError::InvalidInput)
    }

    fn parse_radix(text: &str, radix: u32) -> NumericResult<Self> {
        check_radix(radix)?;
        Decimal::from_str_radix(text, radix).map_err(|_| NumericError::InvalidInput)
    }

    fn format(&self) -> NumericResult<String> {
        Ok(self.to_string())
    }
}
