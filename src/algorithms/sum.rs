// ============================================================================
// Generic Summation
// Accumulates any contract implementer through zero, create and checked add
// ============================================================================

use crate::numeric::{Number, NumericResult};

/// Sum a sequence of values of one contract type.
///
/// Starts from `T::ZERO` and, for every element, converts it with
/// [`Number::create`] before adding it with [`Number::try_add`]. The
/// conversion runs even though the element is already a `T`, so any element
/// the type's checked conversion rejects (for `Numeral`, a magnitude outside
/// `[1, 3999]`) fails the whole sum.
///
/// # Errors
/// The first conversion or addition error; no partial sum is returned.
///
/// # Example
/// ```
/// use numeral_math::algorithms::sum;
/// use numeral_math::numeric::{Number, Numeral};
///
/// let values = [Numeral::parse("V").unwrap(), Numeral::parse("IV").unwrap()];
/// assert_eq!(sum(values).unwrap(), Numeral::parse("IX").unwrap());
/// assert_eq!(sum([1_i32, 2]).unwrap(), 3);
/// ```
pub fn sum<T, I>(values: I) -> NumericResult<T>
where
    T: Number,
    I: IntoIterator<Item = T>,
{
    sum_as::<T, T, I>(values)
}

/// Sum values of one contract type into another.
///
/// Every element goes through `T::create`, so the target type decides which
/// source values it accepts.
pub fn sum_as<T, U, I>(values: I) -> NumericResult<T>
where
    T: Number,
    U: Number,
    I: IntoIterator<Item = U>,
{
    let mut total = T::ZERO;

    for (index, value) in values.into_iter().enumerate() {
        let step = T::create(value).and_then(|number| total.try_add(number));
        match step {
            Ok(next) => total = next,
            Err(error) => {
                tracing::debug!(
                    index,
                    source = %U::KIND,
                    target = %T::KIND,
                    %error,
                    "summation aborted"
                );
                return Err(error);
            },
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{NumericError, Numeral};
    use rust_decimal::Decimal;

    fn numeral(text: &str) -> Numeral {
        Numeral::parse(text).unwrap()
    }

    #[test]
    fn test_sum_numerals() {
        let total = sum([numeral("V"), numeral("IV")]).unwrap();
        assert_eq!(total, numeral("IX"));
        assert_eq!(total.format().unwrap(), "IX");
    }

    #[test]
    fn test_sum_native_types() {
        assert_eq!(sum(vec![1_i32, 2]), Ok(3));
        assert_eq!(
            sum(vec![Decimal::new(11, 1), Decimal::new(22, 1)]),
            Ok(Decimal::new(33, 1))
        );
        assert_eq!(sum([0.5_f64, 0.25]), Ok(0.75));
    }

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum(Vec::<Numeral>::new()), Ok(Numeral::ZERO));
        assert_eq!(sum(Vec::<u64>::new()), Ok(0));
    }

    #[test]
    fn test_sum_overflow_fails() {
        let values = vec![Numeral::MAX, numeral("I")];
        assert_eq!(sum(values), Err(NumericError::DomainRange));

        assert_eq!(sum([i8::MAX, 1]), Err(NumericError::Overflow));
    }

    #[test]
    fn test_sum_rejects_out_of_range_elements() {
        // An unchecked difference produces magnitude 0, which create rejects
        let zero = numeral("V") - numeral("V");
        let values = vec![numeral("X"), zero];
        assert_eq!(sum(values), Err(NumericError::DomainRange));
    }

    #[test]
    fn test_sum_as_converts_each_element() {
        assert_eq!(sum_as::<Numeral, i64, _>([1000_i64, 994]), Ok(numeral("MCMXCIV")));
        assert_eq!(
            sum_as::<Numeral, i64, _>([10_i64, 4000]),
            Err(NumericError::DomainRange)
        );
        assert_eq!(
            sum_as::<Numeral, u128, _>([1_u128]),
            Err(NumericError::UnsupportedKind(crate::numeric::NumberKind::U128))
        );
        assert_eq!(
            sum_as::<i64, Numeral, _>([numeral("M"), numeral("M")]),
            Ok(2000)
        );
    }
}
