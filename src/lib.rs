// ============================================================================
// Numeral Math Library
// Bounded Roman numeral value type over a generic numeric contract
// ============================================================================

//! # Numeral Math
//!
//! A bounded integer type whose canonical text is a Roman numeral, and a
//! numeric contract that lets generic algorithms treat it like any native
//! number.
//!
//! ## Features
//!
//! - **Round-trip codec** for magnitudes in `[1, 3999]` (greedy encoder,
//!   subtractive-pair decoder)
//! - **Generic numeric contract** implemented by `Numeral`, every native
//!   integer and float type, and `rust_decimal::Decimal`
//! - **Closed conversion dispatch**: each source value is tagged with its
//!   kind and the target decides how (and whether) to narrow it
//! - **Generic summation**, sequential or partitioned across scoped threads
//!
//! ## Example
//!
//! ```rust
//! use numeral_math::prelude::*;
//!
//! let numerals = vec![Numeral::parse("V").unwrap(), Numeral::parse("IV").unwrap()];
//! let total = sum(numerals).unwrap();
//! assert_eq!(total.format().unwrap(), "IX");
//!
//! // The same routine works for native types
//! assert_eq!(sum(vec![1_i32, 2]).unwrap(), 3);
//!
//! // Conversions enforce the numeral range
//! assert!(Numeral::create(4000_i64).is_err());
//! ```

pub mod algorithms;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::algorithms::{parallel_sum, sum, sum_as, SummationConfig};
    pub use crate::numeric::{
        Number, NumberKind, NumberValue, Numeral, NumericError, NumericResult,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    fn generic_round_trip<T: Number>(text: &str) -> NumericResult<String> {
        T::parse(text)?.format()
    }

    #[test]
    fn test_end_to_end_summation() {
        let numerals = vec![
            Numeral::parse("V").unwrap(),
            Numeral::parse("IV").unwrap(),
        ];
        let total = sum(numerals).unwrap();
        assert_eq!(total, Numeral::parse("IX").unwrap());
        assert_eq!(total.to_string(), "IX");

        assert_eq!(sum(vec![1_i32, 2]), Ok(3));
        assert_eq!(
            sum(vec![Decimal::new(11, 1), Decimal::new(22, 1)]).unwrap().to_string(),
            "3.3"
        );
    }

    #[test]
    fn test_summation_beyond_range_fails() {
        let numerals: Vec<Numeral> = ["MM", "M", "CM", "XCIX", "I"]
            .iter()
            .map(|s| Numeral::parse(s).unwrap())
            .collect();
        assert_eq!(sum(numerals), Err(NumericError::DomainRange));
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let numerals = vec![Numeral::parse("X").unwrap(); 399];
        let config = SummationConfig::new(4, 1);
        let sequential = sum(numerals.iter().copied()).unwrap();
        let parallel = parallel_sum(&numerals, &config).unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(parallel.format().unwrap(), "MMMCMXC");

        let mut too_many = numerals;
        too_many.push(Numeral::parse("X").unwrap());
        assert_eq!(sum(too_many.iter().copied()), Err(NumericError::DomainRange));
        assert_eq!(
            parallel_sum(&too_many, &config),
            Err(NumericError::DomainRange)
        );
    }

    #[test]
    fn test_generic_text_handling() {
        assert_eq!(generic_round_trip::<Numeral>("IIII"), Ok("IV".to_string()));
        assert_eq!(generic_round_trip::<i32>("42"), Ok("42".to_string()));
        assert_eq!(
            generic_round_trip::<Numeral>("ABC"),
            Err(NumericError::Decode {
                symbol: 'A',
                position: 0
            })
        );
        assert_eq!(generic_round_trip::<Numeral>(""), Err(NumericError::DomainRange));
    }

    #[test]
    fn test_cross_type_conversion() {
        let year = Numeral::parse("MCMXCIV").unwrap();
        assert_eq!(i16::create(year), Ok(1994));
        assert_eq!(f64::create(year), Ok(1994.0));
        assert_eq!(Numeral::create(Decimal::new(19945, 1)), Ok(year));
        assert_eq!(Numeral::try_create(1994_u64), Some(year));
        assert_eq!(Numeral::try_create(40_000_u64), None);
    }
}
