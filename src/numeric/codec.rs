// ============================================================================
// Numeral Codec
// Greedy encoder and subtractive-pair decoder for Roman numeral text
// ============================================================================

use super::errors::{NumericError, NumericResult};
use arrayvec::ArrayString;

/// Smallest magnitude with a canonical numeral form.
pub const MIN_MAGNITUDE: i32 = 1;

/// Largest magnitude with a canonical numeral form.
pub const MAX_MAGNITUDE: i32 = 3_999;

/// Longest canonical numeral: 3888 = MMMDCCCLXXXVIII.
pub const MAX_ENCODED_LEN: usize = 15;

/// Inline buffer holding one encoded numeral.
pub type EncodedNumeral = ArrayString<MAX_ENCODED_LEN>;

/// Descending thresholds with their subtractive pairs.
const ENCODE_TABLE: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// The seven numeral symbols in ascending value order.
pub const SYMBOLS: [char; 7] = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];

/// Base value of a single numeral symbol.
#[inline]
pub const fn symbol_value(symbol: char) -> Option<i32> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Encode a magnitude as canonical numeral text.
///
/// # Errors
/// Returns `DomainRange` if `magnitude` is outside `[1, 3999]`. Zero is
/// rejected even though it is the additive identity of `Numeral`.
///
/// # Example
/// ```
/// use numeral_math::numeric::codec::encode;
///
/// assert_eq!(encode(1994).unwrap().as_str(), "MCMXCIV");
/// assert!(encode(0).is_err());
/// ```
pub fn encode(magnitude: i32) -> NumericResult<EncodedNumeral> {
    if !(MIN_MAGNITUDE..=MAX_MAGNITUDE).contains(&magnitude) {
        return Err(NumericError::DomainRange);
    }

    let mut out = EncodedNumeral::new();
    let mut remaining = magnitude;
    for &(threshold, symbol) in ENCODE_TABLE.iter() {
        while remaining >= threshold {
            // Capacity covers the longest canonical form
            out.try_push_str(symbol)
                .map_err(|_| NumericError::DomainRange)?;
            remaining -= threshold;
        }
    }

    debug_assert_eq!(remaining, 0);
    Ok(out)
}

/// Decode numeral text into a magnitude.
///
/// Each symbol is added to the total unless a strictly larger symbol follows
/// it, in which case it is subtracted. No other well-formedness check is
/// made, so non-canonical strings still decode: `"IIII"` is 4, `"VX"` is 5.
/// The empty string decodes to 0.
///
/// # Errors
/// - `Decode` for any character outside `I V X L C D M`
/// - `Overflow` / `Underflow` if the running total leaves the `i32` range
pub fn decode(text: &str) -> NumericResult<i32> {
    let mut total: i32 = 0;
    let mut symbols = text.chars().enumerate().peekable();

    while let Some((position, symbol)) = symbols.next() {
        let value = symbol_value(symbol).ok_or(NumericError::Decode { symbol, position })?;

        // An unknown lookahead symbol is reported on its own iteration
        let next_value = symbols.peek().and_then(|&(_, next)| symbol_value(next));

        total = match next_value {
            Some(next) if value < next => total
                .checked_sub(value)
                .ok_or(NumericError::Underflow)?,
            _ => total.checked_add(value).ok_or(NumericError::Overflow)?,
        };
    }

    Ok(total)
}
