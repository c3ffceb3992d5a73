// ============================================================================
// Parallel Summation
// Per-partition subtotals on scoped workers, merged with checked addition
// ============================================================================

use super::config::SummationConfig;
use super::sum::sum;
use crate::numeric::{Number, NumericError, NumericResult};

/// Sum a slice by reducing partitions concurrently.
///
/// The slice is split into `config.partitions` contiguous chunks, each
/// reduced with [`sum`] on its own scoped thread; the subtotals are then
/// merged in partition order with [`Number::try_add`].
///
/// The result, success or failure, is the one [`sum`] would produce. Merging
/// subtotals only preserves the failure points of the sequential running
/// total when that total never decreases, so a slice holding any element
/// that does not compare `>= ZERO` (negative values, NaN) is summed on the
/// calling thread. When a partition or a merge fails, the slice is summed
/// again sequentially so the reported error is the first one in element
/// order.
///
/// Inputs for which [`SummationConfig::should_partition`] is false are
/// summed on the calling thread.
///
/// # Errors
/// - `InvalidInput` if the configuration does not validate
/// - `PartitionPanicked` if a worker thread panics
/// - Any conversion or addition error from the summation itself
pub fn parallel_sum<T>(values: &[T], config: &SummationConfig) -> NumericResult<T>
where
    T: Number + Send + Sync,
{
    if let Err(reason) = config.validate() {
        tracing::debug!(%reason, "rejected summation config");
        return Err(NumericError::InvalidInput);
    }

    if !config.should_partition(values.len()) {
        return sum(values.iter().copied());
    }

    // Cancelling partitions could hide an intermediate overflow
    if !values.iter().all(|v| *v >= T::ZERO) {
        tracing::debug!(
            len = values.len(),
            "summing sequentially, running total is not monotone"
        );
        return sum(values.iter().copied());
    }

    let chunk_len = values.len().div_ceil(config.partitions);
    tracing::debug!(
        len = values.len(),
        partitions = config.partitions,
        chunk_len,
        "partitioning summation"
    );

    let subtotals = crossbeam::thread::scope(|scope| {
        let workers: Vec<_> = values
            .chunks(chunk_len)
            .map(|part| scope.spawn(move |_| sum(part.iter().copied())))
            .collect();

        workers
            .into_iter()
            .map(|worker| worker.join().map_err(|_| NumericError::PartitionPanicked))
            .collect::<Vec<_>>()
    })
    .map_err(|_| NumericError::PartitionPanicked)?;

    match merge(subtotals) {
        Err(NumericError::PartitionPanicked) => Err(NumericError::PartitionPanicked),
        Err(err) => {
            tracing::debug!(%err, "partitioned summation failed, locating first error");
            sum(values.iter().copied())
        }
        ok => ok,
    }
}

fn merge<T: Number>(subtotals: Vec<NumericResult<NumericResult<T>>>) -> NumericResult<T> {
    let mut total = T::ZERO;
    for subtotal in subtotals {
        total = total.try_add(subtotal??)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::Numeral;
    use rust_decimal::Decimal;

    fn forced(partitions: usize) -> SummationConfig {
        SummationConfig::new(partitions, 1)
    }

    #[test]
    fn test_matches_sequential_for_integers() {
        let values: Vec<i64> = (1..=10_000).collect();
        let expected = sum(values.iter().copied()).unwrap();
        assert_eq!(parallel_sum(&values, &forced(4)), Ok(expected));
        assert_eq!(parallel_sum(&values, &forced(7)), Ok(expected));
    }

    #[test]
    fn test_numerals_within_range() {
        let values = vec![Numeral::new(1000); 3];
        assert_eq!(parallel_sum(&values, &forced(3)), Ok(Numeral::new(3000)));
    }

    #[test]
    fn test_merge_overflow_fails() {
        // Each partition stays in range; the merge does not
        let values = vec![Numeral::new(2000), Numeral::new(2000)];
        assert_eq!(
            parallel_sum(&values, &forced(2)),
            Err(NumericError::DomainRange)
        );
    }

    #[test]
    fn test_invalid_element_fails() {
        let mut values = vec![Numeral::ONE; 16];
        values[11] = Numeral::ZERO;
        assert_eq!(
            parallel_sum(&values, &forced(4)),
            Err(NumericError::DomainRange)
        );
    }

    #[test]
    fn test_more_partitions_than_elements() {
        let values = vec![Decimal::new(15, 1), Decimal::new(25, 1)];
        assert_eq!(parallel_sum(&values, &forced(16)), Ok(Decimal::from(4)));
    }

    #[test]
    fn test_small_input_stays_sequential() {
        let config = SummationConfig::new(8, 1_000);
        assert_eq!(parallel_sum(&[1_u32, 2, 3], &config), Ok(6));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parallel_sum::<Numeral>(&[], &forced(4)), Ok(Numeral::ZERO));
    }

    #[test]
    fn test_mixed_sign_overflow_matches_sequential() {
        // 100 + 27 + 1 overflows before the -1 can cancel it
        let values = [100_i8, 27, 1, -1];
        assert_eq!(sum(values.iter().copied()), Err(NumericError::Overflow));
        assert_eq!(parallel_sum(&values, &forced(2)), Err(NumericError::Overflow));
    }

    #[test]
    fn test_mixed_sign_success_matches_sequential() {
        let values: Vec<i32> = (-500..500).collect();
        assert_eq!(parallel_sum(&values, &forced(4)), Ok(-500));

        let decimals = [Decimal::new(-15, 1), Decimal::new(40, 1), Decimal::new(-5, 1)];
        assert_eq!(parallel_sum(&decimals, &forced(3)), Ok(Decimal::from(2)));
    }

    #[test]
    fn test_failure_matches_sequential() {
        // The range is exceeded before the invalid element is reached
        let mut values = vec![Numeral::new(1000); 8];
        values[6] = Numeral::ZERO;
        assert_eq!(sum(values.iter().copied()), Err(NumericError::DomainRange));
        assert_eq!(
            parallel_sum(&values, &forced(2)),
            sum(values.iter().copied())
        );

        let unsigned = [u8::MAX, 1, 0, 0];
        assert_eq!(parallel_sum(&unsigned, &forced(2)), Err(NumericError::Overflow));
    }

    #[test]
    fn test_invalid_config() {
        let config = SummationConfig::new(0, 1);
        assert_eq!(
            parallel_sum(&[1_i32], &config),
            Err(NumericError::InvalidInput)
        );
    }
}
