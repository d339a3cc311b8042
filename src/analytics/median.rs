//! Median and rounding helpers shared by the statistics engine.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Returns the median of `values`.
///
/// The values are sorted on a copy, so the caller's order is left intact. For
/// an even number of values the result is the exact mean of the two middle
/// values.
///
/// # Errors
///
/// Returns [`EngineError::EmptyInput`] when `values` is empty.
///
/// # Examples
///
/// ```
/// use employee_analytics::analytics::median;
/// use rust_decimal::Decimal;
///
/// let values = [Decimal::from(4), Decimal::from(1), Decimal::from(3), Decimal::from(2)];
/// assert_eq!(median(&values).unwrap(), Decimal::new(25, 1));
/// assert!(median(&[]).is_err());
/// ```
pub fn median(values: &[Decimal]) -> EngineResult<Decimal> {
    if values.is_empty() {
        return Err(EngineError::EmptyInput {
            statistic: "median".to_string(),
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort();

    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[middle])
    } else {
        Ok((sorted[middle - 1] + sorted[middle]) / Decimal::TWO)
    }
}

/// Rounds to one decimal place, halves away from zero.
pub fn round_one_decimal(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Mean of `values` rounded to one decimal place, or `None` when empty.
pub(crate) fn rounded_mean<I>(values: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    let (sum, count) = values
        .into_iter()
        .fold((Decimal::ZERO, 0u64), |(sum, count), value| {
            (sum + value, count + 1)
        });
    if count == 0 {
        None
    } else {
        Some(round_one_decimal(sum / Decimal::from(count)))
    }
}
