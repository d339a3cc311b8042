//! Statistics engine.
//!
//! This module turns a batch of employees into a [`StatisticsResult`]:
//! workload histogram, age extremes, averages and medians, and a copy of the
//! batch ordered by workload.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, StatisticsResult, Workload};

use super::age::age_on;
use super::median::{median, rounded_mean};

/// Computes aggregate statistics over a batch of employees.
///
/// Ages are computed as of `reference_date`. The batch is not modified;
/// `sorted_by_workload` is a stably sorted copy.
///
/// # Arguments
///
/// * `batch` - The employees to summarize
/// * `reference_date` - The date ages are computed against
///
/// # Errors
///
/// Returns [`EngineError::EmptyInput`] when the batch is empty, since age
/// medians and extremes are undefined for no employees.
///
/// # Examples
///
/// ```
/// use employee_analytics::analytics::compute_statistics;
/// use employee_analytics::models::{Employee, Gender, Workload};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = |gender, name: &str, year, workload| Employee {
///     gender,
///     name: name.to_string(),
///     surname: "Novák".to_string(),
///     birthdate: NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
///     workload,
/// };
/// let batch = vec![
///     employee(Gender::Male, "Jan", 1990, Workload::Hours40),
///     employee(Gender::Male, "Petr", 2000, Workload::Hours10),
/// ];
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
///
/// let stats = compute_statistics(&batch, today).unwrap();
/// assert_eq!(stats.total, 2);
/// assert_eq!(stats.min_age, 24);
/// assert_eq!(stats.max_age, 34);
/// assert_eq!(stats.median_workload, Decimal::from(25));
/// assert_eq!(stats.average_women_workload, Decimal::ZERO);
/// ```
pub fn compute_statistics(
    batch: &[Employee],
    reference_date: NaiveDate,
) -> EngineResult<StatisticsResult> {
    let ages: Vec<i32> = batch
        .iter()
        .map(|employee| age_on(employee.birthdate, reference_date))
        .collect();
    let age_values: Vec<Decimal> = ages.iter().copied().map(Decimal::from).collect();
    let workload_values: Vec<Decimal> = batch
        .iter()
        .map(|employee| Decimal::from(employee.workload.hours()))
        .collect();

    let median_age = median(&age_values)?;
    let median_workload = median(&workload_values)?;

    let min_age = ages.iter().copied().min().ok_or_else(|| empty("minimum age"))?;
    let max_age = ages.iter().copied().max().ok_or_else(|| empty("maximum age"))?;
    let average_age = rounded_mean(age_values).ok_or_else(|| empty("average age"))?;

    let average_women_workload = rounded_mean(
        batch
            .iter()
            .filter(|employee| employee.is_female())
            .map(|employee| Decimal::from(employee.workload.hours())),
    )
    .unwrap_or(Decimal::ZERO);

    let count_workload = |level: Workload| {
        batch
            .iter()
            .filter(|employee| employee.workload == level)
            .count()
    };

    let mut sorted_by_workload = batch.to_vec();
    // Vec::sort_by_key is stable
    sorted_by_workload.sort_by_key(|employee| employee.workload);

    let result = StatisticsResult {
        total: batch.len(),
        workload_10: count_workload(Workload::Hours10),
        workload_20: count_workload(Workload::Hours20),
        workload_30: count_workload(Workload::Hours30),
        workload_40: count_workload(Workload::Hours40),
        average_age,
        min_age,
        max_age,
        median_age,
        median_workload,
        average_women_workload,
        sorted_by_workload,
    };

    debug!(
        total = result.total,
        %reference_date,
        average_age = %result.average_age,
        median_age = %result.median_age,
        "Computed batch statistics"
    );

    Ok(result)
}

fn empty(statistic: &str) -> EngineError {
    EngineError::EmptyInput {
        statistic: statistic.to_string(),
    }
}
