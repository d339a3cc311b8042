//! Statistics result model.
//!
//! This module contains the [`StatisticsResult`] type that captures the
//! aggregate numbers computed over one batch of employees.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Employee;

/// Aggregate statistics over a batch of employees.
///
/// Ages are whole years as of the reference date the statistics were
/// computed for. Averages are rounded to one decimal place; medians are
/// exact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsResult {
    /// Number of employees in the batch.
    pub total: usize,
    /// Employees working 10 hours a week.
    pub workload_10: usize,
    /// Employees working 20 hours a week.
    pub workload_20: usize,
    /// Employees working 30 hours a week.
    pub workload_30: usize,
    /// Employees working 40 hours a week.
    pub workload_40: usize,
    /// Mean age, rounded to one decimal place.
    pub average_age: Decimal,
    /// Youngest age.
    pub min_age: i32,
    /// Oldest age.
    pub max_age: i32,
    /// Median age.
    pub median_age: Decimal,
    /// Median weekly workload in hours.
    pub median_workload: Decimal,
    /// Mean workload of female employees, rounded to one decimal place.
    /// Zero when the batch has no female employees.
    pub average_women_workload: Decimal,
    /// The batch ordered by ascending workload, keeping input order among
    /// equal workloads.
    pub sorted_by_workload: Vec<Employee>,
}

impl StatisticsResult {
    /// Sum of the four workload histogram buckets.
    pub fn workload_histogram_total(&self) -> usize {
        self.workload_10 + self.workload_20 + self.workload_30 + self.workload_40
    }
}
