//! Output section selection.
//!
//! The caller asks for one of four numbered sections; this module maps the
//! number to the matching result and rejects anything else.

use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, NameFrequencyResult, StatisticsResult};

/// The numbered output sections a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// 1: the generated employees.
    Employees,
    /// 2: batch statistics.
    Statistics,
    /// 3: name frequencies.
    NameAnalytics,
    /// 4: name frequencies and statistics together.
    Combined,
}

impl Section {
    /// Every section, in menu order.
    pub const ALL: [Section; 4] = [
        Section::Employees,
        Section::Statistics,
        Section::NameAnalytics,
        Section::Combined,
    ];

    /// Returns the menu number of the section.
    pub fn number(self) -> u8 {
        match self {
            Section::Employees => 1,
            Section::Statistics => 2,
            Section::NameAnalytics => 3,
            Section::Combined => 4,
        }
    }

    /// Short description shown in the interactive menu.
    pub fn description(self) -> &'static str {
        match self {
            Section::Employees => "generated employees",
            Section::Statistics => "statistics",
            Section::NameAnalytics => "name frequencies",
            Section::Combined => "name frequencies and statistics",
        }
    }
}

impl TryFrom<u8> for Section {
    type Error = EngineError;

    fn try_from(section: u8) -> Result<Self, Self::Error> {
        Section::ALL
            .into_iter()
            .find(|candidate| candidate.number() == section)
            .ok_or(EngineError::InvalidSection { section })
    }
}

/// The payload of a selected section.
///
/// Serializes untagged, so the JSON is exactly the selected data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SelectedOutput<'a> {
    /// Section 1.
    Employees(&'a [Employee]),
    /// Section 2.
    Statistics(&'a StatisticsResult),
    /// Section 3.
    NameAnalytics(&'a NameFrequencyResult),
    /// Section 4.
    Combined {
        /// Name frequencies.
        name_analytics: &'a NameFrequencyResult,
        /// Batch statistics.
        statistics: &'a StatisticsResult,
    },
}

/// Selects the output for a numbered section.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSection`] for any number other than 1-4.
///
/// # Examples
///
/// ```
/// use employee_analytics::analytics::{SelectedOutput, select_output};
/// use employee_analytics::error::EngineError;
/// use employee_analytics::models::{NameFrequencyResult, StatisticsResult};
/// use rust_decimal::Decimal;
///
/// let statistics = StatisticsResult {
///     total: 0,
///     workload_10: 0,
///     workload_20: 0,
///     workload_30: 0,
///     workload_40: 0,
///     average_age: Decimal::ZERO,
///     min_age: 0,
///     max_age: 0,
///     median_age: Decimal::ZERO,
///     median_workload: Decimal::ZERO,
///     average_women_workload: Decimal::ZERO,
///     sorted_by_workload: vec![],
/// };
/// let names = NameFrequencyResult::default();
///
/// let output = select_output(2, &[], &statistics, &names).unwrap();
/// assert_eq!(output, SelectedOutput::Statistics(&statistics));
///
/// let error = select_output(5, &[], &statistics, &names).unwrap_err();
/// assert!(matches!(error, EngineError::InvalidSection { section: 5 }));
/// ```
pub fn select_output<'a>(
    section: u8,
    employees: &'a [Employee],
    statistics: &'a StatisticsResult,
    name_analytics: &'a NameFrequencyResult,
) -> EngineResult<SelectedOutput<'a>> {
    let output = match Section::try_from(section)? {
        Section::Employees => SelectedOutput::Employees(employees),
        Section::Statistics => SelectedOutput::Statistics(statistics),
        Section::NameAnalytics => SelectedOutput::NameAnalytics(name_analytics),
        Section::Combined => SelectedOutput::Combined {
            name_analytics,
            statistics,
        },
    };
    Ok(output)
}
