//! Name frequency models.
//!
//! Frequency tables keep their entries in rank order (descending count, ties
//! in first-seen order), so they are stored as an ordered list rather than a
//! hash map and serialized as a JSON object whose key order is that rank.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::{Employee, Gender};

/// The filtered views of a batch that name frequencies are computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameSlice {
    /// Every employee.
    All,
    /// Female employees.
    Female,
    /// Male employees.
    Male,
    /// Female employees working 10, 20 or 30 hours.
    FemalePartTime,
    /// Male employees working 40 hours.
    MaleFullTime,
}

impl NameSlice {
    /// All slices, in output order.
    pub const ALL: [NameSlice; 5] = [
        NameSlice::All,
        NameSlice::Female,
        NameSlice::Male,
        NameSlice::FemalePartTime,
        NameSlice::MaleFullTime,
    ];

    /// Returns true if the employee belongs to this slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_analytics::models::{Employee, Gender, NameSlice, Workload};
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     gender: Gender::Male,
    ///     name: "Jan".to_string(),
    ///     surname: "Novák".to_string(),
    ///     birthdate: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
    ///     workload: Workload::Hours40,
    /// };
    /// assert!(NameSlice::MaleFullTime.matches(&employee));
    /// assert!(!NameSlice::FemalePartTime.matches(&employee));
    /// ```
    pub fn matches(self, employee: &Employee) -> bool {
        match self {
            NameSlice::All => true,
            NameSlice::Female => employee.gender == Gender::Female,
            NameSlice::Male => employee.gender == Gender::Male,
            NameSlice::FemalePartTime => {
                employee.gender == Gender::Female && employee.workload.is_part_time()
            }
            NameSlice::MaleFullTime => {
                employee.gender == Gender::Male && employee.workload.is_full_time()
            }
        }
    }
}

/// A first name and how often it occurs in a slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    /// The first name.
    pub name: String,
    /// Number of occurrences.
    pub count: usize,
}

/// A single chart data point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Label shown on the chart axis (the first name).
    pub label: String,
    /// Plotted value (the occurrence count).
    pub value: usize,
}

/// First-name occurrence counts for one slice, in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFrequencyTable {
    entries: Vec<NameCount>,
}

impl NameFrequencyTable {
    /// Wraps entries that are already in rank order.
    pub(crate) fn from_ranked(entries: Vec<NameCount>) -> Self {
        Self { entries }
    }

    /// Returns the entries in rank order.
    pub fn entries(&self) -> &[NameCount] {
        &self.entries
    }

    /// Returns the count for a name, if it occurs in the slice.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.count)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the slice contained no employees.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the size of the slice.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Converts the table into chart data points, keeping rank order.
    pub fn chart_data(&self) -> Vec<ChartPoint> {
        self.entries
            .iter()
            .map(|entry| ChartPoint {
                label: entry.name.clone(),
                value: entry.count,
            })
            .collect()
    }
}

impl Serialize for NameFrequencyTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.count)?;
        }
        map.end()
    }
}

/// The frequency table of one slice together with its chart data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SliceFrequencies {
    /// Ranked name counts.
    pub frequencies: NameFrequencyTable,
    /// The same counts as chart data points.
    pub chart: Vec<ChartPoint>,
}

impl SliceFrequencies {
    /// Builds the chart data from a ranked table.
    pub fn from_table(frequencies: NameFrequencyTable) -> Self {
        let chart = frequencies.chart_data();
        Self { frequencies, chart }
    }
}

/// Name frequencies across every [`NameSlice`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NameFrequencyResult {
    /// Every employee.
    pub all: SliceFrequencies,
    /// Female employees.
    pub female: SliceFrequencies,
    /// Male employees.
    pub male: SliceFrequencies,
    /// Female part-time employees.
    pub female_part_time: SliceFrequencies,
    /// Male full-time employees.
    pub male_full_time: SliceFrequencies,
}

impl NameFrequencyResult {
    /// Returns the frequencies for a slice.
    pub fn slice(&self, slice: NameSlice) -> &SliceFrequencies {
        match slice {
            NameSlice::All => &self.all,
            NameSlice::Female => &self.female,
            NameSlice::Male => &self.male,
            NameSlice::FemalePartTime => &self.female_part_time,
            NameSlice::MaleFullTime => &self.male_full_time,
        }
    }

    pub(crate) fn slice_mut(&mut self, slice: NameSlice) -> &mut SliceFrequencies {
        match slice {
            NameSlice::All => &mut self.all,
            NameSlice::Female => &mut self.female,
            NameSlice::Male => &mut self.male,
            NameSlice::FemalePartTime => &mut self.female_part_time,
            NameSlice::MaleFullTime => &mut self.male_full_time,
        }
    }
}
