//! Employee model and related types.
//!
//! This module defines the [`Employee`] record together with the [`Gender`]
//! and [`Workload`] enums used to slice batches of generated employees.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::birthdate;

/// The gender of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male employee.
    Male,
    /// Female employee.
    Female,
}

impl Gender {
    /// Both genders, in the order used by configuration files.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Returns the lowercase label used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// Weekly workload category, in hours.
///
/// 10, 20 and 30 hours are part-time; 40 hours is full-time. Serialized as the
/// plain hour count.
///
/// # Examples
///
/// ```
/// use employee_analytics::models::Workload;
///
/// let workload = Workload::try_from(30).unwrap();
/// assert_eq!(workload.hours(), 30);
/// assert!(workload.is_part_time());
/// assert!(Workload::try_from(35).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Workload {
    /// 10 hours per week.
    Hours10,
    /// 20 hours per week.
    Hours20,
    /// 30 hours per week.
    Hours30,
    /// 40 hours per week.
    Hours40,
}

impl Workload {
    /// Every workload level, ascending.
    pub const ALL: [Workload; 4] = [
        Workload::Hours10,
        Workload::Hours20,
        Workload::Hours30,
        Workload::Hours40,
    ];

    /// Returns the number of weekly hours.
    pub fn hours(self) -> u8 {
        match self {
            Workload::Hours10 => 10,
            Workload::Hours20 => 20,
            Workload::Hours30 => 30,
            Workload::Hours40 => 40,
        }
    }

    /// Returns true for the 10, 20 and 30 hour levels.
    pub fn is_part_time(self) -> bool {
        !self.is_full_time()
    }

    /// Returns true for the 40 hour level.
    pub fn is_full_time(self) -> bool {
        self == Workload::Hours40
    }
}

impl TryFrom<u8> for Workload {
    type Error = EngineError;

    fn try_from(hours: u8) -> Result<Self, Self::Error> {
        match hours {
            10 => Ok(Workload::Hours10),
            20 => Ok(Workload::Hours20),
            30 => Ok(Workload::Hours30),
            40 => Ok(Workload::Hours40),
            _ => Err(EngineError::InvalidWorkload { hours }),
        }
    }
}

impl From<Workload> for u8 {
    fn from(workload: Workload) -> Self {
        workload.hours()
    }
}

/// A single generated employee record.
///
/// Records are immutable values: the engines only ever read them, and the
/// sorted views they produce are copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's gender.
    pub gender: Gender,
    /// First name.
    pub name: String,
    /// Last name.
    pub surname: String,
    /// Date of birth, serialized as an ISO-8601 date-time at midnight UTC.
    #[serde(with = "birthdate")]
    pub birthdate: NaiveDate,
    /// Weekly workload.
    pub workload: Workload,
}

impl Employee {
    /// Returns true if the employee is female.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_analytics::models::{Employee, Gender, Workload};
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     gender: Gender::Female,
    ///     name: "Eva".to_string(),
    ///     surname: "Nováková".to_string(),
    ///     birthdate: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
    ///     workload: Workload::Hours20,
    /// };
    /// assert!(employee.is_female());
    /// ```
    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }

    /// Returns true if the employee is male.
    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }
}
