//! Random employee record generation.
//!
//! Produces batches of [`Employee`] records whose ages, as of a reference
//! date, fall inside a requested range. Any [`rand::Rng`] can drive the
//! generator; a seeded `StdRng` gives reproducible batches.

use chrono::{Days, Months, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::config::NameLists;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Gender, Workload};

/// Inclusive range of ages in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    min: u32,
    max: u32,
}

impl AgeRange {
    /// Creates an age range.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] when `min` is greater than
    /// `max`.
    pub fn new(min: u32, max: u32) -> EngineResult<Self> {
        if min > max {
            return Err(EngineError::invalid_parameter(
                "age_range",
                format!("minimum age {} is greater than maximum age {}", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    /// Youngest age in the range.
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Oldest age in the range.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Returns the earliest and latest birthdates whose age on
    /// `reference_date` lies in the range.
    ///
    /// The latest birthdate is the reference date `min` years earlier; the
    /// earliest is the day after the reference date `max + 1` years earlier.
    /// Month arithmetic clamps 29 February to the 28th in common years.
    pub fn birthdate_bounds(&self, reference_date: NaiveDate) -> EngineResult<(NaiveDate, NaiveDate)> {
        let out_of_range = || {
            EngineError::invalid_parameter(
                "age_range",
                format!(
                    "ages {}-{} are out of the supported calendar range for {}",
                    self.min, self.max, reference_date
                ),
            )
        };

        let latest = reference_date
            .checked_sub_months(Months::new(self.min.checked_mul(12).ok_or_else(out_of_range)?))
            .ok_or_else(out_of_range)?;
        let earliest = self
            .max
            .checked_add(1)
            .and_then(|years| years.checked_mul(12))
            .and_then(|months| reference_date.checked_sub_months(Months::new(months)))
            .and_then(|date| date.checked_add_days(Days::new(1)))
            .ok_or_else(out_of_range)?;

        Ok((earliest, latest))
    }
}

/// Generates `count` random employees.
///
/// Each record gets a fair-coin gender, a first name and surname drawn
/// uniformly from that gender's lists, a uniformly drawn workload, and a
/// birthdate drawn uniformly from every date whose age on `reference_date`
/// lies within `ages`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidParameter`] when a name list is empty or the
/// age range reaches outside the supported calendar.
///
/// # Examples
///
/// ```
/// use employee_analytics::analytics::age_on;
/// use employee_analytics::config::ConfigLoader;
/// use employee_analytics::generator::{AgeRange, generate_employees};
/// use chrono::NaiveDate;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let config = ConfigLoader::embedded()?;
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let ages = AgeRange::new(25, 30)?;
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let batch = generate_employees(50, ages, today, config.names(), &mut rng)?;
/// assert_eq!(batch.len(), 50);
/// assert!(batch.iter().all(|e| (25..=30).contains(&age_on(e.birthdate, today))));
/// # Ok::<(), employee_analytics::error::EngineError>(())
/// ```
pub fn generate_employees<R>(
    count: usize,
    ages: AgeRange,
    reference_date: NaiveDate,
    names: &NameLists,
    rng: &mut R,
) -> EngineResult<Vec<Employee>>
where
    R: Rng + ?Sized,
{
    let (earliest, latest) = ages.birthdate_bounds(reference_date)?;
    let span_days = u64::try_from((latest - earliest).num_days()).map_err(|_| {
        EngineError::invalid_parameter("age_range", "birthdate window is empty")
    })?;

    let mut employees = Vec::with_capacity(count);
    for _ in 0..count {
        let gender = if rng.gen_bool(0.5) {
            Gender::Female
        } else {
            Gender::Male
        };
        let name = pick(names.first_names(gender), rng, gender, "first_names")?;
        let surname = pick(names.surnames(gender), rng, gender, "surnames")?;
        let birthdate = earliest
            .checked_add_days(Days::new(rng.gen_range(0..=span_days)))
            .ok_or_else(|| EngineError::invalid_parameter("birthdate", "date out of range"))?;
        let workload = *Workload::ALL
            .choose(rng)
            .ok_or_else(|| EngineError::invalid_parameter("workload", "no workload levels"))?;

        employees.push(Employee {
            gender,
            name,
            surname,
            birthdate,
            workload,
        });
    }

    info!(
        count,
        min_age = ages.min(),
        max_age = ages.max(),
        %earliest,
        %latest,
        "Generated employee batch"
    );

    Ok(employees)
}

fn pick<R>(list: &[String], rng: &mut R, gender: Gender, field: &str) -> EngineResult<String>
where
    R: Rng + ?Sized,
{
    list.choose(rng).cloned().ok_or_else(|| {
        EngineError::invalid_parameter(
            format!("{}.{}", gender.as_str(), field),
            "name list is empty",
        )
    })
}
