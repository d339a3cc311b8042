//! Name analytics engine.
//!
//! Counts first names across the [`NameSlice`] views of a batch and ranks
//! them for charting.

use std::collections::HashMap;

use tracing::debug;

use crate::models::{
    Employee, NameCount, NameFrequencyResult, NameFrequencyTable, NameSlice, SliceFrequencies,
};

/// Computes first-name frequencies for every slice of the batch.
///
/// Each table is ranked by descending count. Names with equal counts keep the
/// order in which they first appear in the batch. Slices with no employees
/// produce empty tables.
///
/// # Examples
///
/// ```
/// use employee_analytics::analytics::compute_name_frequencies;
/// use employee_analytics::models::{Employee, Gender, Workload};
/// use chrono::NaiveDate;
///
/// let employee = |gender, name: &str| Employee {
///     gender,
///     name: name.to_string(),
///     surname: "Novák".to_string(),
///     birthdate: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
///     workload: Workload::Hours40,
/// };
/// let batch = vec![
///     employee(Gender::Male, "Jan"),
///     employee(Gender::Male, "Jan"),
///     employee(Gender::Female, "Eva"),
/// ];
///
/// let names = compute_name_frequencies(&batch);
/// assert_eq!(names.all.frequencies.get("Jan"), Some(2));
/// assert_eq!(names.all.chart[1].label, "Eva");
/// assert!(names.female_part_time.frequencies.is_empty());
/// ```
pub fn compute_name_frequencies(batch: &[Employee]) -> NameFrequencyResult {
    let mut result = NameFrequencyResult::default();

    for slice in NameSlice::ALL {
        let table = rank_names(
            batch
                .iter()
                .filter(|employee| slice.matches(employee))
                .map(|employee| employee.name.as_str()),
        );
        debug!(
            slice = ?slice,
            distinct_names = table.len(),
            employees = table.total(),
            "Ranked first names"
        );
        *result.slice_mut(slice) = SliceFrequencies::from_table(table);
    }

    result
}

/// Counts names and ranks them by descending count, ties in first-seen order.
pub fn rank_names<'a, I>(names: I) -> NameFrequencyTable
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<NameCount> = Vec::new();

    for name in names {
        let index = *positions.entry(name).or_insert_with(|| {
            entries.push(NameCount {
                name: name.to_string(),
                count: 0,
            });
            entries.len() - 1
        });
        entries[index].count += 1;
    }

    // Stable sort: equal counts stay in first-seen order
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    NameFrequencyTable::from_ranked(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChartPoint, Gender, Workload};
    use chrono::NaiveDate;

    fn create_test_employee(gender: Gender, name: &str, workload: Workload) -> Employee {
        Employee {
            gender,
            name: name.to_string(),
            surname: "Dvořák".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            workload,
        }
    }

    fn names(table: &NameFrequencyTable) -> Vec<(&str, usize)> {
        table
            .entries()
            .iter()
            .map(|entry| (entry.name.as_str(), entry.count))
            .collect()
    }

    /// NF-001: two Jans and an Eva
    #[test]
    fn test_basic_frequencies() {
        let batch = vec![
            create_test_employee(Gender::Male, "Jan", Workload::Hours40),
            create_test_employee(Gender::Male, "Jan", Workload::Hours40),
            create_test_employee(Gender::Female, "Eva", Workload::Hours40),
        ];
        let result = compute_name_frequencies(&batch);

        assert_eq!(names(&result.all.frequencies), vec![("Jan", 2), ("Eva", 1)]);
        assert_eq!(names(&result.male.frequencies), vec![("Jan", 2)]);
        assert_eq!(names(&result.female.frequencies), vec![("Eva", 1)]);
        assert_eq!(
            result.all.chart,
            vec![
                ChartPoint {
                    label: "Jan".to_string(),
                    value: 2
                },
                ChartPoint {
                    label: "Eva".to_string(),
                    value: 1
                },
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let table = rank_names(["Zdeněk", "Adam", "Petr", "Adam", "Zdeněk", "Karel"]);
        assert_eq!(
            names(&table),
            vec![("Zdeněk", 2), ("Adam", 2), ("Petr", 1), ("Karel", 1)]
        );
    }

    #[test]
    fn test_higher_count_moves_ahead_of_earlier_name() {
        let table = rank_names(["Petr", "Jan", "Jan"]);
        assert_eq!(names(&table), vec![("Jan", 2), ("Petr", 1)]);
    }

    #[test]
    fn test_part_time_and_full_time_slices() {
        let batch = vec![
            create_test_employee(Gender::Female, "Eva", Workload::Hours10),
            create_test_employee(Gender::Female, "Jana", Workload::Hours40),
            create_test_employee(Gender::Female, "Eva", Workload::Hours30),
            create_test_employee(Gender::Male, "Jan", Workload::Hours40),
            create_test_employee(Gender::Male, "Petr", Workload::Hours20),
            create_test_employee(Gender::Male, "Jan", Workload::Hours10),
        ];
        let result = compute_name_frequencies(&batch);

        assert_eq!(names(&result.female_part_time.frequencies), vec![("Eva", 2)]);
        assert_eq!(names(&result.male_full_time.frequencies), vec![("Jan", 1)]);
        assert_eq!(
            names(&result.male.frequencies),
            vec![("Jan", 2), ("Petr", 1)]
        );
        assert_eq!(
            names(&result.female.frequencies),
            vec![("Eva", 2), ("Jana", 1)]
        );
        assert_eq!(result.all.frequencies.total(), 6);
    }

    #[test]
    fn test_empty_slices_are_not_errors() {
        let batch = vec![create_test_employee(Gender::Male, "Jan", Workload::Hours10)];
        let result = compute_name_frequencies(&batch);

        assert!(result.female.frequencies.is_empty());
        assert!(result.female.chart.is_empty());
        assert!(result.female_part_time.frequencies.is_empty());
        assert!(result.male_full_time.chart.is_empty());
    }

    #[test]
    fn test_empty_batch_gives_empty_tables() {
        let result = compute_name_frequencies(&[]);
        for slice in NameSlice::ALL {
            assert!(result.slice(slice).frequencies.is_empty());
            assert!(result.slice(slice).chart.is_empty());
        }
    }

    #[test]
    fn test_slice_totals_match_slice_sizes() {
        let batch = vec![
            create_test_employee(Gender::Female, "Eva", Workload::Hours10),
            create_test_employee(Gender::Male, "Jan", Workload::Hours40),
            create_test_employee(Gender::Male, "Jan", Workload::Hours40),
        ];
        let result = compute_name_frequencies(&batch);

        for slice in NameSlice::ALL {
            let expected = batch.iter().filter(|e| slice.matches(e)).count();
            assert_eq!(result.slice(slice).frequencies.total(), expected);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let batch = vec![
            create_test_employee(Gender::Female, "Eva", Workload::Hours10),
            create_test_employee(Gender::Male, "Jan", Workload::Hours40),
        ];
        assert_eq!(
            compute_name_frequencies(&batch),
            compute_name_frequencies(&batch)
        );
    }

    #[test]
    fn test_serialized_all_slice_preserves_rank_order() {
        let batch = vec![
            create_test_employee(Gender::Female, "Eva", Workload::Hours10),
            create_test_employee(Gender::Male, "Jan", Workload::Hours40),
            create_test_employee(Gender::Male, "Jan", Workload::Hours40),
        ];
        let json = serde_json::to_string(&compute_name_frequencies(&batch).all.frequencies).unwrap();
        assert_eq!(json, r#"{"Jan":2,"Eva":1}"#);
    }
}
