//! Integration tests for the Employee Analytics Engine.
//!
//! This test suite covers the full pipeline:
//! - Configuration loading (bundled and on disk)
//! - Seeded record generation
//! - Statistics over generated and hand-built batches
//! - Name frequencies and chart data
//! - Output section selection and its JSON shape
//! - Error cases

use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use employee_analytics::analytics::{
    age_on, compute_name_frequencies, compute_statistics, select_output,
};
use employee_analytics::cli::{Prompter, collect_parameters};
use employee_analytics::config::ConfigLoader;
use employee_analytics::error::EngineError;
use employee_analytics::generator::{AgeRange, generate_employees};
use employee_analytics::models::{Employee, Gender, NameSlice, Workload};

// =============================================================================
// Test Helpers
// =============================================================================

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn generated_batch(count: usize, min_age: u32, max_age: u32, seed: u64) -> Vec<Employee> {
    let config = ConfigLoader::load("./config").expect("Failed to load config");
    let ages = AgeRange::new(min_age, max_age).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    generate_employees(count, ages, reference_date(), config.names(), &mut rng)
        .expect("Failed to generate employees")
}

fn employee(gender: &str, name: &str, birthdate: &str, workload: u8) -> Employee {
    serde_json::from_value(json!({
        "gender": gender,
        "name": name,
        "surname": "Novák",
        "birthdate": format!("{}T00:00:00.000Z", birthdate),
        "workload": workload
    }))
    .expect("Invalid employee fixture")
}

fn fixture_batch() -> Vec<Employee> {
    vec![
        employee("male", "Jan", "1990-01-15", 40),
        employee("female", "Eva", "1998-12-24", 20),
        employee("male", "Jan", "1978-06-01", 10),
        employee("female", "Jana", "2005-03-03", 30),
        employee("female", "Eva", "1963-05-31", 40),
        employee("male", "Petr", "1985-07-19", 40),
    ]
}

fn section_json(section: u8, batch: &[Employee]) -> Value {
    let statistics = compute_statistics(batch, reference_date()).unwrap();
    let names = compute_name_frequencies(batch);
    let output = select_output(section, batch, &statistics, &names).unwrap();
    serde_json::to_value(output).unwrap()
}

// =============================================================================
// Generated Batches
// =============================================================================

#[test]
fn test_generated_batch_respects_age_bounds() {
    let batch = generated_batch(1000, 25, 40, 2024);
    let stats = compute_statistics(&batch, reference_date()).unwrap();

    assert_eq!(stats.total, 1000);
    assert!(stats.min_age >= 25);
    assert!(stats.max_age <= 40);
    assert!(
        batch
            .iter()
            .all(|e| (25..=40).contains(&age_on(e.birthdate, reference_date())))
    );
}

#[test]
fn test_generated_batch_histogram_sums_to_total() {
    let batch = generated_batch(333, 18, 100, 7);
    let stats = compute_statistics(&batch, reference_date()).unwrap();
    assert_eq!(
        stats.workload_10 + stats.workload_20 + stats.workload_30 + stats.workload_40,
        stats.total
    );
}

#[test]
fn test_generated_batch_name_slices_partition_genders() {
    let batch = generated_batch(500, 18, 100, 13);
    let names = compute_name_frequencies(&batch);

    let all = names.slice(NameSlice::All).frequencies.total();
    let female = names.slice(NameSlice::Female).frequencies.total();
    let male = names.slice(NameSlice::Male).frequencies.total();
    assert_eq!(all, 500);
    assert_eq!(female + male, all);
    assert!(names.female_part_time.frequencies.total() <= female);
    assert!(names.male_full_time.frequencies.total() <= male);
}

#[test]
fn test_same_seed_gives_identical_outputs() {
    let first = generated_batch(100, 20, 60, 99);
    let second = generated_batch(100, 20, 60, 99);

    assert_eq!(first, second);
    assert_eq!(section_json(4, &first), section_json(4, &second));
}

#[test]
fn test_engines_do_not_reorder_batch() {
    let batch = generated_batch(200, 18, 100, 5);
    let before = batch.clone();

    let stats_first = compute_statistics(&batch, reference_date()).unwrap();
    let names_first = compute_name_frequencies(&batch);
    let stats_second = compute_statistics(&batch, reference_date()).unwrap();
    let names_second = compute_name_frequencies(&batch);

    assert_eq!(batch, before);
    assert_eq!(stats_first, stats_second);
    assert_eq!(names_first, names_second);
}

// =============================================================================
// Fixture Batch
// =============================================================================

#[test]
fn test_fixture_statistics() {
    let stats = compute_statistics(&fixture_batch(), reference_date()).unwrap();

    // Ages: 34, 25, 46, 19, 61, 38
    assert_eq!(stats.total, 6);
    assert_eq!(stats.min_age, 19);
    assert_eq!(stats.max_age, 61);
    assert_eq!(stats.median_age, decimal("36"));
    assert_eq!(stats.average_age, decimal("37.2"));
    assert_eq!(stats.workload_10, 1);
    assert_eq!(stats.workload_20, 1);
    assert_eq!(stats.workload_30, 1);
    assert_eq!(stats.workload_40, 3);
    assert_eq!(stats.median_workload, decimal("35"));
    assert_eq!(stats.average_women_workload, decimal("30"));
}

#[test]
fn test_fixture_sorted_by_workload() {
    let stats = compute_statistics(&fixture_batch(), reference_date()).unwrap();
    let order: Vec<(&str, u8)> = stats
        .sorted_by_workload
        .iter()
        .map(|e| (e.name.as_str(), e.workload.hours()))
        .collect();

    assert_eq!(
        order,
        vec![
            ("Jan", 10),
            ("Eva", 20),
            ("Jana", 30),
            ("Jan", 40),
            ("Eva", 40),
            ("Petr", 40),
        ]
    );
}

#[test]
fn test_fixture_name_frequencies() {
    let json = section_json(3, &fixture_batch());

    assert_eq!(json["all"]["frequencies"], json!({"Jan": 2, "Eva": 2, "Jana": 1, "Petr": 1}));
    assert_eq!(json["male"]["frequencies"], json!({"Jan": 2, "Petr": 1}));
    assert_eq!(json["female"]["frequencies"], json!({"Eva": 2, "Jana": 1}));
    assert_eq!(json["female_part_time"]["frequencies"], json!({"Eva": 1, "Jana": 1}));
    assert_eq!(json["male_full_time"]["frequencies"], json!({"Jan": 1, "Petr": 1}));
    assert_eq!(
        json["all"]["chart"],
        json!([
            {"label": "Jan", "value": 2},
            {"label": "Eva", "value": 2},
            {"label": "Jana", "value": 1},
            {"label": "Petr", "value": 1}
        ])
    );
}

#[test]
fn test_name_frequencies_keep_rank_order_in_json_text() {
    let batch = fixture_batch();
    let names = compute_name_frequencies(&batch);
    let text = serde_json::to_string(&names.all.frequencies).unwrap();
    assert_eq!(text, r#"{"Jan":2,"Eva":2,"Jana":1,"Petr":1}"#);
}

#[test]
fn test_men_only_batch() {
    let batch = vec![
        employee("male", "Jan", "1990-01-15", 40),
        employee("male", "Jan", "1990-01-15", 40),
    ];
    let stats = compute_statistics(&batch, reference_date()).unwrap();
    let names = compute_name_frequencies(&batch);

    assert_eq!(stats.average_women_workload, Decimal::ZERO);
    assert!(names.female.frequencies.is_empty());
    assert!(names.female_part_time.chart.is_empty());
    assert_eq!(names.male_full_time.frequencies.get("Jan"), Some(2));
}

// =============================================================================
// Output Sections
// =============================================================================

#[test]
fn test_section_1_returns_employees() {
    let json = section_json(1, &fixture_batch());

    assert_eq!(json.as_array().unwrap().len(), 6);
    assert_eq!(json[0]["gender"], "male");
    assert_eq!(json[0]["birthdate"], "1990-01-15T00:00:00.000Z");
    assert_eq!(json[0]["workload"], 40);
}

#[test]
fn test_section_2_returns_statistics() {
    let json = section_json(2, &fixture_batch());

    assert_eq!(json["total"], 6);
    assert_eq!(json["average_age"], "37.2");
    assert_eq!(json["sorted_by_workload"].as_array().unwrap().len(), 6);
}

#[test]
fn test_section_4_returns_both() {
    let json = section_json(4, &fixture_batch());

    assert_eq!(json["statistics"]["total"], 6);
    assert_eq!(json["name_analytics"]["all"]["frequencies"]["Jan"], 2);
}

#[test]
fn test_unknown_section_is_an_error() {
    let batch = fixture_batch();
    let statistics = compute_statistics(&batch, reference_date()).unwrap();
    let names = compute_name_frequencies(&batch);

    for section in [0u8, 5, 255] {
        let result = select_output(section, &batch, &statistics, &names);
        assert!(matches!(result, Err(EngineError::InvalidSection { .. })));
    }
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn test_empty_batch_statistics_fail() {
    let result = compute_statistics(&[], reference_date());
    assert!(matches!(result, Err(EngineError::EmptyInput { .. })));
}

#[test]
fn test_empty_batch_name_frequencies_are_empty() {
    let names = compute_name_frequencies(&[]);
    assert!(names.all.frequencies.is_empty());
}

#[test]
fn test_missing_config_directory() {
    let result = ConfigLoader::load("./no/such/config");
    assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
}

#[test]
fn test_invalid_workload_in_input_is_rejected() {
    let result: Result<Employee, _> = serde_json::from_value(json!({
        "gender": "female",
        "name": "Eva",
        "surname": "Nováková",
        "birthdate": "1990-01-15T00:00:00.000Z",
        "workload": 35
    }));
    assert!(result.is_err());
}

// =============================================================================
// Interactive Flow
// =============================================================================

#[test]
fn test_prompted_parameters_drive_the_pipeline() {
    let config = ConfigLoader::embedded().unwrap();
    let input = "10\n30\n120\n40\n-3\n25\n2\n";
    let mut prompter = Prompter::new(input.as_bytes(), Vec::new());

    let params = collect_parameters(&mut prompter, config.age_limits()).unwrap();
    assert_eq!(params.ages, AgeRange::new(30, 40).unwrap());
    assert_eq!(params.count, 25);

    let mut rng = StdRng::seed_from_u64(1);
    let batch = generate_employees(
        params.count,
        params.ages,
        reference_date(),
        config.names(),
        &mut rng,
    )
    .unwrap();
    let json = section_json(params.section.number(), &batch);

    assert_eq!(json["total"], 25);
    assert!(json["min_age"].as_i64().unwrap() >= 30);
    assert!(json["max_age"].as_i64().unwrap() <= 40);
    assert!(matches!(
        batch.first().map(|e| e.gender),
        Some(Gender::Male) | Some(Gender::Female)
    ));
    assert!(batch.iter().all(|e| Workload::ALL.contains(&e.workload)));
}
