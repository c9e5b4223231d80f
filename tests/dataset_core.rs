//! Sample dataset shape and typing: 6 columns, 10 rows, ids 1..10, and the
//! text-to-date cast on `hire_date`.

use lakelet::employees::{employee_schema, sample_employees};
use lakelet::{cast, col, DataFrame, DataType};
use polars::prelude::df;

#[test]
fn built_table_has_six_columns_and_ten_rows() {
    let df = sample_employees().unwrap();
    assert_eq!(df.columns().len(), 6);
    assert_eq!(df.count(), 10);
}

#[test]
fn employee_ids_are_one_through_ten_in_insertion_order() {
    let df = sample_employees().unwrap();
    let rows = df.collect_as_json_rows().unwrap();
    let ids: Vec<i64> = rows
        .iter()
        .map(|row| row["employee_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());
}

#[test]
fn hire_dates_are_valid_and_first_row_matches() {
    let df = sample_employees().unwrap();
    let rows = df.collect_as_json_rows().unwrap();
    assert_eq!(rows[0]["hire_date"].as_str(), Some("2021-03-15"));
    for row in &rows {
        let date = row["hire_date"].as_str().unwrap();
        assert!(
            chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok(),
            "hire_date '{date}' should be a valid calendar date"
        );
    }
}

#[test]
fn malformed_date_literal_fails_the_whole_build() {
    // The cast is strict: one bad literal errors out instead of nulling.
    let pl = df!["hire_date" => &["2021-03-15", "not-a-date"]].unwrap();
    let frame = DataFrame::from_polars(pl);
    let result = frame.with_column("hire_date", &cast(&col("hire_date"), "date").unwrap());
    assert!(result.is_err(), "strict cast should reject 'not-a-date'");
}

#[test]
fn select_projects_named_columns_and_flags_unknown_ones() {
    let df = sample_employees().unwrap();
    let projected = df.select(vec!["employee_id", "name"]).unwrap();
    assert_eq!(projected.columns(), vec!["employee_id", "name"]);
    assert_eq!(projected.count(), 10);

    let err = df.select(vec!["employee_iD"]).unwrap_err();
    assert!(err.to_string().contains("Available columns"));
}

#[test]
fn declared_schema_matches_column_order() {
    let df = sample_employees().unwrap();
    let declared: Vec<String> = employee_schema()
        .fields()
        .iter()
        .map(|f| f.name.clone())
        .collect();
    assert_eq!(df.columns(), declared);
}

#[test]
fn final_schema_types_are_as_declared_with_date_cast() {
    let df = sample_employees().unwrap();
    let schema = df.schema();
    let type_of = |name: &str| {
        schema
            .fields()
            .iter()
            .find(|f| f.name == name)
            .unwrap()
            .data_type
            .clone()
    };
    assert_eq!(type_of("employee_id"), DataType::Integer);
    assert_eq!(type_of("name"), DataType::String);
    assert_eq!(type_of("department"), DataType::String);
    assert_eq!(type_of("salary"), DataType::Double);
    assert_eq!(type_of("experience_years"), DataType::Integer);
    assert_eq!(type_of("hire_date"), DataType::Date);
}
