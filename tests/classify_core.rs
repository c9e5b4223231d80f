//! Experience-level cascade over the sample dataset, and the ordered
//! first-match boundaries over a synthetic frame.

use lakelet::classify::{with_experience_level, EXPERIENCE_LEVEL};
use lakelet::employees::sample_employees;
use lakelet::DataFrame;
use polars::prelude::df;

#[test]
fn derived_column_is_added_without_touching_originals() {
    let base = sample_employees().unwrap();
    let leveled = with_experience_level(&base).unwrap();
    assert_eq!(leveled.columns().len(), 7);
    assert_eq!(leveled.columns()[..6], base.columns()[..]);
    assert_eq!(leveled.columns()[6], EXPERIENCE_LEVEL);
    assert_eq!(leveled.count(), 10);
}

#[test]
fn sample_rows_classify_per_cascade() {
    let leveled = with_experience_level(&sample_employees().unwrap()).unwrap();
    let rows = leveled.collect_as_json_rows().unwrap();
    let level_of = |id: i64| {
        rows.iter()
            .find(|row| row["employee_id"].as_i64() == Some(id))
            .unwrap()[EXPERIENCE_LEVEL]
            .as_str()
            .unwrap()
            .to_string()
    };
    // employee 4 has 1 year, employee 2 has 2, employee 3 has 5.
    assert_eq!(level_of(4), "Junior");
    assert_eq!(level_of(2), "Mid-level");
    assert_eq!(level_of(3), "Senior");
}

#[test]
fn every_sample_row_maps_from_its_years() {
    let leveled = with_experience_level(&sample_employees().unwrap()).unwrap();
    for row in leveled.collect_as_json_rows().unwrap() {
        let years = row["experience_years"].as_i64().unwrap();
        let expected = if years <= 1 {
            "Junior"
        } else if years <= 3 {
            "Mid-level"
        } else {
            "Senior"
        };
        assert_eq!(row[EXPERIENCE_LEVEL].as_str(), Some(expected));
    }
}

#[test]
fn three_years_is_mid_level_not_senior() {
    let pl = df!["experience_years" => &[3i32]].unwrap();
    let out = with_experience_level(&DataFrame::from_polars(pl)).unwrap();
    let rows = out.collect_as_json_rows().unwrap();
    assert_eq!(rows[0][EXPERIENCE_LEVEL].as_str(), Some("Mid-level"));
}

#[test]
fn one_year_is_junior_not_mid_level() {
    let pl = df!["experience_years" => &[1i32]].unwrap();
    let out = with_experience_level(&DataFrame::from_polars(pl)).unwrap();
    let rows = out.collect_as_json_rows().unwrap();
    assert_eq!(rows[0][EXPERIENCE_LEVEL].as_str(), Some("Junior"));
}
