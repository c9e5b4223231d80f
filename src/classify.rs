//! Experience-level classification.
//!
//! The cascade is first-match-wins with inclusive lower bounds:
//! `experience_years <= 1` is Junior, else `<= 3` is Mid-level, else Senior.
//! Negative values are accepted and fall into Junior; the source data carries
//! no validation and none is added here.

use crate::column::Column;
use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::functions::{col, lit_i32, lit_str, when};

/// Name of the derived column.
pub const EXPERIENCE_LEVEL: &str = "experience_level";

/// Upper bound (inclusive) of the Junior band.
pub const JUNIOR_MAX_YEARS: i32 = 1;
/// Upper bound (inclusive) of the Mid-level band.
pub const MID_LEVEL_MAX_YEARS: i32 = 3;

/// The cascade as a column expression over `experience_years`.
pub fn experience_level_expr() -> Column {
    when(&col("experience_years").lt_eq(&lit_i32(JUNIOR_MAX_YEARS)))
        .then(&lit_str("Junior"))
        .when(&col("experience_years").lt_eq(&lit_i32(MID_LEVEL_MAX_YEARS)))
        .then(&lit_str("Mid-level"))
        .otherwise(&lit_str("Senior"))
}

/// Return a new DataFrame with the derived `experience_level` column added.
/// All original columns are unchanged.
pub fn with_experience_level(df: &DataFrame) -> Result<DataFrame> {
    df.with_column(EXPERIENCE_LEVEL, &experience_level_expr())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    fn levels_for(years: &[i32]) -> Vec<String> {
        let pl = df!["experience_years" => years].unwrap();
        let out = with_experience_level(&DataFrame::from_polars(pl)).unwrap();
        out.collect_as_json_rows()
            .unwrap()
            .into_iter()
            .map(|row| row[EXPERIENCE_LEVEL].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn junior_band_is_inclusive_at_one() {
        assert_eq!(levels_for(&[0, 1]), ["Junior", "Junior"]);
    }

    #[test]
    fn mid_level_band_is_inclusive_at_three() {
        assert_eq!(levels_for(&[2, 3]), ["Mid-level", "Mid-level"]);
    }

    #[test]
    fn senior_starts_at_four() {
        assert_eq!(levels_for(&[4, 40]), ["Senior", "Senior"]);
    }

    #[test]
    fn negative_years_classify_as_junior() {
        assert_eq!(levels_for(&[-2]), ["Junior"]);
    }
}
