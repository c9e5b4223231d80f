//! Sample employee dataset: declared schema and ten literal records.

use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::functions::{cast, col};
use crate::schema::{DataType, StructField, StructType};
use polars::prelude::df;

/// Declared source schema. `hire_date` is declared as text; the builder casts
/// it to a date after construction.
pub fn employee_schema() -> StructType {
    StructType::new(vec![
        StructField::new("employee_id", DataType::Integer, true),
        StructField::new("name", DataType::String, true),
        StructField::new("department", DataType::String, true),
        StructField::new("salary", DataType::Double, true),
        StructField::new("experience_years", DataType::Integer, true),
        StructField::new("hire_date", DataType::String, true),
    ])
}

/// Build the ten-row sample employee DataFrame.
///
/// `hire_date` is ingested as text and cast to a date as a separate step; a
/// malformed date literal fails the whole construction rather than nulling
/// the field.
pub fn sample_employees() -> Result<DataFrame> {
    let raw = df![
        "employee_id" => &[1i32, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        "name" => &[
            "Alice Johnson",
            "Bob Smith",
            "Carol Williams",
            "David Brown",
            "Eva Martinez",
            "Frank Wilson",
            "Grace Lee",
            "Henry Davis",
            "Ivy Chen",
            "Jack Thompson",
        ],
        "department" => &[
            "Engineering",
            "Marketing",
            "Engineering",
            "Sales",
            "Engineering",
            "Marketing",
            "Sales",
            "Engineering",
            "Marketing",
            "Sales",
        ],
        "salary" => &[
            85000.0f64, 65000.0, 95000.0, 55000.0, 78000.0,
            72000.0, 62000.0, 88000.0, 68000.0, 58000.0,
        ],
        "experience_years" => &[3i32, 2, 5, 1, 2, 4, 3, 4, 2, 1],
        "hire_date" => &[
            "2021-03-15",
            "2022-01-10",
            "2019-08-20",
            "2023-02-28",
            "2022-06-01",
            "2020-11-12",
            "2021-09-05",
            "2020-04-18",
            "2022-03-22",
            "2023-01-15",
        ],
    ]?;

    let built = DataFrame::from_polars(raw);
    let declared = employee_schema();
    if built.schema() != declared {
        return Err(Error::Schema(format!(
            "sample data does not match the declared employee schema: {:?}",
            built.schema()
        )));
    }

    built.with_column("hire_date", &cast(&col("hire_date"), "date")?)
}
