//! DataFrame: main tabular type, plus the writer builder for catalog tables.

use crate::column::Column;
use crate::date_utils::days_to_iso_date;
use crate::error::Result;
use crate::schema::StructType;
use polars::prelude::{AnyValue, DataFrame as PlDataFrame, IntoLazy, PolarsError};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;

/// DataFrame - main tabular data structure.
/// Thin wrapper around an eager Polars `DataFrame`.
#[derive(Debug)]
pub struct DataFrame {
    pub(crate) df: Arc<PlDataFrame>,
}

impl DataFrame {
    /// Create a new DataFrame from a Polars DataFrame.
    pub fn from_polars(df: PlDataFrame) -> Self {
        DataFrame { df: Arc::new(df) }
    }

    /// Create an empty DataFrame.
    pub fn empty() -> Self {
        DataFrame {
            df: Arc::new(PlDataFrame::empty()),
        }
    }

    /// Resolve a column name, with the available columns in the error message.
    pub fn resolve_column_name(&self, name: &str) -> Result<String> {
        let names = self.df.get_column_names();
        if names.iter().any(|n| n.as_str() == name) {
            return Ok(name.to_string());
        }
        let available: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        Err(PolarsError::ColumnNotFound(
            format!(
                "Column '{}' not found. Available columns: [{}]",
                name,
                available.join(", ")
            )
            .into(),
        )
        .into())
    }

    /// Get the schema of the DataFrame.
    pub fn schema(&self) -> StructType {
        StructType::from_polars_schema(&self.df.schema())
    }

    /// Get column names.
    pub fn columns(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Count the number of rows.
    pub fn count(&self) -> usize {
        self.df.height()
    }

    /// Print the first `n` rows (default 20) as an unabridged grid.
    pub fn show(&self, n: Option<usize>) -> Result<()> {
        let n = n.unwrap_or(20);
        println!("{}", self.to_show_string(n)?);
        Ok(())
    }

    /// Render the first `n` rows as a Spark-style grid. Every column and every
    /// cell is printed in full; nothing is elided or truncated.
    pub fn to_show_string(&self, n: usize) -> Result<String> {
        let head = self.df.head(Some(n));
        let names: Vec<String> = head.get_column_names().iter().map(|s| s.to_string()).collect();
        let ncols = names.len();
        let mut cells: Vec<Vec<String>> = Vec::with_capacity(head.height());
        for i in 0..head.height() {
            let mut row = Vec::with_capacity(ncols);
            for col in head.get_columns() {
                row.push(any_value_to_cell(col.get(i)?));
            }
            cells.push(row);
        }

        let mut widths: Vec<usize> = names.iter().map(|s| s.chars().count()).collect();
        for row in &cells {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let rule: String = {
            let mut s = String::from("+");
            for w in &widths {
                s.push_str(&"-".repeat(*w));
                s.push('+');
            }
            s
        };
        let format_row = |row: &[String]| {
            let mut s = String::from("|");
            for (w, cell) in widths.iter().zip(row) {
                let pad = w - cell.chars().count();
                s.push_str(&" ".repeat(pad));
                s.push_str(cell);
                s.push('|');
            }
            s
        };

        let mut out = String::new();
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format_row(&names));
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        for row in &cells {
            out.push_str(&format_row(row));
            out.push('\n');
        }
        out.push_str(&rule);
        Ok(out)
    }

    /// Collect the materialized Polars DataFrame.
    pub fn collect(&self) -> Arc<PlDataFrame> {
        self.df.clone()
    }

    /// Collect as rows of column-name -> JSON value. Dates render as ISO strings.
    pub fn collect_as_json_rows(&self) -> Result<Vec<HashMap<String, JsonValue>>> {
        let df = self.df.as_ref();
        let names = df.get_column_names();
        let nrows = df.height();
        let mut rows = Vec::with_capacity(nrows);
        for i in 0..nrows {
            let mut row = HashMap::with_capacity(names.len());
            for (name, col) in names.iter().zip(df.get_columns()) {
                row.insert(name.to_string(), any_value_to_json(col.get(i)?));
            }
            rows.push(row);
        }
        Ok(rows)
    }

    /// Select columns (returns a new DataFrame).
    pub fn select(&self, cols: Vec<&str>) -> Result<DataFrame> {
        let resolved: Vec<String> = cols
            .iter()
            .map(|c| self.resolve_column_name(c))
            .collect::<Result<Vec<_>>>()?;
        let selected = self.df.select(resolved)?;
        Ok(DataFrame::from_polars(selected))
    }

    /// Add or replace a column. Existing columns are untouched.
    pub fn with_column(&self, column_name: &str, col: &Column) -> Result<DataFrame> {
        let lf = self.df.as_ref().clone().lazy();
        let out = lf
            .with_column(col.expr().clone().alias(column_name))
            .collect()?;
        Ok(DataFrame::from_polars(out))
    }

    /// Return a writer for saving this DataFrame as a catalog table.
    pub fn write(&self) -> DataFrameWriter<'_> {
        DataFrameWriter {
            df: self,
            mode: SaveMode::Overwrite,
        }
    }
}

impl Clone for DataFrame {
    fn clone(&self) -> Self {
        DataFrame {
            df: self.df.clone(),
        }
    }
}

/// Save mode for catalog table writes.
///
/// `Overwrite` replaces the table's entire prior contents; `ErrorIfExists`
/// refuses to write when the table already exists. There is no append.
#[derive(Clone, Copy, Debug)]
pub enum SaveMode {
    Overwrite,
    ErrorIfExists,
}

/// Builder for writing a DataFrame to a catalog table.
pub struct DataFrameWriter<'a> {
    df: &'a DataFrame,
    mode: SaveMode,
}

impl<'a> DataFrameWriter<'a> {
    pub fn mode(mut self, mode: SaveMode) -> Self {
        self.mode = mode;
        self
    }

    /// Write to the named table (`namespace.table`) in the session's catalog.
    pub fn save_as_table(&self, session: &crate::session::Session, name: &str) -> Result<()> {
        let ident: crate::catalog::TableIdent = name.parse()?;
        session.catalog().write_table(&ident, self.df, self.mode)
    }
}

fn any_value_to_cell(av: AnyValue<'_>) -> String {
    match av {
        AnyValue::Null => "null".to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        AnyValue::Int32(i) => i.to_string(),
        AnyValue::Int64(i) => i.to_string(),
        AnyValue::Float32(f) => format!("{:?}", f),
        AnyValue::Float64(f) => format!("{:?}", f),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Date(days) => days_to_iso_date(days),
        other => format!("{}", other),
    }
}

/// Convert a Polars AnyValue to serde_json::Value. Dates become ISO strings.
fn any_value_to_json(av: AnyValue<'_>) -> JsonValue {
    match av {
        AnyValue::Null => JsonValue::Null,
        AnyValue::Boolean(b) => JsonValue::Bool(b),
        AnyValue::Int32(i) => JsonValue::Number(serde_json::Number::from(i)),
        AnyValue::Int64(i) => JsonValue::Number(serde_json::Number::from(i)),
        AnyValue::UInt32(u) => JsonValue::Number(serde_json::Number::from(u)),
        AnyValue::UInt64(u) => JsonValue::Number(serde_json::Number::from(u)),
        AnyValue::Float32(f) => serde_json::Number::from_f64(f64::from(f))
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        AnyValue::Float64(f) => serde_json::Number::from_f64(f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        AnyValue::String(s) => JsonValue::String(s.to_string()),
        AnyValue::StringOwned(s) => JsonValue::String(s.to_string()),
        AnyValue::Date(days) => JsonValue::String(days_to_iso_date(days)),
        _ => JsonValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    #[test]
    fn show_string_renders_full_cell_values() {
        let pl = df![
            "id" => &[1i32, 2i32],
            "name" => &["Alexandria Worthington-Smythe", "Bo"],
        ]
        .unwrap();
        let frame = DataFrame::from_polars(pl);
        let rendered = frame.to_show_string(10).unwrap();
        assert!(rendered.contains("Alexandria Worthington-Smythe"));
        assert!(rendered.contains("|id|"));
        assert!(rendered.starts_with('+'));
    }

    #[test]
    fn show_string_limits_row_count_only() {
        let pl = df!["v" => &[1i32, 2, 3, 4, 5]].unwrap();
        let frame = DataFrame::from_polars(pl);
        let rendered = frame.to_show_string(2).unwrap();
        // header + 2 data rows between the rules
        assert_eq!(rendered.lines().filter(|l| l.starts_with('|')).count(), 3);
    }

    #[test]
    fn dataframe_is_debug_formattable() {
        // Result combinators like unwrap_err need the Ok type to be Debug.
        let frame = DataFrame::from_polars(df!["v" => &[1i32]].unwrap());
        assert!(!format!("{frame:?}").is_empty());
    }

    #[test]
    fn float_cells_keep_decimal_point() {
        assert_eq!(any_value_to_cell(AnyValue::Float64(85000.0)), "85000.0");
    }
}
