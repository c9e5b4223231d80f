//! Expression-building functions: `col`, typed literals, `cast`, and the
//! `when(..).then(..).otherwise(..)` conditional builder.

use crate::column::Column;
use crate::error::{Error, Result};
use polars::prelude::{lit, DataType, Expr};

/// Get a column by name.
pub fn col(name: &str) -> Column {
    Column::new(name.to_string())
}

/// Create a literal column from an i32 value.
pub fn lit_i32(value: i32) -> Column {
    let expr: Expr = lit(value);
    Column::from_expr(expr, None)
}

pub fn lit_i64(value: i64) -> Column {
    let expr: Expr = lit(value);
    Column::from_expr(expr, None)
}

pub fn lit_f64(value: f64) -> Column {
    let expr: Expr = lit(value);
    Column::from_expr(expr, None)
}

pub fn lit_str(value: &str) -> Column {
    let expr: Expr = lit(value);
    Column::from_expr(expr, None)
}

/// Cast a column to the named type. The cast is strict: a value that cannot
/// be converted fails evaluation instead of becoming null, so a malformed
/// date literal fails the whole build.
pub fn cast(column: &Column, type_name: &str) -> Result<Column> {
    let dtype = parse_type_name(type_name)?;
    Ok(Column::from_expr(
        column.expr().clone().strict_cast(dtype),
        Some(column.name().to_string()),
    ))
}

fn parse_type_name(type_name: &str) -> Result<DataType> {
    match type_name.to_ascii_lowercase().as_str() {
        "string" => Ok(DataType::String),
        "int" | "integer" => Ok(DataType::Int32),
        "bigint" | "long" => Ok(DataType::Int64),
        "double" | "float64" => Ok(DataType::Float64),
        "boolean" | "bool" => Ok(DataType::Boolean),
        "date" => Ok(DataType::Date),
        other => Err(Error::Schema(format!("unsupported cast type '{other}'"))),
    }
}

/// Conditional expression builder.
///
/// Branches are evaluated in order; the first matching condition wins.
///
/// # Example
/// ```
/// use lakelet::{col, lit_i32, lit_str, when};
///
/// let level = when(&col("years").lt_eq(&lit_i32(1)))
///     .then(&lit_str("Junior"))
///     .when(&col("years").lt_eq(&lit_i32(3)))
///     .then(&lit_str("Mid-level"))
///     .otherwise(&lit_str("Senior"));
/// ```
pub fn when(condition: &Column) -> WhenBuilder {
    WhenBuilder {
        condition: condition.expr().clone(),
    }
}

/// First stage of the builder: holds the initial condition.
pub struct WhenBuilder {
    condition: Expr,
}

impl WhenBuilder {
    /// Specify the value when the condition is true.
    pub fn then(self, value: &Column) -> ThenBuilder {
        ThenBuilder {
            inner: polars::lazy::dsl::when(self.condition).then(value.expr().clone()),
        }
    }
}

/// A when/then pair awaiting either another branch or the fallback.
pub struct ThenBuilder {
    inner: polars::lazy::dsl::Then,
}

impl ThenBuilder {
    /// Chain an additional condition; its branch only applies when no earlier
    /// condition matched.
    pub fn when(self, condition: &Column) -> ChainedWhenBuilder {
        ChainedWhenBuilder {
            inner: self.inner.when(condition.expr().clone()),
        }
    }

    /// Finalize the expression with the fallback value.
    pub fn otherwise(self, value: &Column) -> Column {
        Column::from_expr(self.inner.otherwise(value.expr().clone()), None)
    }
}

/// A chained condition awaiting its branch value.
pub struct ChainedWhenBuilder {
    inner: polars::lazy::dsl::ChainedWhen,
}

impl ChainedWhenBuilder {
    pub fn then(self, value: &Column) -> ChainedThenBuilder {
        ChainedThenBuilder {
            inner: self.inner.then(value.expr().clone()),
        }
    }
}

/// Two or more when/then pairs awaiting either another branch or the fallback.
pub struct ChainedThenBuilder {
    inner: polars::lazy::dsl::ChainedThen,
}

impl ChainedThenBuilder {
    pub fn when(self, condition: &Column) -> ChainedWhenBuilder {
        ChainedWhenBuilder {
            inner: self.inner.when(condition.expr().clone()),
        }
    }

    pub fn otherwise(self, value: &Column) -> Column {
        Column::from_expr(self.inner.otherwise(value.expr().clone()), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_type_name_accepts_known_types() {
        assert!(matches!(parse_type_name("date"), Ok(DataType::Date)));
        assert!(matches!(parse_type_name("Int"), Ok(DataType::Int32)));
        assert!(matches!(parse_type_name("bigint"), Ok(DataType::Int64)));
    }

    #[test]
    fn parse_type_name_rejects_unknown_types() {
        assert!(parse_type_name("decimal128").is_err());
    }
}
