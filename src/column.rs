//! Column: a named wrapper around a Polars expression.

use polars::prelude::{col, Expr};

/// Represents a column in a DataFrame, used for building expressions.
/// Thin wrapper around a Polars `Expr`.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    expr: Expr,
}

impl Column {
    /// Create a new Column from a column name.
    pub fn new(name: String) -> Self {
        Column {
            name: name.clone(),
            expr: col(name.as_str()),
        }
    }

    /// Create a Column from a Polars Expr.
    pub fn from_expr(expr: Expr, name: Option<String>) -> Self {
        let display_name = name.unwrap_or_else(|| "<expr>".to_string());
        Column {
            name: display_name,
            expr,
        }
    }

    /// Get the underlying Polars Expr.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Convert to Polars Expr (consumes self).
    pub fn into_expr(self) -> Expr {
        self.expr
    }

    /// Get the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Less-than-or-equal comparison.
    pub fn lt_eq(&self, other: &Column) -> Column {
        Column {
            name: format!("({} <= {})", self.name, other.name),
            expr: self.expr.clone().lt_eq(other.expr().clone()),
        }
    }
}
