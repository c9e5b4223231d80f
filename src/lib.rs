//! Lakelet - an employee-data pipeline on a Spark-style DataFrame layer.
//!
//! Builds a fixed sample dataset, derives an experience-level column, and
//! persists it to a local warehouse catalog (Parquet data files plus a
//! versioned JSON manifest), with Polars as the execution backend.

pub mod catalog;
pub mod classify;
pub mod column;
pub mod config;
pub mod dataframe;
mod date_utils;
pub mod employees;
pub mod error;
pub mod functions;
pub mod pipeline;
pub mod schema;
pub mod session;

pub use catalog::{Catalog, TableIdent, TableManifest};
pub use column::Column;
pub use config::PipelineConfig;
pub use dataframe::{DataFrame, DataFrameWriter, SaveMode};
pub use error::{Error, Result};
pub use functions::{cast, col, lit_f64, lit_i32, lit_i64, lit_str, when};
pub use pipeline::{PipelineState, RunOutcome};
pub use schema::{DataType, StructField, StructType};
pub use session::{Session, SessionBuilder};
