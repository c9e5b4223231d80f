//! Warehouse catalog: namespaces and versioned tables on the local filesystem.
//!
//! Layout: `<warehouse>/<namespace>/<table>/` holds one or more Parquet data
//! files plus `manifest.json` describing the current table version. A write
//! commits by atomically renaming a fresh manifest over the old one, then
//! removing data files the new manifest no longer references; readers only
//! ever see the file set named by a complete manifest.

use crate::dataframe::{DataFrame, SaveMode};
use crate::error::{Error, Result};
use crate::schema::StructField;
use polars::prelude::{DataFrame as PlDataFrame, ParquetReader, ParquetWriter, SerReader};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const MANIFEST_FILE: &str = "manifest.json";

/// Two-part table name: `namespace.table`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableIdent {
    pub namespace: String,
    pub table: String,
}

impl TableIdent {
    pub fn new(namespace: impl Into<String>, table: impl Into<String>) -> Result<Self> {
        let namespace = namespace.into();
        let table = table.into();
        validate_ident(&namespace)?;
        validate_ident(&table)?;
        Ok(TableIdent { namespace, table })
    }

    /// Render as `namespace.table`.
    pub fn qualified(&self) -> String {
        format!("{}.{}", self.namespace, self.table)
    }
}

impl FromStr for TableIdent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split('.').collect::<Vec<_>>().as_slice() {
            [ns, tbl] => TableIdent::new(*ns, *tbl),
            _ => Err(Error::Catalog(format!(
                "table name '{s}' must be qualified as namespace.table"
            ))),
        }
    }
}

fn validate_ident(ident: &str) -> Result<()> {
    let mut chars = ident.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Error::Catalog(format!("invalid identifier '{ident}'")))
    }
}

/// Per-table commit metadata. One manifest describes one table version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableManifest {
    pub namespace: String,
    pub name: String,
    pub version: u64,
    pub written_at: String,
    pub fields: Vec<StructField>,
    pub num_rows: usize,
    pub data_files: Vec<String>,
}

/// Filesystem-backed catalog rooted at a warehouse directory.
pub struct Catalog {
    root: PathBuf,
}

impl Catalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Catalog { root: root.into() }
    }

    pub fn warehouse_root(&self) -> &Path {
        &self.root
    }

    /// Create a namespace if it does not already exist. A pre-existing
    /// namespace is not an error.
    pub fn create_namespace(&self, name: &str) -> Result<()> {
        validate_ident(name)?;
        fs::create_dir_all(self.root.join(name))?;
        Ok(())
    }

    pub fn namespace_exists(&self, name: &str) -> bool {
        self.root.join(name).is_dir()
    }

    pub fn table_exists(&self, ident: &TableIdent) -> bool {
        self.table_dir(ident).join(MANIFEST_FILE).is_file()
    }

    /// Write a table. `SaveMode::Overwrite` replaces any prior contents and
    /// bumps the table version; `SaveMode::ErrorIfExists` refuses to touch an
    /// existing table. The namespace must already exist.
    pub fn write_table(&self, ident: &TableIdent, df: &DataFrame, mode: SaveMode) -> Result<()> {
        if !self.namespace_exists(&ident.namespace) {
            return Err(Error::NotFound(format!(
                "namespace '{}' does not exist",
                ident.namespace
            )));
        }
        let prev = if self.table_exists(ident) {
            if matches!(mode, SaveMode::ErrorIfExists) {
                return Err(Error::Catalog(format!(
                    "table '{}' already exists",
                    ident.qualified()
                )));
            }
            Some(self.load_manifest(ident)?)
        } else {
            None
        };
        let version = prev.as_ref().map(|m| m.version + 1).unwrap_or(1);

        let table_dir = self.table_dir(ident);
        fs::create_dir_all(&table_dir)?;

        let data_file = format!("part-00000-v{version:05}.parquet");
        let mut file = fs::File::create(table_dir.join(&data_file))?;
        let mut pl: PlDataFrame = df.df.as_ref().clone();
        ParquetWriter::new(&mut file).finish(&mut pl)?;

        let manifest = TableManifest {
            namespace: ident.namespace.clone(),
            name: ident.table.clone(),
            version,
            written_at: chrono::Utc::now().to_rfc3339(),
            fields: df.schema().fields().to_vec(),
            num_rows: df.count(),
            data_files: vec![data_file],
        };
        self.commit_manifest(&table_dir, &manifest)?;
        // The new version is durable once the manifest is in place; stale data
        // files are unreferenced garbage, so cleanup trouble must not fail the
        // write.
        if let Err(e) = self.remove_stale_data_files(&table_dir, &manifest) {
            tracing::warn!(
                table = %ident.qualified(),
                error = %e,
                "failed to remove stale data files after commit"
            );
        }
        tracing::debug!(
            table = %ident.qualified(),
            version = manifest.version,
            rows = manifest.num_rows,
            "committed table version"
        );
        Ok(())
    }

    /// Read the current version of a table.
    pub fn read_table(&self, ident: &TableIdent) -> Result<DataFrame> {
        let manifest = self.load_manifest(ident)?;
        let table_dir = self.table_dir(ident);
        let mut combined: Option<PlDataFrame> = None;
        for data_file in &manifest.data_files {
            let file = fs::File::open(table_dir.join(data_file))?;
            let part = ParquetReader::new(file).finish()?;
            combined = Some(match combined {
                Some(acc) => acc.vstack(&part)?,
                None => part,
            });
        }
        match combined {
            Some(pl) => Ok(DataFrame::from_polars(pl)),
            None => Ok(DataFrame::empty()),
        }
    }

    /// Current commit metadata for a table.
    pub fn table_metadata(&self, ident: &TableIdent) -> Result<TableManifest> {
        self.load_manifest(ident)
    }

    fn table_dir(&self, ident: &TableIdent) -> PathBuf {
        self.root.join(&ident.namespace).join(&ident.table)
    }

    fn load_manifest(&self, ident: &TableIdent) -> Result<TableManifest> {
        let path = self.table_dir(ident).join(MANIFEST_FILE);
        let raw = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::NotFound(format!("table '{}' does not exist", ident.qualified()))
            } else {
                Error::Io(e.to_string())
            }
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn commit_manifest(&self, table_dir: &Path, manifest: &TableManifest) -> Result<()> {
        let tmp = table_dir.join(format!("{MANIFEST_FILE}.tmp"));
        fs::write(&tmp, serde_json::to_string_pretty(manifest)?)?;
        fs::rename(&tmp, table_dir.join(MANIFEST_FILE))?;
        Ok(())
    }

    fn remove_stale_data_files(&self, table_dir: &Path, manifest: &TableManifest) -> Result<()> {
        for entry in fs::read_dir(table_dir)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().to_string();
            if file_name.ends_with(".parquet") && !manifest.data_files.contains(&file_name) {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ident_parses_two_part_names() {
        let ident: TableIdent = "sample_db.employees".parse().unwrap();
        assert_eq!(ident.namespace, "sample_db");
        assert_eq!(ident.table, "employees");
        assert_eq!(ident.qualified(), "sample_db.employees");
    }

    #[test]
    fn table_ident_rejects_malformed_names() {
        assert!("employees".parse::<TableIdent>().is_err());
        assert!("a.b.c".parse::<TableIdent>().is_err());
        assert!("1db.tbl".parse::<TableIdent>().is_err());
        assert!("db.ta-ble".parse::<TableIdent>().is_err());
        assert!("db.".parse::<TableIdent>().is_err());
    }
}
