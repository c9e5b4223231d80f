//! Pipeline configuration: defaults plus environment overrides.

/// Settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub app_name: String,
    pub warehouse_dir: String,
    pub namespace: String,
    pub table: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            app_name: "lakelet-sample".to_string(),
            warehouse_dir: "./warehouse".to_string(),
            namespace: "sample_db".to_string(),
            table: "employees".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Defaults, with `LAKELET_WAREHOUSE` overriding the warehouse directory.
    pub fn from_env() -> Self {
        let mut config = PipelineConfig::default();
        if let Ok(dir) = std::env::var("LAKELET_WAREHOUSE") {
            if !dir.is_empty() {
                config.warehouse_dir = dir;
            }
        }
        config
    }

    /// Qualified `namespace.table` target for persistence.
    pub fn qualified_table(&self) -> String {
        format!("{}.{}", self.namespace, self.table)
    }
}
