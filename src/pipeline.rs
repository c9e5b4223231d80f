//! Pipeline orchestrator.
//!
//! One linear run: acquire a session, build the sample dataset, derive the
//! experience level, best-effort persist to the warehouse, and stop the
//! session on every exit path. Persistence failures are tolerated; any other
//! failure marks the run failed, is logged, and still proceeds to teardown.

use crate::classify;
use crate::config::PipelineConfig;
use crate::dataframe::{DataFrame, SaveMode};
use crate::employees;
use crate::error::Result;
use crate::session::Session;

/// Orchestrator states. A run is `Running` until it either completes or
/// fails; teardown always brings it to the terminal `Stopped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Running,
    Failed,
    Stopped,
}

/// What one run produced.
#[derive(Debug)]
pub struct RunOutcome {
    /// Terminal state, always `Stopped` once `run` returns.
    pub state: PipelineState,
    /// Fatal failure message, if the build or transform step failed.
    pub failure: Option<String>,
    /// Row count read back from the warehouse when persistence succeeded.
    pub persisted_rows: Option<usize>,
}

impl RunOutcome {
    pub fn completed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Run the pipeline with a fresh session built from `config`.
pub fn run(config: &PipelineConfig) -> RunOutcome {
    let session = Session::builder()
        .app_name(&config.app_name)
        .warehouse_dir(&config.warehouse_dir)
        .get_or_create();
    session.set_log_level("warn");
    run_with_session(session, config)
}

/// Run the pipeline on an existing session. The session is stopped before
/// this returns, whether the run succeeded or failed.
pub fn run_with_session(session: Session, config: &PipelineConfig) -> RunOutcome {
    let mut state = PipelineState::Running;
    let mut failure = None;
    let mut persisted_rows = None;

    tracing::debug!(state = ?state, "pipeline started");
    println!("🚀 Starting {}...", session.app_name());

    match build_and_report() {
        Ok(report) => {
            persisted_rows = persist_best_effort(&session, &report, config);
            println!("\n✅ Pipeline completed successfully!");
        }
        Err(e) => {
            state = PipelineState::Failed;
            tracing::error!(error = %e, state = ?state, "pipeline failed");
            println!("❌ Error: {e}");
            failure = Some(e.to_string());
        }
    }

    // Teardown runs on every path, success or failure.
    session.stop();
    println!("🛑 Session stopped");
    state = PipelineState::Stopped;

    RunOutcome {
        state,
        failure,
        persisted_rows,
    }
}

/// Build the sample dataset, derive the experience level, and print the
/// report. Failures here are fatal to the run.
fn build_and_report() -> Result<DataFrame> {
    let df = employees::sample_employees()?;
    let leveled = classify::with_experience_level(&df)?;

    println!("{}", "=".repeat(50));
    println!("EMPLOYEE EXPERIENCE REPORT");
    println!("{}", "=".repeat(50));
    println!("\nEmployees by experience level:");
    leveled.show(Some(10))?;

    Ok(leveled)
}

/// Persist the table and read it back, reporting the round-trip row count.
/// Any failure is logged and swallowed; this step is best-effort.
fn persist_best_effort(
    session: &Session,
    df: &DataFrame,
    config: &PipelineConfig,
) -> Option<usize> {
    println!("\nSaving to warehouse table:");
    match persist(session, df, config) {
        Ok(rows) => {
            println!(
                "✅ Data successfully saved to table: {}",
                config.qualified_table()
            );
            println!("Records in table: {rows}");
            Some(rows)
        }
        Err(e) => {
            tracing::warn!(error = %e, table = %config.qualified_table(), "persistence failed");
            println!("❌ Error saving table: {e}");
            println!("Note: this is expected when the warehouse is not writable");
            None
        }
    }
}

fn persist(session: &Session, df: &DataFrame, config: &PipelineConfig) -> Result<usize> {
    session.create_database_if_not_exists(&config.namespace)?;
    df.write()
        .mode(SaveMode::Overwrite)
        .save_as_table(session, &config.qualified_table())?;
    let read_back = session.table(&config.qualified_table())?;
    Ok(read_back.count())
}
