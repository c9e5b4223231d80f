//! Entry point: run the sample pipeline with environment-derived settings.
//!
//! Anticipated failures are caught inside the pipeline and reported on the
//! console, so the process exit code stays zero for them.

use lakelet::config::PipelineConfig;
use lakelet::pipeline;

fn main() {
    let config = PipelineConfig::from_env();
    let _outcome = pipeline::run(&config);
}
