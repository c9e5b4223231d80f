//! Shared helpers for integration tests (session and warehouse setup).

use lakelet::Session;
use tempfile::TempDir;

/// Create a session whose warehouse lives in a fresh temp directory.
/// Returns the TempDir so the caller keeps it alive for the test's duration.
pub fn session_with_warehouse() -> (Session, TempDir) {
    let warehouse = tempfile::tempdir().unwrap();
    let session = Session::builder()
        .app_name("lakelet_tests")
        .warehouse_dir(warehouse.path())
        .get_or_create();
    (session, warehouse)
}
