pub mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_path, write_log};
pub use tracing::{SkipWarning, init_test_tracing, skip_warnings_under};
