mod error;
mod hint;
mod loader;
mod validate;
mod validation_ctx;


pub use error::ConfigError;
pub use hint::config_error_hint;
pub use loader::{ReportConfig, load_report_config};
pub use validate::{check_date, check_file_access, check_report};
pub use validation_ctx::{ValidationCtx, ValidationErrors};
