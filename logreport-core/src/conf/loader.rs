use crate::aggregate::DateFilter;
use crate::conf::error::ConfigError;
use crate::conf::validate::{check_date, check_file_access, check_report};
use crate::conf::validation_ctx::{ValidationCtx, ValidationErrors};
use crate::report::ReportKind;
use std::path::PathBuf;

/// Validated inputs for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub files: Vec<PathBuf>,
    pub report: ReportKind,
    pub date: Option<DateFilter>,
}

/// Validates every input and reports all problems at once.
pub fn load_report_config(
    files: &[PathBuf],
    report: &str,
    date: Option<&str>,
) -> Result<ReportConfig, ValidationErrors> {
    let mut ctx = ValidationCtx::default();

    if files.is_empty() {
        ctx.push(ConfigError::NoFiles);
    }
    for path in files {
        ctx.check(check_file_access(path));
    }

    let report = check_report(report);
    let date = date.map(check_date).transpose();

    match (report, date) {
        (Ok(report), Ok(date)) => {
            ctx.into_result()?;
            Ok(ReportConfig {
                files: files.to_vec(),
                report,
                date,
            })
        }
        (report, date) => {
            ctx.check(report);
            ctx.check(date);
            Err(ctx.into_errors())
        }
    }
}
