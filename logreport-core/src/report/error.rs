use crate::report::kind::ReportKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report '{report}' is not implemented yet")]
    NotImplemented { report: ReportKind },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown report '{name}' (available: {available})")]
pub struct UnknownReport {
    pub name: String,
    pub available: String,
}
