//! Log Aggregation Pipeline
//!
//! Reads newline-delimited JSON access logs and folds them into a report.
//!
//! files (in order)
//! line (in order)
//! serde_json::Value
//! DateFilter (optional)
//! ReportStrategy::accumulate
//! StatsTable
//! ReportStrategy::finalize
//! Vec<ReportRow>
//!
//! A bad line is logged and skipped. A file that cannot be opened or read
//! ends the run.

mod aggregator;
mod date_filter;
mod error;

#[cfg(test)]
mod tests;

pub use aggregator::*;
pub use date_filter::*;
pub use error::*;
