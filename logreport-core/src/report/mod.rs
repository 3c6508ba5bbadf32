//! Report strategies.
//!
//! A strategy owns two steps: `accumulate` folds one record into the
//! run's [`StatsTable`](crate::stats::StatsTable), and `finalize` turns the
//! table into display rows sorted by `total` (descending, stable on ties).
//! Adding a report type means adding a strategy; the aggregator and the
//! renderers only see [`ReportRow`]s.

mod average;
mod error;
mod kind;
mod row;
mod strategy;
mod user_agent;

#[cfg(test)]
mod tests;

pub use average::*;
pub use error::*;
pub use kind::*;
pub use row::*;
pub use strategy::*;
pub use user_agent::*;
