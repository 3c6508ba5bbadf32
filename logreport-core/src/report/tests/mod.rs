
use crate::record::{LogRecord, RecordError};
use crate::report::ReportStrategy;
use crate::stats::StatsTable;
use serde_json::Value;

/// Feeds each JSON value through `strategy`, returning per-record results.
pub(super) fn accumulate_all<S: ReportStrategy>(
    strategy: &S,
    table: &mut StatsTable<S::Accumulator>,
    values: &[Value],
) -> Vec<Result<(), RecordError>> {
    values
        .iter()
        .map(|value| {
            let record = LogRecord::from_value(value)?;
            strategy.accumulate(table, &record)
        })
        .collect()
}
