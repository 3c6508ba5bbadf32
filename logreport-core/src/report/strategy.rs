use crate::record::{LogRecord, RecordError};
use crate::report::row::ReportRow;
use crate::stats::StatsTable;

pub trait ReportStrategy {
    /// Fixed-shape per-key state.
    type Accumulator: Default;

    fn accumulate(
        &self,
        table: &mut StatsTable<Self::Accumulator>,
        record: &LogRecord<'_>,
    ) -> Result<(), RecordError>;

    fn finalize(&self, table: StatsTable<Self::Accumulator>) -> Vec<ReportRow>;
}

/// Descending by total. `sort_by` is stable, so equal totals keep table order.
pub(crate) fn sort_by_total_desc(rows: &mut [ReportRow]) {
    rows.sort_by(|a, b| b.total().cmp(&a.total()));
}
