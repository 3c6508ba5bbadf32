use crate::record::{LogRecord, RecordError};
use crate::report::row::{AverageRow, ReportRow};
use crate::report::strategy::{ReportStrategy, sort_by_total_desc};
use crate::stats::StatsTable;

/// Request count and mean response time per `url`.
#[derive(Debug, Default, Clone, Copy)]
pub struct AverageResponseTime;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct AverageStats {
    pub count: u64,
    pub sum_response_time: f64,
}

impl ReportStrategy for AverageResponseTime {
    type Accumulator = AverageStats;

    fn accumulate(
        &self,
        table: &mut StatsTable<AverageStats>,
        record: &LogRecord<'_>,
    ) -> Result<(), RecordError> {
        // Read before touching the table so a bad line leaves no trace.
        let response_time = record.response_time()?;

        let stats = table.entry_or_default(record.url());
        stats.count += 1;
        stats.sum_response_time += response_time;
        Ok(())
    }

    fn finalize(&self, table: StatsTable<AverageStats>) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = table
            .into_iter()
            .map(|(handler, stats)| {
                ReportRow::Average(AverageRow {
                    handler,
                    total: stats.count,
                    avg_response_time: round3(stats.mean()),
                })
            })
            .collect();

        sort_by_total_desc(&mut rows);
        rows
    }
}

impl AverageStats {
    pub fn mean(&self) -> f64 {
        if self.count > 0 {
            self.sum_response_time / self.count as f64
        } else {
            0.0
        }
    }
}

/// Half away from zero.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
