use crate::record::{LogRecord, RecordError};
use crate::report::row::{ReportRow, UserAgentRow};
use crate::report::strategy::{ReportStrategy, sort_by_total_desc};
use crate::stats::StatsTable;

/// Request count per `http_user_agent`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserAgentCount;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UserAgentStats {
    pub count: u64,
}

impl ReportStrategy for UserAgentCount {
    type Accumulator = UserAgentStats;

    fn accumulate(
        &self,
        table: &mut StatsTable<UserAgentStats>,
        record: &LogRecord<'_>,
    ) -> Result<(), RecordError> {
        table.entry_or_default(record.user_agent()).count += 1;
        Ok(())
    }

    fn finalize(&self, table: StatsTable<UserAgentStats>) -> Vec<ReportRow> {
        let mut rows: Vec<ReportRow> = table
            .into_iter()
            .map(|(user_agent, stats)| {
                ReportRow::UserAgent(UserAgentRow {
                    user_agent,
                    total: stats.count,
                })
            })
            .collect();

        sort_by_total_desc(&mut rows);
        rows
    }
}
