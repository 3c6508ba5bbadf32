use crate::aggregate::date_filter::DateFilter;
use crate::aggregate::error::{AggregateError, LineError};
use crate::record::LogRecord;
use crate::report::{
    AverageResponseTime, ReportError, ReportKind, ReportRow, ReportStrategy, UserAgentCount,
};
use crate::stats::StatsTable;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Drives read → parse → filter → accumulate over every input file, then
/// finalizes once. One [`StatsTable`] spans the whole run.
#[derive(Debug, Clone, Default)]
pub struct LogAggregator {
    files: Vec<PathBuf>,
    date_filter: Option<DateFilter>,
}

#[derive(Debug, Default)]
pub struct AggregateOutcome {
    pub rows: Vec<ReportRow>,
    /// In processing order: path order, then line order.
    pub skipped: Vec<SkippedLine>,
    pub accepted: u64,
    pub filtered_out: u64,
}

#[derive(Debug)]
pub struct SkippedLine {
    pub path: PathBuf,
    /// 1-based.
    pub line: usize,
    pub raw: String,
    pub error: LineError,
}

enum LineOutcome {
    Accepted,
    FilteredOut,
}

impl LogAggregator {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            date_filter: None,
        }
    }

    pub fn with_date_filter(mut self, date_filter: Option<DateFilter>) -> Self {
        self.date_filter = date_filter;
        self
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn date_filter(&self) -> Option<DateFilter> {
        self.date_filter
    }

    /// Selects the strategy for `kind` once, up front. Unimplemented reports
    /// fail here, before any file is opened.
    pub fn run_report(&self, kind: ReportKind) -> Result<AggregateOutcome, AggregateError> {
        match kind {
            ReportKind::Average => self.run(&AverageResponseTime),
            ReportKind::UserAgent => self.run(&UserAgentCount),
            ReportKind::Max => Err(ReportError::NotImplemented { report: kind }.into()),
        }
    }

    pub fn run<S: ReportStrategy>(&self, strategy: &S) -> Result<AggregateOutcome, AggregateError> {
        let mut table = StatsTable::new();
        let mut outcome = AggregateOutcome::default();

        for path in &self.files {
            self.process_file(path, strategy, &mut table, &mut outcome)?;
        }

        outcome.rows = strategy.finalize(table);

        tracing::info!(
            accepted = outcome.accepted,
            filtered_out = outcome.filtered_out,
            skipped = outcome.skipped.len(),
            rows = outcome.rows.len(),
            "report finalized"
        );

        Ok(outcome)
    }

    fn process_file<S: ReportStrategy>(
        &self,
        path: &Path,
        strategy: &S,
        table: &mut StatsTable<S::Accumulator>,
        outcome: &mut AggregateOutcome,
    ) -> Result<(), AggregateError> {
        let file = File::open(path).map_err(|e| AggregateError::open(path, e))?;
        tracing::info!(file = %path.display(), "processing log file");

        // The reader owns the handle; it is closed on every return path.
        let reader = BufReader::new(file);

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| AggregateError::read(path, e))?;

            match self.process_line(&line, strategy, table) {
                Ok(LineOutcome::Accepted) => outcome.accepted += 1,
                Ok(LineOutcome::FilteredOut) => outcome.filtered_out += 1,
                Err(error) => {
                    let raw = line.trim_end().to_string();
                    tracing::warn!(
                        file = %path.display(),
                        line = idx + 1,
                        raw = %raw,
                        error = %error,
                        "skipping log line"
                    );
                    outcome.skipped.push(SkippedLine {
                        path: path.to_path_buf(),
                        line: idx + 1,
                        raw,
                        error,
                    });
                }
            }
        }

        Ok(())
    }

    fn process_line<S: ReportStrategy>(
        &self,
        line: &str,
        strategy: &S,
        table: &mut StatsTable<S::Accumulator>,
    ) -> Result<LineOutcome, LineError> {
        let value: Value = serde_json::from_str(line)?;
        let record = LogRecord::from_value(&value)?;

        if let Some(filter) = &self.date_filter {
            let ts = record.timestamp()?;
            if !filter.matches(&ts) {
                return Ok(LineOutcome::FilteredOut);
            }
        }

        strategy.accumulate(table, &record)?;
        Ok(LineOutcome::Accepted)
    }
}
