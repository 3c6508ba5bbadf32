use crate::aggregate::LogAggregator;
use crate::cli::render::{OutputFormat, render_config_errors, render_json, render_table};
use crate::conf::load_report_config;
use anyhow::Result;
use clap::Args;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// One or more newline-delimited JSON log files
    #[arg(long = "file", num_args = 1.., required = true)]
    pub files: Vec<PathBuf>,

    /// Report to build: average, max, user-agent
    #[arg(long)]
    pub report: String,

    /// Only count records from this day. Format is YYYY-DD-MM (day before month)
    #[arg(long)]
    pub date: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn run_report(args: ReportArgs) -> Result<()> {
    let cfg = match load_report_config(&args.files, &args.report, args.date.as_deref()) {
        Ok(cfg) => cfg,
        Err(errs) => {
            eprint!("{}", render_config_errors(&errs, io::stderr().is_terminal()));
            std::process::exit(1);
        }
    };

    tracing::info!(
        report = %cfg.report,
        files = cfg.files.len(),
        date = ?cfg.date.map(|d| d.to_string()),
        "building report"
    );

    let outcome = LogAggregator::new(cfg.files)
        .with_date_filter(cfg.date)
        .run_report(cfg.report)?;

    let rendered = match args.format {
        OutputFormat::Table => render_table(cfg.report, &outcome.rows),
        OutputFormat::Json => render_json(&outcome.rows)?,
    };
    print!("{rendered}");

    Ok(())
}
