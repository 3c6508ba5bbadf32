use clap::Parser;
use logreport_core::cli::report::{ReportArgs, run_report};
use logreport_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "logreport",
    version,
    about = "Logreport: reports over newline-delimited JSON access logs"
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,

    /// Format of diagnostics on stderr: pretty or json
    /// (default: pretty on a terminal, json otherwise)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = run_report(cli.report) {
        eprintln!("report error: {e:#}");
        std::process::exit(1);
    }
}
