use crate::conf::{ValidationErrors, config_error_hint};
use crate::report::{ReportKind, ReportRow};
use clap::ValueEnum;
use owo_colors::OwoColorize;
use prettytable::{Cell, Row, Table, format};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Index column first, then the report's own columns.
pub fn render_table(kind: ReportKind, rows: &[ReportRow]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    let mut titles = vec![Cell::new("")];
    titles.extend(kind.columns().iter().map(|c| Cell::new(c).style_spec("b")));
    table.set_titles(Row::new(titles));

    for (i, row) in rows.iter().enumerate() {
        let mut cells = vec![Cell::new(&i.to_string()).style_spec("r")];
        for (col, value) in row.cells().iter().enumerate() {
            // the grouping key stays left-aligned, counts and times go right
            let cell = if col == 0 {
                Cell::new(value)
            } else {
                Cell::new(value).style_spec("r")
            };
            cells.push(cell);
        }
        table.add_row(Row::new(cells));
    }

    table.to_string()
}

pub fn render_json(rows: &[ReportRow]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(rows)?;
    out.push('\n');
    Ok(out)
}

pub fn render_config_errors(errs: &ValidationErrors, color: bool) -> String {
    let mut out = String::new();

    for err in &errs.0 {
        if color {
            out.push_str(&format!("{} {}\n", "error:".red().bold(), err));
        } else {
            out.push_str(&format!("error: {err}\n"));
        }

        if let Some(hint) = config_error_hint(err) {
            let label = if color {
                "help:".cyan().bold().to_string()
            } else {
                "help:".to_string()
            };
            out.push_str(&format!("  {label} "));
            out.push_str(&hint.replace('\n', "\n        "));
            out.push('\n');
        }
    }

    out
}
