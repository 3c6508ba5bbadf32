use integration_tests::harness::{SkipWarning, init_test_tracing, skip_warnings_under, write_log};
use logreport_core::aggregate::{AggregateError, LogAggregator};
use logreport_core::conf::check_date;
use logreport_core::report::ReportKind;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn warning(file_name: &str, line: &str, raw: &str) -> SkipWarning {
    SkipWarning {
        file_name: file_name.to_string(),
        line: line.to_string(),
        raw: raw.to_string(),
    }
}

#[test]
fn skipped_lines_are_reported_in_path_then_line_order() {
    // Arrange
    init_test_tracing();
    let dir = tempdir().unwrap();
    let first = write_log(
        dir.path(),
        "b-first.log",
        &[
            r#"{"url": "/a", "response_time": 0.1}"#,
            r#"{"url": "/a", "response_time": "0.3"}"#,
            r#"{"url": "/a""#,
        ],
    );
    let second = write_log(
        dir.path(),
        "a-second.log",
        &[r#"oops"#, r#"{"url": "/a", "response_time": 0.3}"#],
    );

    // Act
    let outcome = LogAggregator::new([first, second])
        .run_report(ReportKind::Average)
        .unwrap();

    // Assert
    assert_eq!(outcome.rows[0].total(), 2);
    assert_eq!(
        skip_warnings_under(dir.path()),
        vec![
            warning("b-first.log", "2", r#"{"url": "/a", "response_time": "0.3"}"#),
            warning("b-first.log", "3", r#"{"url": "/a""#),
            warning("a-second.log", "1", "oops"),
        ]
    );
}

#[test]
fn bad_timestamps_are_reported_when_filtering() {
    init_test_tracing();
    let dir = tempdir().unwrap();
    let path = write_log(
        dir.path(),
        "ts.log",
        &[
            r#"{"@timestamp": "yesterday", "url": "/a"}"#,
            r#"{"url": "/a"}"#,
            r#"{"@timestamp": "2025-06-22T10:00:00+00:00", "url": "/a"}"#,
        ],
    );

    let outcome = LogAggregator::new([path])
        .with_date_filter(Some(check_date("2025-22-06").unwrap()))
        .run_report(ReportKind::Average)
        .unwrap();

    assert_eq!(outcome.rows[0].total(), 1);
    let lines: Vec<_> = skip_warnings_under(dir.path())
        .into_iter()
        .map(|w| w.line)
        .collect();
    assert_eq!(lines, vec!["1", "2"]);
}

#[test]
fn unreadable_file_mid_run_is_fatal() {
    let dir = tempdir().unwrap();
    let ok = write_log(dir.path(), "ok.log", &[r#"{"url": "/a"}"#]);

    let err = LogAggregator::new([ok, dir.path().join("vanished.log")])
        .run_report(ReportKind::UserAgent)
        .unwrap_err();

    assert!(matches!(err, AggregateError::Open { .. }));
}

#[test]
fn utc_timestamps_are_kept_by_the_date_filter() {
    init_test_tracing();
    let dir = tempdir().unwrap();
    let path = write_log(
        dir.path(),
        "utc.log",
        &[
            r#"{"@timestamp": "2025-06-22T10:00:00Z", "url": "/a"}"#,
            r#"{"@timestamp": "2025-06-21T23:59:59Z", "url": "/a"}"#,
        ],
    );

    let outcome = LogAggregator::new([path])
        .with_date_filter(Some(check_date("2025-22-06").unwrap()))
        .run_report(ReportKind::Average)
        .unwrap();

    assert_eq!(outcome.rows[0].total(), 1);
    assert_eq!(outcome.filtered_out, 1);
    assert!(skip_warnings_under(dir.path()).is_empty());
}
