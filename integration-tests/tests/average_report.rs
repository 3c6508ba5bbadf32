use integration_tests::harness::fixture_path;
use logreport_core::aggregate::LogAggregator;
use logreport_core::conf::load_report_config;
use logreport_core::report::{AverageRow, ReportRow};
use pretty_assertions::assert_eq;

fn average_rows(rows: &[ReportRow]) -> Vec<AverageRow> {
    rows.iter()
        .map(|row| match row {
            ReportRow::Average(r) => r.clone(),
            other => panic!("unexpected row {other:?}"),
        })
        .collect()
}

#[test]
fn average_report_over_fixture() {
    // Arrange
    let cfg = load_report_config(&[fixture_path("access.log")], "average", None).unwrap();

    // Act
    let outcome = LogAggregator::new(cfg.files)
        .with_date_filter(cfg.date)
        .run_report(cfg.report)
        .unwrap();

    // Assert
    assert_eq!(
        average_rows(&outcome.rows),
        vec![
            AverageRow {
                handler: "/api/users".into(),
                total: 5,
                avg_response_time: 0.2,
            },
            AverageRow {
                handler: "/api/products".into(),
                total: 3,
                avg_response_time: 0.417,
            },
            AverageRow {
                handler: "/api/orders".into(),
                total: 2,
                avg_response_time: 1.0,
            },
        ]
    );
    assert!(outcome.skipped.is_empty());
}

#[test]
fn date_filter_keeps_only_matching_day() {
    let cfg = load_report_config(&[fixture_path("access.log")], "average", Some("2025-22-06"))
        .unwrap();

    let outcome = LogAggregator::new(cfg.files)
        .with_date_filter(cfg.date)
        .run_report(cfg.report)
        .unwrap();
    let rows = average_rows(&outcome.rows);

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.handler != "/api/products"));
    assert_eq!(rows.iter().map(|r| r.total).sum::<u64>(), 7);
    assert_eq!(outcome.filtered_out, 3);
}

#[test]
fn same_file_twice_doubles_every_count() {
    let path = fixture_path("access.log");

    let outcome = LogAggregator::new([path.clone(), path])
        .run_report(logreport_core::report::ReportKind::Average)
        .unwrap();
    let rows = average_rows(&outcome.rows);

    assert_eq!(rows[0].total, 10);
    assert_eq!(rows[0].avg_response_time, 0.2);
    assert_eq!(rows.iter().map(|r| r.total).sum::<u64>(), 20);
}
