
use std::fs;
use std::path::{Path, PathBuf};

/// Writes `lines` joined by newlines, without a trailing newline.
pub(super) fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

pub(super) const LARGE_LOG: &[&str] = &[
    r#"{"@timestamp": "2025-06-22T10:00:00+00:00", "url": "/api/users", "response_time": 0.15}"#,
    r#"{"@timestamp": "2025-06-22T10:01:00+00:00", "url": "/api/users", "response_time": 0.20}"#,
    r#"{"@timestamp": "2025-06-22T10:02:00+00:00", "url": "/api/users", "response_time": 0.18}"#,
    r#"{"@timestamp": "2025-06-22T10:03:00+00:00", "url": "/api/users", "response_time": 0.22}"#,
    r#"{"@timestamp": "2025-06-22T10:04:00+00:00", "url": "/api/users", "response_time": 0.25}"#,
    r#"{"@timestamp": "2025-03-27T11:00:00+00:00", "url": "/api/products", "response_time": 0.40}"#,
    r#"{"@timestamp": "2025-03-27T11:01:00+00:00", "url": "/api/products", "response_time": 0.35}"#,
    r#"{"@timestamp": "2025-03-27T11:02:00+00:00", "url": "/api/products", "response_time": 0.50}"#,
    r#"{"@timestamp": "2025-06-22T12:00:00+00:00", "url": "/api/orders", "response_time": 1.20}"#,
    r#"{"@timestamp": "2025-06-22T12:01:00+00:00", "url": "/api/orders", "response_time": 0.80}"#,
];
