use crate::aggregate::DateFilter;
use crate::conf::error::ConfigError;
use crate::report::ReportKind;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

/// Exists, is a regular file, and can be opened for reading. Checked in that
/// order so the operator gets the most specific message.
pub fn check_file_access(path: &Path) -> Result<(), ConfigError> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(ConfigError::not_readable(path, e)),
    };

    if !metadata.is_file() {
        return Err(ConfigError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    File::open(path)
        .map(drop)
        .map_err(|e| ConfigError::not_readable(path, e))
}

pub fn check_date(value: &str) -> Result<DateFilter, ConfigError> {
    DateFilter::parse_cli(value).map_err(|source| ConfigError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

pub fn check_report(name: &str) -> Result<ReportKind, ConfigError> {
    Ok(name.parse::<ReportKind>()?)
}
