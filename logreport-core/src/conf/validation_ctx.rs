use crate::conf::error::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Default)]
pub struct ValidationCtx {
    errors: Vec<ConfigError>,
}

impl ValidationCtx {
    pub fn push(&mut self, err: ConfigError) {
        self.errors.push(err);
    }

    /// Keeps the value on success, records the error otherwise.
    pub fn check<T>(&mut self, result: Result<T, ConfigError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    pub fn into_errors(self) -> ValidationErrors {
        ValidationErrors(self.errors)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

#[derive(Debug, Error, Diagnostic)]
#[error("configuration validation failed ({} errors)", .0.len())]
pub struct ValidationErrors(#[related] pub Vec<ConfigError>);
