use std::{ffi::OsStr, path::PathBuf};

use crate::report::RESULT_FILE;

pub const COUNT_VAR: &str = "FIB_N";
pub const DEFAULT_COUNT: u32 = 40;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display(fmt = "invalid {var}: expected a non-negative integer, found {value:?}")]
    InvalidCount { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub n: u32,
    pub output: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var_os(COUNT_VAR).as_deref())
    }

    // unset or blank falls back to the default count
    pub fn from_value(value: Option<&OsStr>) -> Result<Self, ConfigError> {
        let raw = value.map(|value| value.to_string_lossy());
        let n = match raw.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_COUNT,
            Some(trimmed) => trimmed.parse().map_err(|_| ConfigError::InvalidCount {
                var: COUNT_VAR,
                value: trimmed.into(),
            })?,
        };
        Ok(Self {
            n,
            output: RESULT_FILE.into(),
        })
    }
}
