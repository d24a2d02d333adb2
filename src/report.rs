use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::bench::{Outcome, Sequence};

pub const LANGUAGE: &str = "Rust";
pub const RESULT_FILE: &str = "result_rust.json";

/// Summary of one benchmark run, in the shape shared by every language entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub language: String,
    pub n: u32,
    pub sequence: Sequence,
    pub seconds: f64,
}

impl Report {
    pub fn new(n: u32, outcome: Outcome) -> Self {
        Self {
            language: LANGUAGE.into(),
            n,
            sequence: outcome.sequence,
            seconds: outcome.elapsed.as_secs_f64(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    // truncates any previous result
    pub fn write_to(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)
            .with_context(|| format!("failed to write result to {}", path.display()))
    }
}
