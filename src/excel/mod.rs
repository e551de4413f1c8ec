//! Workbook loading.
//!
//! Submodules:
//! - `io`: calamine helpers (cell conversion, sheet selection)
//! - `scores`: header validation and typed `ScoreRecord` parsing

mod io;
pub mod scores;

pub use io::{cell_to_score, cell_to_string, normalize_header};
pub use scores::{load_score_records, parse_score_rows, REQUIRED_COLUMNS};

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::models::ScoreRecord;

/// The loaded score table. Read-only for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    source: Option<PathBuf>,
    records: Vec<ScoreRecord>,
}

/// Distinct values offered by the dashboard selectors, in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SelectorOptions {
    pub students: Vec<String>,
    pub tests: Vec<String>,
    pub countries: Vec<String>,
    pub versions: Vec<String>,
}

impl ScoreTable {
    pub fn load<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let records = load_score_records(path, sheet)?;
        Ok(ScoreTable {
            source: Some(path.to_path_buf()),
            records,
        })
    }

    pub fn from_records(records: Vec<ScoreRecord>) -> Self {
        ScoreTable { source: None, records }
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn options(&self) -> SelectorOptions {
        SelectorOptions {
            students: distinct(&self.records, |r| &r.username),
            tests: distinct(&self.records, |r| &r.test),
            countries: distinct(&self.records, |r| &r.country),
            versions: distinct(&self.records, |r| &r.version),
        }
    }
}

fn distinct<F>(records: &[ScoreRecord], field: F) -> Vec<String>
where
    F: Fn(&ScoreRecord) -> &String,
{
    let mut out: Vec<String> = Vec::new();
    for r in records {
        let v = field(r);
        if !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}
