use calamine::Data;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::excel::io::{cell_to_score, cell_to_string, normalize_header, read_sheet};
use crate::models::ScoreRecord;

pub const COL_USERNAME: &str = "Username";
pub const COL_TEST: &str = "Test";
pub const COL_COUNTRY: &str = "Country";
pub const COL_VERSION: &str = "Version";
pub const COL_SKILL: &str = "Skill/Passage";
pub const COL_SCORE: &str = "Average Score";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_USERNAME,
    COL_TEST,
    COL_COUNTRY,
    COL_VERSION,
    COL_SKILL,
    COL_SCORE,
];

/// Column positions of the required headers within a sheet.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    username: usize,
    test: usize,
    country: usize,
    version: usize,
    skill: usize,
    score: usize,
}

impl ColumnIndex {
    fn from_header(header: &[Data]) -> Result<Self, LoadError> {
        let headers: Vec<String> = header
            .iter()
            .map(|c| normalize_header(&cell_to_string(c)))
            .collect();
        let find = |name: &str| headers.iter().position(|h| *h == normalize_header(name));

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|&&name| find(name).is_none())
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        // all present, checked above
        let at = |name: &str| find(name).unwrap_or_default();
        Ok(ColumnIndex {
            username: at(COL_USERNAME),
            test: at(COL_TEST),
            country: at(COL_COUNTRY),
            version: at(COL_VERSION),
            skill: at(COL_SKILL),
            score: at(COL_SCORE),
        })
    }

    /// Validates the required cells of one row in sheet order, so the
    /// leftmost bad cell is the one reported. Returns the parsed score.
    fn check_row<'a>(&self, row_number: usize, cell: &impl Fn(usize) -> &'a Data) -> Result<f64, LoadError> {
        let mut columns = [
            (self.username, COL_USERNAME),
            (self.test, COL_TEST),
            (self.country, COL_COUNTRY),
            (self.version, COL_VERSION),
            (self.skill, COL_SKILL),
            (self.score, COL_SCORE),
        ];
        columns.sort_by_key(|&(idx, _)| idx);

        let mut score = 0.0;
        for (idx, column) in columns {
            let value = cell(idx);
            if idx == self.score {
                score = cell_to_score(value).ok_or_else(|| LoadError::InvalidScore {
                    row: row_number,
                    value: cell_to_string(value),
                })?;
            } else if cell_to_string(value).is_empty() {
                return Err(LoadError::MissingValue {
                    row: row_number,
                    column: column.to_string(),
                });
            }
        }
        Ok(score)
    }
}

/// Parses a sheet (header row first) into typed records.
///
/// Row numbers in errors are 1-based spreadsheet rows, so the first data
/// row is row 2. Rows whose cells are all empty are skipped.
pub fn parse_score_rows(rows: &[Vec<Data>]) -> Result<Vec<ScoreRecord>, LoadError> {
    let (header, body) = rows.split_first().ok_or(LoadError::EmptySheet)?;
    let cols = ColumnIndex::from_header(header)?;

    let mut records = Vec::with_capacity(body.len());
    for (i, row) in body.iter().enumerate() {
        let row_number = i + 2;
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }

        let cell = |idx: usize| row.get(idx).unwrap_or(&Data::Empty);
        let average_score = cols.check_row(row_number, &cell)?;
        if !(0.0..=1.0).contains(&average_score) {
            warn!(row = row_number, average_score, "average score outside 0..1");
        }

        records.push(ScoreRecord {
            username: cell_to_string(cell(cols.username)),
            test: cell_to_string(cell(cols.test)),
            country: cell_to_string(cell(cols.country)),
            version: cell_to_string(cell(cols.version)),
            skill_or_passage: cell_to_string(cell(cols.skill)),
            average_score,
        });
    }
    debug!(rows = records.len(), skipped = body.len() - records.len(), "parsed score rows");
    Ok(records)
}

/// Loads and validates the score workbook.
pub fn load_score_records<P: AsRef<Path>>(path: P, sheet: Option<&str>) -> Result<Vec<ScoreRecord>, LoadError> {
    let path = path.as_ref();
    let rows = read_sheet(path, sheet)?;
    let records = parse_score_rows(&rows)?;
    info!(path = %path.display(), rows = records.len(), "loaded score workbook");
    Ok(records)
}
