use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

use crate::error::LoadError;

/// Converts a calamine cell to a trimmed string. Whole floats are printed
/// without a fractional part so numeric versions like `2` stay `"2"`.
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.is_finite() {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Reads a cell as a score fraction. Numeric strings accept `,` as decimal
/// separator; a trailing `%` marks a percentage and is scaled to a fraction.
pub fn cell_to_score(c: &Data) -> Option<f64> {
    let value = match c {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => {
            let s = s.trim();
            match s.strip_suffix('%') {
                Some(pct) => pct.trim().replace(',', ".").parse::<f64>().ok().map(|v| v / 100.0),
                None => s.replace(',', ".").parse::<f64>().ok(),
            }
        }
        _ => None,
    }?;
    value.is_finite().then_some(value)
}

/// Lowercases a header and drops whitespace so `"Average Score"` and
/// `"average  score "` compare equal.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Opens the workbook and returns the requested sheet (or the first one).
pub fn read_sheet<P: AsRef<Path>>(path: P, sheet_name: Option<&str>) -> Result<Vec<Vec<Data>>, LoadError> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let names = workbook.sheet_names().to_owned();
    let sheet = match sheet_name {
        Some(name) => names
            .iter()
            .find(|s| s.as_str() == name)
            .cloned()
            .ok_or_else(|| LoadError::SheetNotFound(name.to_string()))?,
        None => names
            .first()
            .cloned()
            .ok_or_else(|| LoadError::NoSheets(path.display().to_string()))?,
    };

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|source| LoadError::Sheet { sheet: sheet.clone(), source })?;
    Ok(range.rows().map(|r| r.to_vec()).collect())
}
