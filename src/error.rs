use thiserror::Error;

/// Failures while reading the score workbook. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot open workbook {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: calamine::Error,
    },

    #[error("workbook has no sheets: {0}")]
    NoSheets(String),

    #[error("sheet not found: {0}")]
    SheetNotFound(String),

    #[error("cannot read sheet {sheet}: {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("sheet has no header row")]
    EmptySheet,

    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("row {row}: missing value for column {column}")]
    MissingValue { row: usize, column: String },

    #[error("row {row}: invalid average score {value:?}")]
    InvalidScore { row: usize, value: String },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("gauge drawing failed: {0}")]
    Draw(String),
}

/// Bad dashboard query parameters.
#[derive(Error, Debug, PartialEq)]
pub enum QueryError {
    #[error("invalid value for {param}: {value:?}")]
    InvalidNumber { param: String, value: String },
}
