use calamine::Data;
use scoredash::error::LoadError;
use scoredash::excel::{parse_score_rows, ScoreTable, REQUIRED_COLUMNS};
use std::io::Write;
use std::path::Path;

fn s(v: &str) -> Data {
    Data::String(v.to_string())
}

fn header() -> Vec<Data> {
    REQUIRED_COLUMNS.iter().map(|h| s(h)).collect()
}

#[test]
fn test_parse_mixed_cell_types() {
    let rows = vec![
        header(),
        vec![s("amira"), s("EST I"), s("Egypt"), Data::Int(2), s("A-SK-Reading"), Data::Float(0.75)],
        vec![s("omar"), s("EST II"), s("Jordan"), s("B"), s("Passage 1"), s("62%")],
        vec![Data::Empty, Data::Empty, Data::Empty, Data::Empty, Data::Empty, Data::Empty],
        vec![s("lina"), s("EST II"), s("Egypt"), Data::Float(1.0), s("C-SK-Grammar"), s("0,4")],
    ];
    let records = parse_score_rows(&rows).expect("rows should parse");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].version, "2");
    assert_eq!(records[0].average_score, 0.75);
    assert!((records[1].average_score - 0.62).abs() < 1e-12);
    assert_eq!(records[2].version, "1");
    assert_eq!(records[2].average_score, 0.4);

    let table = ScoreTable::from_records(records);
    assert_eq!(table.len(), 3);
    assert_eq!(table.options().countries, vec!["Egypt", "Jordan"]);
    assert!(table.source().is_none());
}

#[test]
fn test_short_row_reports_missing_value() {
    let rows = vec![header(), vec![s("amira"), s("EST I"), s("Egypt")]];
    match parse_score_rows(&rows) {
        Err(LoadError::MissingValue { row, column }) => {
            assert_eq!(row, 2);
            assert_eq!(column, "Version");
        }
        other => panic!("expected MissingValue, got {:?}", other),
    }

    let rows = vec![
        header(),
        vec![s("amira"), s("EST I"), Data::Empty, s("1"), s("A-SK-Reading"), Data::Float(0.5)],
    ];
    match parse_score_rows(&rows) {
        Err(LoadError::MissingValue { row, column }) => {
            assert_eq!(row, 2);
            assert_eq!(column, "Country");
        }
        other => panic!("expected MissingValue, got {:?}", other),
    }
}

fn write_workbook(path: &Path, rows: &[[&str; 6]]) {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
    let columns = ["A", "B", "C", "D", "E", "F"];
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let coordinate = format!("{}{}", columns[c], r + 1);
            sheet.get_cell_mut(coordinate.as_str()).set_value(*value);
        }
    }
    umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
}

#[test]
fn test_load_workbook_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Overall_Averages.xlsx");
    write_workbook(
        &path,
        &[
            REQUIRED_COLUMNS,
            ["amira", "EST I", "Egypt", "1", "A-SK-Reading", "0.5"],
            ["omar", "EST II", "Korea, Republic of", "2", "Passage 1", "0.9"],
        ],
    );

    let table = ScoreTable::load(&path, None).expect("workbook should load");
    assert_eq!(table.len(), 2);
    assert_eq!(table.source(), Some(path.as_path()));
    let records = table.records();
    assert_eq!(records[0].username, "amira");
    assert_eq!(records[0].skill_or_passage, "A-SK-Reading");
    assert_eq!(records[0].version, "1");
    assert_eq!(records[0].average_score, 0.5);
    assert_eq!(records[1].country, "Korea, Republic of");
    assert_eq!(records[1].average_score, 0.9);

    let named = ScoreTable::load(&path, Some("Sheet1")).expect("named sheet should load");
    assert_eq!(named.len(), 2);

    match ScoreTable::load(&path, Some("missing")) {
        Err(LoadError::SheetNotFound(name)) => assert_eq!(name, "missing"),
        other => panic!("expected SheetNotFound, got {:?}", other.map(|t| t.len())),
    }
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Overall_Averages.xlsx");
    let err = ScoreTable::load(&path, None).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }), "got {:?}", err);
    assert!(err.to_string().contains("Overall_Averages.xlsx"));
}

#[test]
fn test_load_non_workbook_fails() {
    let mut file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
    file.write_all(b"Username,Test\nnot,a workbook\n").unwrap();
    let err = ScoreTable::load(file.path(), None).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }), "got {:?}", err);
}

#[test]
fn test_missing_columns_message() {
    let rows = vec![vec![s("Username"), s("Score")]];
    let err = parse_score_rows(&rows).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing required columns: Test, Country, Version, Skill/Passage, Average Score"
    );
}
