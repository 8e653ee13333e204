//! Integration tests: reading timecourses from CSV files on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use timecourse_io::{CsvConfig, IoError, read_csv};

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn reads_default_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "akt.csv",
        "time,value\n0,1.2672\n0.5,1.5907\n1,1.6862\n",
    );

    let tc = read_csv(&path, &CsvConfig::default()).unwrap();
    assert_eq!(tc.label(), "akt");
    assert_eq!(tc.time(), &[0.0, 0.5, 1.0]);
    assert_eq!(tc.values(), &[1.2672, 1.5907, 1.6862]);
    assert_eq!(tc.n_missing(), 0);
}

#[test]
fn missing_cells_become_nan() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "jnk.csv",
        "time,value\n0,1.0\n1,\n2,NA\n3,nan\n4,2.0\n",
    );

    let tc = read_csv(&path, &CsvConfig::default()).unwrap();
    assert_eq!(tc.len(), 5);
    assert_eq!(tc.n_missing(), 3);
    assert_eq!(tc.values()[0], 1.0);
    assert!(tc.values()[1].is_nan());
    assert_eq!(tc.values()[4], 2.0);
}

#[test]
fn custom_columns_and_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "panel.tsv",
        "hours\tERK\tAKT\n0\t0.1\t1.0\n2\t0.4\t2.0\n",
    );
    let config = CsvConfig::default()
        .with_time_column("hours")
        .with_value_column("AKT")
        .with_delimiter(b'\t');

    let tc = read_csv(&path, &config).unwrap();
    assert_eq!(tc.label(), "panel");
    assert_eq!(tc.time(), &[0.0, 2.0]);
    assert_eq!(tc.values(), &[1.0, 2.0]);
}

#[test]
fn whitespace_around_cells_is_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "s.csv", " time , value \n 0 , 3.5 \n");
    let tc = read_csv(&path, &CsvConfig::default()).unwrap();
    assert_eq!(tc.values(), &[3.5]);
}

#[test]
fn file_not_found() {
    let path = Path::new("/tmp/timecourse_test_nonexistent_file.csv");
    let err = read_csv(path, &CsvConfig::default()).unwrap_err();
    assert!(
        matches!(err, IoError::FileNotFound { .. }),
        "expected FileNotFound, got {err:?}"
    );
}

#[test]
fn invalid_config_rejects_before_io() {
    let path = Path::new("/tmp/timecourse_test_nonexistent_file.csv");
    let config = CsvConfig::default().with_value_column("time");
    let err = read_csv(path, &config).unwrap_err();
    assert!(
        matches!(err, IoError::Validation { .. }),
        "expected Validation, got {err:?}"
    );
}

#[test]
fn missing_column() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "m.csv", "time,signal\n0,1\n");
    let err = read_csv(&path, &CsvConfig::default()).unwrap_err();
    match err {
        IoError::MissingColumn { name, .. } => assert_eq!(name, "value"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn unparsable_value_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "p.csv", "time,value\n0,1\n1,2\n2,oops\n");
    let err = read_csv(&path, &CsvConfig::default()).unwrap_err();
    match err {
        IoError::Parse { line, column, .. } => {
            assert_eq!(line, 4);
            assert_eq!(column, "value");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
}

#[test]
fn missing_time_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "t.csv", "time,value\n0,1\nNA,2\n");
    let err = read_csv(&path, &CsvConfig::default()).unwrap_err();
    assert!(
        matches!(err, IoError::Parse { line: 3, .. }),
        "expected Parse on line 3, got {err:?}"
    );
}

#[test]
fn header_only_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "e.csv", "time,value\n");
    let err = read_csv(&path, &CsvConfig::default()).unwrap_err();
    assert!(
        matches!(err, IoError::EmptyData { .. }),
        "expected EmptyData, got {err:?}"
    );
}

#[test]
fn ragged_row_is_csv_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "r.csv", "time,value\n0,1\n1,2,3\n");
    let err = read_csv(&path, &CsvConfig::default()).unwrap_err();
    assert!(
        matches!(err, IoError::Csv { .. }),
        "expected Csv, got {err:?}"
    );
}
