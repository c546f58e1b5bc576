use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn null_markers_become_none() {
    assert_eq!(null_cell(""), None);
    assert_eq!(null_cell("   "), None);
    assert_eq!(null_cell("NA"), None);
    assert_eq!(null_cell("NaN"), None);
    assert_eq!(null_cell("codeine"), Some("codeine".to_string()));
    assert_eq!(null_cell(" CYP2D6 \r"), Some("CYP2D6".to_string()));
}

#[test]
fn reads_header_addressed_rows() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("t.tsv");
    fs::write(&path, "\u{feff}b\ta\n1\t2\n\t\n3\n").expect("write");

    let table = read_tsv(&path, "test").expect("read");
    assert_eq!(table.columns(), &["b".to_string(), "a".to_string()]);
    assert_eq!(table.rows.len(), 2);
    let a = table.require("a").expect("column a");
    assert_eq!(table.rows[0].cell(a), Some("2".to_string()));
    assert_eq!(table.rows[0].line, 2);
    assert_eq!(table.rows[1].cell(a), None);
    assert_eq!(table.rows[1].line, 4);
}

#[test]
fn missing_column_is_reported() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("t.tsv");
    fs::write(&path, "x\n1\n").expect("write");

    let table = read_tsv(&path, "gene catalog").expect("read");
    match table.require("Symbol") {
        Err(err @ InputError::MissingColumn { .. }) => {
            let message = err.to_string();
            assert!(message.contains("gene catalog"), "{message}");
            assert!(message.contains("t.tsv"), "{message}");
            assert!(message.ends_with("missing required column: Symbol"), "{message}");
        }
        other => panic!("expected missing column, got {other:?}"),
    }
}

#[test]
fn malformed_row_reports_its_line() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("t.tsv");
    fs::write(&path, b"Symbol\nCYP2D6\nCYP\xff\xfe2C9\n".as_slice()).expect("write");

    let err = read_tsv(&path, "gene catalog").expect_err("invalid utf-8");
    match err {
        InputError::InvalidTsvRow { line, reason } => {
            assert_eq!(line, 3);
            assert!(!reason.is_empty());
        }
        other => panic!("expected invalid row, got {other:?}"),
    }
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().expect("tempdir");
    let err = read_tsv(&dir.path().join("absent.tsv"), "test").expect_err("missing");
    assert!(matches!(err, InputError::MissingFile(_)));
}

#[cfg(feature = "gz")]
#[test]
fn reads_gzip_tables() {
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use std::io::Write;

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("t.tsv.gz");
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(b"Symbol\nCYP2D6\n").expect("encode");
    fs::write(&path, enc.finish().expect("finish")).expect("write");

    let table = read_tsv(&path, "test").expect("read");
    assert_eq!(table.rows.len(), 1);
}
