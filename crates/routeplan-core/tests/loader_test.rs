use routeplan_core::{load_edges, load_queries, EdgeRecord, LoadError, Query};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn load_edges_from_file_skips_bad_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Gdansk Torun 180").unwrap();
    writeln!(file, "Torun").unwrap();
    writeln!(file, "Torun Lodz 190 km").unwrap();
    writeln!(file, "Lodz Krakow many").unwrap();

    let parsed = load_edges(file.path()).unwrap();
    assert_eq!(
        parsed.records,
        vec![
            EdgeRecord::new("Gdansk", "Torun", 180),
            EdgeRecord::new("Torun", "Lodz", 190),
        ]
    );
    assert_eq!(parsed.skipped, 2);
}

#[test]
fn load_queries_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "Gdansk Lodz\nonly_one\nLodz Gdansk\n").unwrap();

    let parsed = load_queries(file.path()).unwrap();
    assert_eq!(
        parsed.records,
        vec![Query::new("Gdansk", "Lodz"), Query::new("Lodz", "Gdansk")]
    );
    assert_eq!(parsed.skipped, 1);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let err = load_edges(&missing).unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
    assert!(err.to_string().contains("nope.txt"));
}
