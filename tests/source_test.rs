use std::io::Write;
use usersleuth::*;

fn csv_file(contents: &str) -> tempfile::NamedTempFile {
    let mut tmp = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("tempfile");
    tmp.write_all(contents.as_bytes()).expect("write");
    tmp
}

#[test]
fn test_csv_rows_in_order() {
    let tmp = csv_file("Employee ID,First Name,Last Name\n1,Alice,Smith\n2,Bob,Jones\n3,,Lee\n");
    let pairs = usersleuth::source::read_table(tmp.path()).expect("read");
    assert_eq!(
        pairs,
        vec![
            NamePair::new("Alice", "Smith"),
            NamePair::new("Bob", "Jones"),
            NamePair::new("", "Lee"),
        ]
    );
}

#[test]
fn test_csv_missing_column() {
    let tmp = csv_file("First Name,Surname\nAlice,Smith\n");
    match usersleuth::source::read_table(tmp.path()) {
        Err(SleuthError::FileRead(msg)) => assert!(msg.contains("Last Name")),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let src = InputSource::Tabular(dir.path().join("absent.xlsx"));
    let r = src.pairs();
    assert!(matches!(r, Err(SleuthError::FileRead(_))));
    assert_eq!(r.unwrap_err().exit_code(), 1);
}

#[test]
fn test_unsupported_extension() {
    let tmp = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .expect("tempfile");
    assert!(matches!(
        usersleuth::source::read_table(tmp.path()),
        Err(SleuthError::FileRead(_))
    ));
}

#[test]
fn test_corrupt_workbook() {
    let mut tmp = tempfile::Builder::new()
        .suffix(".xlsx")
        .tempfile()
        .expect("tempfile");
    tmp.write_all(b"this is not a zip archive").expect("write");
    assert!(matches!(
        usersleuth::source::read_table(tmp.path()),
        Err(SleuthError::FileRead(_))
    ));
}
