use std::{fs, io::Cursor};

use agenda::{
    persistence::{export_csv, import_csv, parse_row, read_rows, write_rows, PersistenceError},
    Municipality,
};
use ord_table::OrdTable;

const ROWS: &str = "1;Hlavní město Praha;110 00;Praha;600000;650000;1250000
2;Středočeský;250 01;Brandýs nad Labem;9000;9500;18500

3;Jihočeský;370 01;České Budějovice;45000;48000;93000
";

#[test]
fn parse_row_fields() {
    let m = parse_row("6;Karlovarský;360 01;Karlovy Vary;24000;25000;49000", 1).unwrap();
    assert_eq!(m.region_number(), 6);
    assert_eq!(m.region_name(), "Karlovarský");
    assert_eq!(m.postal_code(), "360 01");
    assert_eq!(m.name(), "Karlovy Vary");
    assert_eq!(m.male(), 24000);
    assert_eq!(m.female(), 25000);
    assert_eq!(m.total(), 49000);
    // `Display` is the same row
    assert_eq!(
        m.to_string(),
        "6;Karlovarský;360 01;Karlovy Vary;24000;25000;49000"
    );
}

#[test]
fn parse_row_errors() {
    assert!(matches!(
        parse_row("1;a;b;c;1;2", 4),
        Err(PersistenceError::FieldCount { line: 4, found: 6 })
    ));
    assert!(matches!(
        parse_row("1;a;b;c;1;2;3;4", 1),
        Err(PersistenceError::FieldCount { found: 8, .. })
    ));
    match parse_row("1;a;b;c;x;2;3", 9) {
        Err(PersistenceError::NotANumber { line, field, value }) => {
            assert_eq!(line, 9);
            assert_eq!(field, "male");
            assert_eq!(value, "x");
        }
        res => panic!("{res:?}"),
    }
    assert!(matches!(
        parse_row("-1;a;b;c;1;2;3", 1),
        Err(PersistenceError::NotANumber {
            field: "region number",
            ..
        })
    ));
}

#[test]
fn read_rows_skips_blank_lines() {
    let rows = read_rows(Cursor::new(ROWS)).unwrap();
    let lines: Vec<usize> = rows.iter().map(|(line, _)| *line).collect();
    assert_eq!(lines, vec![1, 2, 4]);
    assert_eq!(rows[2].1.name(), "České Budějovice");
}

#[test]
fn write_rows_then_read() {
    let rows = vec![
        Municipality::new(1, "r", "100 00", "b", 1, 2, 3),
        Municipality::new(2, "r", "200 00", "a", 4, 5, 9),
    ];
    let mut buf = vec![];
    assert_eq!(write_rows(&mut buf, &rows).unwrap(), 2);
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "1;r;100 00;b;1;2;3\n2;r;200 00;a;4;5;9\n");
    let read: Vec<Municipality> = read_rows(Cursor::new(text))
        .unwrap()
        .into_iter()
        .map(|(_, m)| m)
        .collect();
    assert_eq!(read, rows);
}

#[test]
fn import_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, ROWS).unwrap();

    let mut table = OrdTable::new();
    assert_eq!(import_csv(&mut table, &input).unwrap(), 3);
    OrdTable::_check_invariants(&table).unwrap();
    assert_eq!(table.find(&"Praha".to_owned()).unwrap().total(), 1250000);

    assert_eq!(export_csv(&table, &output).unwrap(), 3);
    let exported = fs::read_to_string(&output).unwrap();
    let names: Vec<&str> = exported
        .lines()
        .map(|line| line.split(';').nth(3).unwrap())
        .collect();
    // ascending name order
    assert_eq!(
        names,
        vec!["Brandýs nad Labem", "Praha", "České Budějovice"]
    );
}

#[test]
fn import_failures_leave_table_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut table = OrdTable::new();
    let existing = Municipality::new(9, "r", "000 00", "Zlín", 1, 1, 2);
    table.insert("Zlín".to_owned(), existing).unwrap();

    // malformed row after good rows, nothing is inserted
    let bad = dir.path().join("bad.csv");
    fs::write(&bad, "1;r;p;Aš;1;1;2\n1;r;p;Brno;1;one;2\n").unwrap();
    assert!(matches!(
        import_csv(&mut table, &bad),
        Err(PersistenceError::NotANumber { line: 2, .. })
    ));
    assert_eq!(table.len(), 1);

    // a collision in the middle rolls back the rows before it
    let dup = dir.path().join("dup.csv");
    fs::write(&dup, "1;r;p;Aš;1;1;2\n1;r;p;Brno;1;1;2\n1;r;p;Zlín;1;1;2\n").unwrap();
    match import_csv(&mut table, &dup) {
        Err(PersistenceError::Duplicate { line, name }) => {
            assert_eq!(line, 3);
            assert_eq!(name, "Zlín");
        }
        res => panic!("{res:?}"),
    }
    assert_eq!(table.len(), 1);
    assert!(!table.contains(&"Aš".to_owned()));
    assert_eq!(table.find(&"Zlín".to_owned()).unwrap().region_number(), 9);
    OrdTable::_check_invariants(&table).unwrap();

    // empty names are rejected
    let empty = dir.path().join("empty.csv");
    fs::write(&empty, "1;r;p;;1;1;2\n").unwrap();
    assert!(matches!(
        import_csv(&mut table, &empty),
        Err(PersistenceError::EmptyName { line: 1 })
    ));

    assert!(matches!(
        import_csv(&mut table, dir.path().join("missing.csv")),
        Err(PersistenceError::Io(_))
    ));
    assert_eq!(table.len(), 1);
}
