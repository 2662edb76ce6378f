//! Semicolon separated files of municipality records.
//!
//! Each row has 7 fields in this order:
//!
//! `region number;region name;postal code;name;male;female;total`
//!
//! Blank lines are skipped. There is no header row.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use ord_table::{OrdTable, TableError};
use thiserror::Error;

use crate::Municipality;

pub const SEPARATOR: char = ';';
pub const FIELD_COUNT: usize = 7;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("line {line}: expected 7 fields separated by `;`, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: the {field} field is not a number: {value:?}")]
    NotANumber {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: the municipality name is empty")]
    EmptyName { line: usize },
    #[error("line {line}: municipality {name:?} is already in the register")]
    Duplicate { line: usize, name: String },
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn parse_number(line: usize, field: &'static str, value: &str) -> Result<u32, PersistenceError> {
    value.parse().map_err(|_| PersistenceError::NotANumber {
        line,
        field,
        value: value.to_owned(),
    })
}

/// Returns the first text field of `m` that cannot be written as part of a
/// row, because it holds the separator or a line break
pub fn unwritable_field(m: &Municipality) -> Option<&'static str> {
    [
        ("region name", m.region_name()),
        ("postal code", m.postal_code()),
        ("name", m.name()),
    ]
    .into_iter()
    .find(|(_, s)| s.contains([SEPARATOR, '\n', '\r']))
    .map(|(field, _)| field)
}

/// Parses one row. `line` is the 1-based line number used in errors.
pub fn parse_row(row: &str, line: usize) -> Result<Municipality, PersistenceError> {
    let fields: Vec<&str> = row.split(SEPARATOR).map(str::trim).collect();
    if fields.len() != FIELD_COUNT {
        return Err(PersistenceError::FieldCount {
            line,
            found: fields.len(),
        })
    }
    let region_number = parse_number(line, "region number", fields[0])?;
    let male = parse_number(line, "male", fields[4])?;
    let female = parse_number(line, "female", fields[5])?;
    let total = parse_number(line, "total", fields[6])?;
    Ok(Municipality::new(
        region_number,
        fields[1],
        fields[2],
        fields[3],
        male,
        female,
        total,
    ))
}

/// Reads every row, failing on the first malformed one
pub fn read_rows<R: BufRead>(reader: R) -> Result<Vec<(usize, Municipality)>, PersistenceError> {
    let mut rows = vec![];
    for (i, row) in reader.lines().enumerate() {
        let row = row?;
        if row.trim().is_empty() {
            continue
        }
        rows.push((i + 1, parse_row(&row, i + 1)?));
    }
    Ok(rows)
}

/// Writes one row per record
pub fn write_rows<'a, W: Write>(
    mut writer: W,
    rows: impl IntoIterator<Item = &'a Municipality>,
) -> io::Result<usize> {
    let mut count = 0;
    for m in rows {
        writeln!(writer, "{m}")?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// Inserts every record of the file at `path` into `table`, keyed by name.
/// The whole file is parsed before anything is inserted, and if a name
/// collides the records inserted so far by this call are removed again, so
/// on any error `table` is left as it was. Returns the number of records
/// inserted.
pub fn import_csv(
    table: &mut OrdTable<String, Municipality>,
    path: impl AsRef<Path>,
) -> Result<usize, PersistenceError> {
    let path = path.as_ref();
    let rows = read_rows(BufReader::new(File::open(path)?))?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "parsed csv");
    let mut inserted: Vec<String> = Vec::with_capacity(rows.len());
    for (line, m) in rows {
        let name = m.name().to_owned();
        let err = match table.insert(name.clone(), m) {
            Ok(()) => {
                inserted.push(name);
                continue
            }
            Err(TableError::NullKey) => PersistenceError::EmptyName { line },
            Err(_) => PersistenceError::Duplicate { line, name },
        };
        tracing::warn!(%err, rolled_back = inserted.len(), "import failed");
        for name in &inserted {
            let _ = table.remove(name);
        }
        return Err(err)
    }
    Ok(inserted.len())
}

/// Writes every record of `table` in ascending name order to `path`,
/// replacing the file. Returns the number of records written.
pub fn export_csv(
    table: &OrdTable<String, Municipality>,
    path: impl AsRef<Path>,
) -> Result<usize, PersistenceError> {
    let path = path.as_ref();
    let count = write_rows(BufWriter::new(File::create(path)?), table.iter())?;
    tracing::debug!(path = %path.display(), count, "exported csv");
    Ok(count)
}
