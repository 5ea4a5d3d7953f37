use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};

use crate::error::{AppError, Result};

/// One row of the input table, field names mapped to text values in header order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn from_row(headers: &StringRecord, row: &StringRecord) -> Self {
        let mut record = Record::default();
        for (name, value) in headers.iter().zip(row.iter()) {
            record.insert(name, value);
        }
        record
    }

    /// Inserts a field, replacing the value of an existing field with the same name.
    pub fn insert(&mut self, name: &str, value: &str) {
        let name = name.trim();
        let value = value.trim().to_string();
        match self.fields.iter_mut().find(|(k, _)| k == name) {
            Some(field) => field.1 = value,
            None => self.fields.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Like `get`, but a missing field is an error.
    pub fn field(&self, name: &str) -> Result<&str> {
        self.get(name).ok_or_else(|| AppError::MissingField(name.to_string()))
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Record {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut record = Record::default();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (pos, (name, value)) in self.fields().enumerate() {
            if pos > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': '{}'", name, value)?;
        }
        write!(f, "}}")
    }
}

/// Reads every data row of the CSV at `path`.
///
/// A path that does not exist is reported on `out` and yields no records,
/// which callers treat as "nothing to work with". Rows with the wrong number of
/// cells are kept: extra cells are dropped and absent cells leave the field out.
pub fn read_data<W: Write>(path: &Path, out: &mut W) -> Result<Vec<Record>> {
    if !path.exists() {
        writeln!(out, "Error: File not found -> {}", path.display())?;
        info!("data file {} does not exist", path.display());
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(file);
    let headers = rdr.headers()?.clone();
    let mut records = Vec::<Record>::new();
    for result in rdr.records() {
        let row = result?;
        if row.len() != headers.len() {
            debug!(
                "row {} has {} cells, header has {}",
                records.len() + 1,
                row.len(),
                headers.len()
            );
        }
        records.push(Record::from_row(&headers, &row));
    }
    info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
