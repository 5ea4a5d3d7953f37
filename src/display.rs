use std::io::Write;

use crate::csv_reader::Record;
use crate::error::Result;

pub fn display_employees<'a, W, I>(out: &mut W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    writeln!(out, "\n--- All Employees ---")?;
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}
