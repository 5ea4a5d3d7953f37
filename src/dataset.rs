use std::cmp::Reverse;

use crate::csv_reader::Record;
use crate::error::Result;

pub const NAME_FIELD: &'static str = "Name";
pub const DESIGNATION_FIELD: &'static str = "Designation";
pub const SALARY_FIELD: &'static str = "Salary";

pub const DEFAULT_DESIGNATION: &'static str = "Manager";

/// The records loaded for a session. Queries borrow from it and never change it.
#[derive(Debug, Clone, Default)]
pub struct EmployeeDataSet {
    records: Vec<Record>,
}

impl EmployeeDataSet {
    pub fn new(records: Vec<Record>) -> Self {
        EmployeeDataSet { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Salary as an integer; absent or unparsable values count as 0.
pub fn salary(record: &Record) -> i64 {
    record
        .get(SALARY_FIELD)
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(0)
}

/// Records whose designation equals `designation`, ignoring case, in input order.
pub fn filter_by_designation<'a, I>(records: I, designation: &str) -> Result<Vec<&'a Record>>
where
    I: IntoIterator<Item = &'a Record>,
{
    let wanted = designation.to_lowercase();
    let mut matched = Vec::new();
    for record in records {
        if record.field(DESIGNATION_FIELD)?.to_lowercase() == wanted {
            matched.push(record);
        }
    }
    Ok(matched)
}

/// Stable sort on `salary`, highest first when `descending`.
pub fn sort_by_salary<'a, I>(records: I, descending: bool) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut sorted: Vec<&Record> = records.into_iter().collect();
    if descending {
        sorted.sort_by_key(|r| Reverse(salary(r)));
    } else {
        sorted.sort_by_key(|r| salary(r));
    }
    sorted
}

pub fn total_and_average_salary<'a, I>(records: I) -> (i64, f64)
where
    I: IntoIterator<Item = &'a Record>,
{
    let (total, count) = records
        .into_iter()
        .fold((0i64, 0usize), |(total, count), r| (total.saturating_add(salary(r)), count + 1));
    let average = if count == 0 { 0.0 } else { total as f64 / count as f64 };
    (total, average)
}
