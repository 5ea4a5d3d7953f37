use std::io::{Cursor, Write};

use simple_payroll::chart::{ChartRenderer, SalaryChart};
use simple_payroll::config::Config;
use simple_payroll::csv_reader::read_data;
use simple_payroll::dataset::{filter_by_designation, sort_by_salary, total_and_average_salary};
use simple_payroll::error::Result;
use simple_payroll::menu::{run, SessionState};
use tempfile::NamedTempFile;

#[derive(Default)]
struct CountingCharts(usize);

impl ChartRenderer for CountingCharts {
    fn render(&mut self, chart: &SalaryChart) -> Result<()> {
        assert_eq!(chart.bars.len(), 3);
        self.0 += 1;
        Ok(())
    }
}

fn staff_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(file, "Name,Designation,Salary").unwrap();
    writeln!(file, "Alice,Manager,50000").unwrap();
    writeln!(file, "Bob,Engineer,60000").unwrap();
    writeln!(file, "Carol,Manager,abc").unwrap();
    file
}

fn name(record: &&simple_payroll::csv_reader::Record) -> String {
    record.get("Name").unwrap().to_string()
}

#[test]
fn queries_over_loaded_file() {
    let file = staff_file();
    let records = read_data(file.path(), &mut std::io::sink()).unwrap();

    let managers = filter_by_designation(&records, "Manager").unwrap();
    assert_eq!(managers.iter().map(name).collect::<Vec<_>>(), vec!["Alice", "Carol"]);

    let sorted = sort_by_salary(&records, true);
    assert_eq!(sorted.iter().map(name).collect::<Vec<_>>(), vec!["Bob", "Alice", "Carol"]);

    let (total, average) = total_and_average_salary(&records);
    assert_eq!(total, 110000);
    assert_eq!(format!("{:.2}", average), "36666.67");
}

#[test]
fn full_menu_session() {
    let file = staff_file();
    let config = Config { data_path: file.path().to_path_buf() };
    let mut out = Vec::new();
    let mut charts = CountingCharts::default();

    let state = run(&config, Cursor::new("1\n2\n3\n4\n5\nx\n6\n"), &mut out, &mut charts).unwrap();

    assert_eq!(state, SessionState::Exited);
    assert_eq!(charts.0, 1);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("--- All Employees ---").count(), 3);
    assert!(text.contains("Total Salary: 110000, Average Salary: 36666.67"));
    assert!(text.contains("Invalid choice. Try again."));
    assert!(text.ends_with("Exiting...\n"));
}

#[test]
fn header_only_file_never_shows_menu() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Name,Designation,Salary").unwrap();
    let config = Config { data_path: file.path().to_path_buf() };
    let mut out = Vec::new();
    let state = run(&config, Cursor::new("1\n"), &mut out, CountingCharts::default()).unwrap();
    assert_eq!(state, SessionState::Exited);
    assert!(out.is_empty());
}

#[test]
fn missing_file_is_reported_on_session_output() {
    let config = Config { data_path: "/nonexistent/staff.csv".into() };
    let mut out = Vec::new();
    let state = run(&config, Cursor::new("1\n"), &mut out, CountingCharts::default()).unwrap();
    assert_eq!(state, SessionState::Exited);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "Error: File not found -> /nonexistent/staff.csv\n");
}
