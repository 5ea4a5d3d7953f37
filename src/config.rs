use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_DATA_PATH: &'static str = "data/data.csv";

/// Browse, sort and chart employee records from a CSV file.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "main", version)]
pub struct Config {
    /// CSV file with a header row including Name, Designation and Salary
    #[arg(default_value = DEFAULT_DATA_PATH)]
    pub data_path: PathBuf,
}
