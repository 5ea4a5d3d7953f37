pub mod chart;
pub mod config;
pub mod csv_reader;
pub mod dataset;
pub mod display;
pub mod error;
pub mod menu;
