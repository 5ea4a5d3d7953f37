use std::error::Error;
use std::io;

use clap::Parser;

use simple_payroll::chart::TerminalChart;
use simple_payroll::config::Config;
use simple_payroll::menu;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    let stdin = io::stdin();
    menu::run(&config, stdin.lock(), io::stdout(), TerminalChart)?;
    Ok(())
}
