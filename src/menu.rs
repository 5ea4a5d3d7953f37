use std::io::{BufRead, Write};

use log::{debug, info};

use crate::chart::{ChartRenderer, SalaryChart};
use crate::config::Config;
use crate::csv_reader::read_data;
use crate::dataset::{
    filter_by_designation, sort_by_salary, total_and_average_salary, EmployeeDataSet,
    DEFAULT_DESIGNATION,
};
use crate::display::display_employees;
use crate::error::Result;

const MENU_TITLES: [&'static str; 6] = [
    "Show all employees",
    "Filter by Designation (Manager)",
    "Sort by Salary (High to Low)",
    "Total and Average Salary",
    "Show Graph: Salary Distribution",
    "Exit",
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MenuChoice {
    ShowAll,
    FilterManagers,
    SortBySalary,
    SalaryTotals,
    ShowGraph,
    Exit,
    Invalid,
}

impl From<&str> for MenuChoice {
    fn from(input: &str) -> MenuChoice {
        match input.trim() {
            "1" => MenuChoice::ShowAll,
            "2" => MenuChoice::FilterManagers,
            "3" => MenuChoice::SortBySalary,
            "4" => MenuChoice::SalaryTotals,
            "5" => MenuChoice::ShowGraph,
            "6" => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SessionState {
    Running,
    Exited,
}

/// Holds the loaded dataset for the whole session and answers menu choices against it.
pub struct Menu<'a, R, W, C> {
    dataset: &'a EmployeeDataSet,
    input: R,
    output: W,
    charts: C,
    state: SessionState,
}

impl<'a, R: BufRead, W: Write, C: ChartRenderer> Menu<'a, R, W, C> {
    pub fn new(dataset: &'a EmployeeDataSet, input: R, output: W, charts: C) -> Self {
        Menu {
            dataset,
            input,
            output,
            charts,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    #[cfg(test)]
    fn into_parts(self) -> (R, W, C) {
        (self.input, self.output, self.charts)
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n==== EMPLOYEE DATA ANALYSIS MENU ====")?;
        for (pos, title) in MENU_TITLES.iter().enumerate() {
            writeln!(self.output, "{}. {}", pos + 1, title)?;
        }
        write!(self.output, "Enter your choice (1-6): ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one line; end of input counts as choosing to exit.
    fn read_choice(&mut self) -> Result<MenuChoice> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed, leaving menu");
            return Ok(MenuChoice::Exit);
        }
        Ok(MenuChoice::from(line.as_str()))
    }

    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        debug!("menu choice {:?}", choice);
        let dataset = self.dataset;
        let records = dataset.records();
        match choice {
            MenuChoice::ShowAll => display_employees(&mut self.output, records)?,
            MenuChoice::FilterManagers => {
                let filtered = filter_by_designation(records, DEFAULT_DESIGNATION)?;
                display_employees(&mut self.output, filtered)?;
            }
            MenuChoice::SortBySalary => {
                let sorted = sort_by_salary(records, true);
                display_employees(&mut self.output, sorted)?;
            }
            MenuChoice::SalaryTotals => {
                let (total, average) = total_and_average_salary(records);
                writeln!(
                    self.output,
                    "\nTotal Salary: {}, Average Salary: {:.2}",
                    total, average
                )?;
            }
            MenuChoice::ShowGraph => {
                let chart = SalaryChart::from_records(records)?;
                self.charts.render(&chart)?;
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting...")?;
                self.state = SessionState::Exited;
            }
            MenuChoice::Invalid => writeln!(self.output, "Invalid choice. Try again.")?,
        }
        Ok(())
    }

    /// Runs until the user exits. Errors from a choice end the session.
    pub fn run(&mut self) -> Result<()> {
        while self.state == SessionState::Running {
            self.print_menu()?;
            let choice = self.read_choice()?;
            self.dispatch(choice)?;
        }
        Ok(())
    }
}

/// Loads the configured file and runs the menu over it. An empty load ends the session at once.
pub fn run<R, W, C>(config: &Config, input: R, mut output: W, charts: C) -> Result<SessionState>
where
    R: BufRead,
    W: Write,
    C: ChartRenderer,
{
    let dataset = EmployeeDataSet::new(read_data(&config.data_path, &mut output)?);
    if dataset.is_empty() {
        info!("no records in {}, nothing to do", config.data_path.display());
        return Ok(SessionState::Exited);
    }
    info!("starting menu over {} records", dataset.len());
    let mut menu = Menu::new(&dataset, input, output, charts);
    menu.run()?;
    Ok(menu.state())
}
