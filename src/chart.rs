use std::io;

use crossterm::{
    cursor::Show,
    event::{self, Event as CEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::csv_reader::Record;
use crate::dataset::{salary, NAME_FIELD};
use crate::error::Result;

pub const CHART_TITLE: &'static str = "Employee Salary Distribution";
pub const X_LABEL: &'static str = "Employee Name";
pub const Y_LABEL: &'static str = "Salary";

/// A bar chart of salary per employee, one bar per record in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryChart {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<(String, u64)>,
}

impl SalaryChart {
    /// Fails if a record has no name. Negative salaries become empty bars.
    pub fn from_records<'a, I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut bars = Vec::new();
        for record in records {
            let name = record.field(NAME_FIELD)?.to_string();
            bars.push((name, u64::try_from(salary(record)).unwrap_or(0)));
        }
        Ok(SalaryChart {
            title: CHART_TITLE,
            x_label: X_LABEL,
            y_label: Y_LABEL,
            bars,
        })
    }
}

pub trait ChartRenderer {
    /// Shows the chart and returns once the user is done with it.
    fn render(&mut self, chart: &SalaryChart) -> Result<()>;
}

impl<T: ChartRenderer + ?Sized> ChartRenderer for &mut T {
    fn render(&mut self, chart: &SalaryChart) -> Result<()> {
        (**self).render(chart)
    }
}

type TerminalStep = fn() -> io::Result<()>;

/// Undoes terminal setup steps on drop, newest first. A failing step is logged
/// and the remaining ones still run.
#[derive(Default)]
struct ScreenGuard {
    restore: Vec<(&'static str, TerminalStep)>,
}

impl ScreenGuard {
    /// Runs `setup`; once it succeeds `undo` is owed on drop.
    fn enter(&mut self, what: &'static str, setup: TerminalStep, undo: TerminalStep) -> io::Result<()> {
        setup()?;
        self.restore.push((what, undo));
        Ok(())
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        while let Some((what, undo)) = self.restore.pop() {
            if let Err(e) = undo() {
                warn!("could not restore terminal from {}: {}", what, e);
            }
        }
    }
}

fn enter_alternate_screen() -> io::Result<()> {
    execute!(io::stdout(), EnterAlternateScreen)
}

fn leave_alternate_screen() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Draws charts full screen on the terminal and waits for a closing key.
#[derive(Debug, Default)]
pub struct TerminalChart;

impl ChartRenderer for TerminalChart {
    fn render(&mut self, chart: &SalaryChart) -> Result<()> {
        let mut screen = ScreenGuard::default();
        screen.enter("raw mode", enable_raw_mode, disable_raw_mode)?;
        screen.enter("alternate screen", enter_alternate_screen, leave_alternate_screen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        show_until_closed(&mut terminal, chart)
    }
}

fn show_until_closed<B: Backend>(terminal: &mut Terminal<B>, chart: &SalaryChart) -> Result<()> {
    terminal.clear()?;
    loop {
        terminal.draw(|rect| draw_chart(rect, chart))?;
        if let CEvent::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => {
                    debug!("chart closed");
                    return Ok(());
                }
                _ => {}
            }
        }
    }
}

fn bar_width(area_width: u16, bars: usize) -> u16 {
    if bars == 0 {
        return 1;
    }
    let per_bar = area_width.saturating_sub(2) / bars.min(u16::MAX as usize) as u16;
    per_bar.saturating_sub(1).clamp(1, 12)
}

fn draw_chart<B: Backend>(rect: &mut Frame<B>, chart: &SalaryChart) {
    let size = rect.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(3), Constraint::Length(3)].as_ref())
        .split(size);

    let data: Vec<(&str, u64)> = chart
        .bars
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect();
    let bars = BarChart::default()
        .block(
            Block::default()
                .title(Span::styled(chart.title, Style::default().add_modifier(Modifier::BOLD)))
                .borders(Borders::ALL),
        )
        .data(&data)
        .bar_width(bar_width(chunks[0].width, data.len()))
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));
    rect.render_widget(bars, chunks[0]);

    let legend = Paragraph::new(vec![Spans::from(vec![
        Span::styled(format!("x: {}", chart.x_label), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(format!("y: {}", chart.y_label), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled("q/Esc/Enter to close", Style::default().fg(Color::DarkGray)),
    ])])
    .block(Block::default().borders(Borders::ALL))
    .alignment(Alignment::Center);
    rect.render_widget(legend, chunks[1]);
}
