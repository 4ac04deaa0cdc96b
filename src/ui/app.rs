//! Report viewer state and event loop

use crate::platform;
use crate::probe::record::Record;
use crate::probe::summary::Summary;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Trace,
    Summary,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Trace => FocusedPane::Summary,
            FocusedPane::Summary => FocusedPane::Trace,
        }
    }
}

/// The viewer state
pub struct App {
    /// Records of the finished run
    pub records: Vec<Record>,

    /// Peak depth per label
    pub summary: Summary,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub trace_scroll: usize,
    pub summary_scroll: usize,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(records: Vec<Record>) -> Self {
        let summary = Summary::from_records(&records);
        let status_message = format!(
            "{} records, deepest {} bytes",
            records.len(),
            summary.max_peak_sp()
        );
        App {
            records,
            summary,
            focused_pane: FocusedPane::Trace,
            trace_scroll: 0,
            summary_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the viewer until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.draw(terminal)?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Draw one frame
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|f| self.render(f))?;
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        // Trace (left) | Summary (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        super::panes::render_trace_pane(
            frame,
            columns[0],
            &self.records,
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        super::panes::render_summary_pane(
            frame,
            columns[1],
            &self.summary,
            self.focused_pane == FocusedPane::Summary,
            &mut self.summary_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            platform::register_names(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            // Clamped to the last page on the next render
            KeyCode::End => {
                *self.focused_scroll() = usize::MAX;
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Trace => &mut self.trace_scroll,
            FocusedPane::Summary => &mut self.summary_scroll,
        }
    }
}
