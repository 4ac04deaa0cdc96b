//! Probe output lines and the sink that collects them

use super::Offset;
use crossterm::style::Stylize;
use std::fmt;
use std::io::{self, Write};

/// How the reporting function was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    Direct,
    /// Through a callable parameter
    Dynamic,
    /// Inside the recursive chain
    Cycle,
}

impl CallKind {
    /// Short tag used in summaries, empty for direct calls
    pub fn tag(self) -> &'static str {
        match self {
            CallKind::Direct => "",
            CallKind::Dynamic => "DYN",
            CallKind::Cycle => "CYC",
        }
    }
}

/// One line of probe output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Offset {
        label: &'static str,
        /// Recursion level, shown as `label[n]`
        level: Option<usize>,
        indent: usize,
        kind: CallKind,
        offset: Offset,
    },
    Checksum {
        function: &'static str,
        indent: usize,
        kind: CallKind,
        sum: u64,
    },
}

impl Record {
    pub fn indent(&self) -> usize {
        match self {
            Record::Offset { indent, .. } | Record::Checksum { indent, .. } => *indent,
        }
    }

    /// Label text without indentation (`chain_step[2]`, `leaf_small`)
    pub fn name(&self) -> String {
        match self {
            Record::Offset {
                label,
                level: Some(level),
                ..
            } => format!("{}[{}]", label, level),
            Record::Offset { label, .. } => label.to_string(),
            Record::Checksum { function, .. } => function.to_string(),
        }
    }

    /// Values after the label, space separated
    pub fn values(&self) -> String {
        match self {
            Record::Offset { offset, .. } => format!("{} {}", offset.sp, offset.fp),
            Record::Checksum { sum, .. } => sum.to_string(),
        }
    }

    fn styled_line(&self) -> String {
        let tabs = "\t".repeat(self.indent());
        let name = match self {
            Record::Offset { kind, .. } => match kind {
                CallKind::Direct => self.name().blue().to_string(),
                CallKind::Dynamic => self.name().magenta().to_string(),
                CallKind::Cycle => self.name().cyan().to_string(),
            },
            Record::Checksum { .. } => self.name().green().to_string(),
        };
        format!("{}{} {}", tabs, name, self.values())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}",
            "\t".repeat(self.indent()),
            self.name(),
            self.values()
        )
    }
}

/// Whether records are also written to stdout as they arrive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    Off,
    Plain,
    Color,
}

/// Collected probe output
///
/// Every record is kept for the summary and the report viewer. With an
/// [`Echo`] other than `Off` each record is printed immediately, so a run
/// that dies of stack overflow still shows how far it got.
#[derive(Debug, Clone)]
pub struct ProbeOutput {
    records: Vec<Record>,
    echo: Echo,
}

impl ProbeOutput {
    pub fn new(echo: Echo) -> Self {
        ProbeOutput {
            records: Vec::new(),
            echo,
        }
    }

    /// Output that is only captured, never printed
    pub fn captured() -> Self {
        Self::new(Echo::Off)
    }

    pub fn push(&mut self, record: Record) {
        match self.echo {
            Echo::Off => {}
            Echo::Plain => print_line(&record.to_string()),
            Echo::Color => print_line(&record.styled_line()),
        }
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// All records as plain text lines
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(|r| r.to_string()).collect()
    }
}

fn print_line(line: &str) {
    let mut stdout = io::stdout().lock();
    // A closed stdout is not worth aborting the probe for
    if writeln!(stdout, "{}", line).is_err() {
        log::warn!("stdout closed, dropping probe output");
    }
}
