//! Stderr backend for the `log` facade
//!
//! Level comes from the `LOG` environment variable and defaults to off, so
//! probe output on stdout is never interleaved with diagnostics by default.

use crossterm::style::{Color, Stylize};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger {
    color: bool,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = format!("[{:>5}]", record.level());
        if self.color {
            let color = match record.level() {
                Level::Error => Color::Red,
                Level::Warn => Color::Yellow,
                Level::Info => Color::Blue,
                Level::Debug => Color::Green,
                Level::Trace => Color::DarkGrey,
            };
            eprintln!("{} {}", tag.with(color), record.args());
        } else {
            eprintln!("{} {}", tag, record.args());
        }
    }

    fn flush(&self) {}
}

/// Parse a `LOG` value; unknown values turn logging off
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

/// Install the logger; later calls keep the first logger
pub fn init(color: bool) {
    let level = parse_level(std::env::var("LOG").ok().as_deref());
    let logger = Box::new(StderrLogger { color });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(parse_level(Some("verbose")), LevelFilter::Off);
        assert_eq!(parse_level(None), LevelFilter::Off);
    }
}
