//! Command-line configuration
//!
//! ```text
//! stackprobe [--depth <n>] [--summary] [--tui] [--no-color] [args...]
//! ```
//!
//! Positional arguments are accepted and ignored; only their count reaches
//! the direct call chain. Parsing never fails: unusable options are kept
//! as warnings and the run goes ahead with defaults.

use crate::errors::ConfigError;
use crate::workload::constants::{DEFAULT_DEPTH, MAX_DEPTH};

/// Options for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Recursion depth of the recursive chain
    pub depth: usize,
    /// Print the per-function peak summary after the run
    pub summary: bool,
    /// Open the report viewer after the run
    pub tui: bool,
    /// Colorize console output
    pub color: bool,
    /// Show usage and exit
    pub help: bool,
    /// Number of process arguments, program name included
    pub argc: usize,
    /// Options that were ignored or adjusted
    pub warnings: Vec<ConfigError>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            depth: DEFAULT_DEPTH,
            summary: false,
            tui: false,
            color: true,
            help: false,
            argc: 1,
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Parse process arguments; the first item is the program name
    pub fn from_args<I, S>(args: I) -> Config
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut argc = 0;
        let mut args = args.into_iter();

        if args.next().is_some() {
            argc += 1;
        }

        while let Some(arg) = args.next() {
            argc += 1;
            match arg.as_ref() {
                "--depth" | "-d" => match args.next() {
                    Some(value) => {
                        argc += 1;
                        config.set_depth(arg.as_ref(), value.as_ref());
                    }
                    None => config.warnings.push(ConfigError::MissingValue {
                        option: arg.as_ref().to_string(),
                    }),
                },
                "--summary" | "-s" => config.summary = true,
                "--tui" => config.tui = true,
                "--no-color" => config.color = false,
                "--help" | "-h" => config.help = true,
                other if other.starts_with("--depth=") => {
                    config.set_depth("--depth", &other["--depth=".len()..]);
                }
                other if other.starts_with('-') && other.len() > 1 => {
                    config
                        .warnings
                        .push(ConfigError::UnknownOption(other.to_string()));
                }
                _ => {}
            }
        }

        config.argc = argc.max(1);
        config
    }

    /// Apply environment overrides (`NO_COLOR`)
    pub fn with_env(mut self) -> Self {
        if std::env::var_os("NO_COLOR").is_some() {
            self.color = false;
        }
        self
    }

    /// Bad values keep the default depth, large ones are clamped
    fn set_depth(&mut self, option: &str, value: &str) {
        match value.parse::<usize>() {
            Ok(depth) if depth > MAX_DEPTH => {
                self.warnings.push(ConfigError::DepthOutOfRange {
                    depth,
                    max: MAX_DEPTH,
                });
                self.depth = MAX_DEPTH;
            }
            Ok(depth) => self.depth = depth,
            Err(_) => {
                self.warnings.push(ConfigError::InvalidNumber {
                    option: option.to_string(),
                    value: value.to_string(),
                });
                self.depth = DEFAULT_DEPTH;
            }
        }
    }
}

/// Usage text for `--help`
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {} [--depth <n>] [--summary] [--tui] [--no-color]\n\
         \n\
         Options:\n\
         \x20 -d, --depth <n>   recursion depth of the recursive chain (default {}, max {})\n\
         \x20 -s, --summary     print peak stack depth per function after the run\n\
         \x20     --tui         browse the report in a terminal viewer after the run\n\
         \x20     --no-color    plain console output (also NO_COLOR)\n\
         \x20 -h, --help        show this help\n\
         \n\
         Set LOG=<error|warn|info|debug|trace> for diagnostics on stderr.",
        program_name, DEFAULT_DEPTH, MAX_DEPTH
    )
}
