//! Command-line configuration problems
//!
//! The probe run itself has no recoverable errors; a stack overflow is a
//! platform crash. Option problems never stop a run: they are collected on
//! [`crate::config::Config::warnings`] and logged.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Option that is not recognized
    UnknownOption(String),

    /// Option given without its value
    MissingValue { option: String },

    /// Value that does not parse as a number
    InvalidNumber { option: String, value: String },

    /// Recursion depth above the accepted limit
    DepthOutOfRange { depth: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownOption(option) => write!(f, "Unknown option '{}' ignored", option),
            ConfigError::MissingValue { option } => {
                write!(f, "Option '{}' requires a value, using the default", option)
            }
            ConfigError::InvalidNumber { option, value } => {
                write!(
                    f,
                    "Invalid number '{}' for option '{}', using the default",
                    value, option
                )
            }
            ConfigError::DepthOutOfRange { depth, max } => {
                write!(
                    f,
                    "Recursion depth {} is out of range (0..={}), clamped to {}",
                    depth, max, max
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
