//! # Introduction
//!
//! stackprobe captures the stack pointer and frame address once at startup,
//! then runs a fixed tree of nested calls that each put scratch buffers on
//! the stack, checksum them, and report how far the stack has grown since
//! the baseline.
//!
//! ## Pipeline
//!
//! ```text
//! Baseline → Probe → call tree → Records → console / summary / viewer
//! ```
//!
//! 1. [`platform`]: per-target register reads.
//! 2. [`probe`]: the [`probe::Baseline`], the [`probe::Probe`] context and
//!    the records it collects, plus the per-function [`probe::summary`].
//! 3. [`scratch`]: fill pattern and checksum for stack buffers.
//! 4. [`workload`]: direct chain, indirect chain through trait objects, and
//!    the recursive chain.
//! 5. [`config`], [`errors`], [`logging`]: command line and diagnostics.
//! 6. [`ui`]: ratatui report viewer; not part of the stable library API.

pub mod config;
pub mod errors;
pub mod logging;
pub mod platform;
pub mod probe;
pub mod scratch;
pub mod ui;
pub mod workload;
