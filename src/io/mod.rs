//! Input/output around the engine: command line, interactive shell, data entry and errors

/// Command-line arguments and one-shot command execution
pub mod cli;
/// Layout constants and runtime defaults
pub mod configuration;
/// Error types shared by the whole crate
pub mod error;
/// Parsing of typed numbers and bin counts
pub mod input;
/// Built-in sample datasets
pub mod samples;
/// Interactive numbered-menu session
pub mod shell;
