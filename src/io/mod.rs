//! Input/output operations
//!
//! Puzzle text parsing, the command-line front end, PNG export, progress
//! display, configuration constants and the crate error type.

/// Command-line interface
pub mod cli;
/// Puzzle constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Puzzle text parsing and formatting
pub mod parser;
/// Search progress display
pub mod progress;
