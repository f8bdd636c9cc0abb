//! Command line, configuration, errors and progress display

/// Command line front end
pub mod cli;
/// Constants and generation configuration
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Progress display for automaton runs
pub mod progress;
