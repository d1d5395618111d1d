//! Input/output operations: CLI, constants, errors, export, and progress

/// Command-line interface and layout processor
pub mod cli;
/// Engine constants and runtime defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Layout export as JSON and terminal previews
pub mod export;
/// Progress display for sampling runs
pub mod progress;
