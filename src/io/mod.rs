//! Input/output, configuration, and the ambient services around the engine

/// Command-line parsing and batch file processing
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// PNG loading and export
pub mod image;
/// Logger installation
pub mod logging;
/// Prefill images for pinned pixels
pub mod prefill;
/// Terminal progress bars
pub mod progress;
