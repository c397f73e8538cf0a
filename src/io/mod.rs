/// Command-line interface and batch pattern generation
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// PNG export of rendered patterns
pub mod image;
/// Progress display for batch generation
pub mod progress;
