//! Everything that touches the outside world: arguments, console, files and logs

/// Command-line arguments and the startup and shutdown sequence
pub mod cli;
/// Binary pointybox file format
pub mod codec;
/// Program-wide constants and format layout
pub mod configuration;
/// Line-oriented command front-end
pub mod console;
/// Error types for file handling and parameters
pub mod error;
/// Guide image loading
pub mod image;
/// Terminal logger setup
pub mod logging;
