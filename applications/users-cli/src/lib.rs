//! Users CLI Library
//!
//! Command-line front end for the users client: fetches the user list once
//! and prints it as a table or as JSON.
//!
//! This library exposes the core components for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

// Re-export commonly used types for convenience
pub use commands::{run, Command, OutputFormat};
pub use config::CliConfig;
pub use error::{ConfigError, Result};
