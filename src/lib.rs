pub mod config;
pub mod error;

// Datasets and search
pub mod dataset;

// HTTP API
pub mod api;

// Command line
pub mod cli;

// Re-exports
pub use config::Settings;
pub use error::{Error, Result};
