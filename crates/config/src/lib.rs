//! Configuration management for the AlphaSOC client.
//!
//! This crate provides types and loaders for managing AlphaSOC API
//! connection settings and the API key from environment variables and files.

pub mod constants;
mod loader;
pub mod path;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none, read_config_file};
pub use types::{Config, ConfigFile, ConnectionConfig};
