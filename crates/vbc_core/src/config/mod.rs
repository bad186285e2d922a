//! Configuration management for the converter.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Defaults for every missing key
//!
//! # Example
//!
//! ```no_run
//! use vbc_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new("vbc.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Reading samples from {}", config.settings().paths.oto_file);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    ConfigSection, ConversionSettings, LoggingSettings, PathSettings, Settings,
    DEFAULT_RENAME_OUTPUT,
};
