//! Pager transmission configuration
//!
//! This crate provides configuration loading and parsing for the encoder
//! binaries:
//! - TOML configuration file parsing
//! - Transmission configuration structures and validation

pub mod toml_config;
pub mod tx_config;

pub use toml_config::*;
pub use tx_config::*;
