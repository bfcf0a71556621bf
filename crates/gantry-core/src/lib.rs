//! Gantry Core - Core library for changelog generation
//!
//! This crate provides the foundational error types and configuration
//! for the Gantry changelog toolkit.

pub mod config;
pub mod error;

pub use config::ChangelogConfig;
pub use error::{ChangelogError, ConfigError, GantryError, Result, VersionError};
