//! objrepo library
//!
//! Exposes modules for integration testing

pub mod cli;
pub mod config;

pub use config::{LocatorConfig, LogFormat};
