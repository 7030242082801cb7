//! Command-line surface for maintaining an object repository.

pub mod app;
pub mod check;
pub mod commands;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod env;
pub mod runtime;
pub mod show;

pub use app::run;
