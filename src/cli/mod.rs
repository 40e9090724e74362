//! CLI module for the pet-system binary

pub mod commands;
pub mod error;
pub mod logger;
pub mod output;

pub use error::CliError;
