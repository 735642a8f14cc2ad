//! Command-line interface
//!
//! Every subcommand ingests the files it is given into a fresh in-memory store;
//! nothing is persisted between runs.

pub mod commands;
mod output;

pub use commands::{Cli, Commands, run};
