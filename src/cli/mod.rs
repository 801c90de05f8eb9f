//! CLI module for toolfix - command-line interface.

pub mod commands;

pub use commands::Cli;
