//! CLI module for crewctl - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for running research
//! invocations and probing service status.

pub mod commands;

pub use commands::Cli;
