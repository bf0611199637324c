//! Platform adapters: terminal-facing output of the CLI.

pub mod cli;

pub use cli::{print_fatal, print_parse_error, print_usage};
