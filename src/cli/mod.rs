//! CLI module for the campuscal command-line interface.
//!
//! Each command reads its input (a file or an argument), runs the library
//! operation, and prints either JSON or a human-readable summary.

mod commands;
mod output;
pub mod types;

pub use commands::*;
