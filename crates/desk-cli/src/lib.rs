//! CLI argument models and slash-command text utilities for Mentor Desk.
//!
//! Exposes the clap-backed [`Cli`], the command catalog used for help and
//! suggestions, and command-file parsing shared by the interactive and
//! scripted runtimes.

pub mod cli_args;
pub mod cli_types;
pub mod command_catalog;
pub mod command_file;
pub mod command_text;

pub use cli_args::Cli;
pub use cli_types::*;
pub use command_catalog::{ALLOCATE_USAGE, COMMAND_NAMES, COMMAND_SPECS};
pub use command_file::*;
pub use command_text::*;
