//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the marquee binary.

mod commands;
mod library;
mod playlist;

pub use commands::{Cli, Commands};
pub use library::{check_files, list_media, show_layouts};
pub use playlist::{EditChanges, create_playlist, edit_playlist};
