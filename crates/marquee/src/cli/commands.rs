//! CLI command definitions.

use clap::{Parser, Subcommand};
use marquee::LibraryMedia;
use std::path::PathBuf;

/// Marquee - build and edit interactive signage playlists
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Build and edit interactive signage playlists", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read configuration from this file only
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the slide count required by each layout
    Layouts,

    /// Check whether files would be accepted as slide images
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List image media from the library
    Media {
        /// Page to show (1-based)
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Create a playlist
    Create {
        /// Playlist name
        #[arg(long)]
        name: String,

        /// Layout id
        #[arg(long)]
        layout: u32,

        #[command(flatten)]
        slides: SlideArgs,
    },

    /// Edit a saved playlist
    Edit {
        /// Playlist id
        id: i64,

        /// New playlist name
        #[arg(long)]
        name: Option<String>,

        /// New layout id
        #[arg(long)]
        layout: Option<u32>,

        /// Slide index to delete (repeatable, indexes as loaded)
        #[arg(long = "delete", value_name = "INDEX")]
        deletes: Vec<usize>,

        #[command(flatten)]
        slides: SlideArgs,
    },
}

/// Slide edits shared by `create` and `edit`
#[derive(clap::Args, Debug)]
pub struct SlideArgs {
    /// Image file to upload as a slide (repeatable)
    #[arg(long = "upload", value_name = "PATH")]
    pub uploads: Vec<PathBuf>,

    /// Library media to add, as ID=URL (repeatable)
    #[arg(long = "media", value_name = "ID=URL", value_parser = parse_media)]
    pub media: Vec<LibraryMedia>,

    /// Move a slide, as FROM:TO (repeatable, applied last)
    #[arg(long = "move", value_name = "FROM:TO", value_parser = parse_move)]
    pub moves: Vec<(usize, usize)>,

    /// Print the form fields instead of submitting
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_media(value: &str) -> Result<LibraryMedia, String> {
    let (id, url) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=URL, got '{}'", value))?;
    let id = id
        .trim()
        .parse()
        .map_err(|e| format!("invalid media id '{}': {}", id, e))?;
    if url.trim().is_empty() {
        return Err(format!("missing URL for media {}", id));
    }
    Ok(LibraryMedia::new(id, url.trim()))
}

fn parse_move(value: &str) -> Result<(usize, usize), String> {
    let (from, to) = value
        .split_once(':')
        .ok_or_else(|| format!("expected FROM:TO, got '{}'", value))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid slide index '{}': {}", s, e))
    };
    Ok((parse(from)?, parse(to)?))
}
