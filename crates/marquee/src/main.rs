//! Marquee CLI binary.
//!
//! This binary provides command-line access to playlist editing:
//! - Inspect the layout table and library media
//! - Check files before uploading them
//! - Create and edit playlists

use clap::Parser;
use marquee::MarqueeConfig;
use marquee::telemetry::init_console_telemetry;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, EditChanges, check_files, create_playlist, edit_playlist, list_media,
        show_layouts,
    };

    // Load .env before configuration reads the environment
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    init_console_telemetry(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => MarqueeConfig::from_file(path)?,
        None => MarqueeConfig::load()?,
    };

    // Execute the requested command
    match cli.command {
        Commands::Layouts => show_layouts(config.layouts()),

        Commands::Check { files } => {
            let rejected = check_files(&files);
            if rejected > 0 {
                std::process::exit(1);
            }
        }

        Commands::Media { page } => {
            list_media(&config, page).await?;
        }

        Commands::Create {
            name,
            layout,
            slides,
        } => {
            create_playlist(&config, name, layout, slides).await?;
        }

        Commands::Edit {
            id,
            name,
            layout,
            deletes,
            slides,
        } => {
            let changes = EditChanges {
                name,
                layout,
                deletes,
            };
            edit_playlist(&config, id, changes, slides).await?;
        }
    }

    Ok(())
}
