//! Playlist create and edit handlers.

use super::commands::SlideArgs;
use marquee::{
    EditPlan, EditSummary, FormValue, MarqueeConfig, MarqueeResult, PlaylistClient,
    PlaylistEditor, PlaylistMeta, UploadFile, validation,
};
use std::path::PathBuf;
use tracing::{info, warn};

/// Changes requested by `marquee edit` beyond the shared slide arguments.
#[derive(Debug, Default)]
pub struct EditChanges {
    /// New playlist name
    pub name: Option<String>,
    /// New layout id
    pub layout: Option<u32>,
    /// Slide indexes to delete
    pub deletes: Vec<usize>,
}

/// Create a playlist from uploads and library media.
pub async fn create_playlist(
    config: &MarqueeConfig,
    name: String,
    layout: u32,
    slides: SlideArgs,
) -> MarqueeResult<()> {
    let mut editor = PlaylistEditor::create(PlaylistMeta::new(name, layout), config.layouts().clone());
    let dry_run = slides.dry_run;
    let plan = build_plan(EditChanges::default(), slides).await?;
    report(&editor.apply(plan));

    finish(config, &mut editor, dry_run).await
}

/// Load a saved playlist, apply changes, and submit the update.
pub async fn edit_playlist(
    config: &MarqueeConfig,
    id: i64,
    changes: EditChanges,
    slides: SlideArgs,
) -> MarqueeResult<()> {
    let client = PlaylistClient::new(config.api().clone())?;
    let mut editor = PlaylistEditor::open(&client, id, config.layouts().clone()).await?;
    info!(id, slides = editor.slides().len(), "Loaded playlist");

    let dry_run = slides.dry_run;
    let plan = build_plan(changes, slides).await?;
    report(&editor.apply(plan));

    finish(config, &mut editor, dry_run).await
}

async fn build_plan(changes: EditChanges, slides: SlideArgs) -> MarqueeResult<EditPlan> {
    Ok(EditPlan {
        name: changes.name,
        layout: changes.layout,
        deletes: changes.deletes,
        uploads: read_uploads(&slides.uploads).await?,
        media: slides.media,
        moves: slides.moves,
    })
}

async fn read_uploads(paths: &[PathBuf]) -> MarqueeResult<Vec<UploadFile>> {
    let mut uploads = Vec::with_capacity(paths.len());
    for path in paths {
        let content_type = validation::mime_for_path(path).unwrap_or_default();
        uploads.push(UploadFile::from_path(path, content_type).await?);
    }
    Ok(uploads)
}

fn report(summary: &EditSummary) {
    for warning in &summary.warnings {
        warn!("Skipped: {}", warning.kind());
    }
    if summary.discarded_uploads > 0 {
        warn!(
            discarded = summary.discarded_uploads,
            "Layout is full, some uploads were left out"
        );
    }
}

async fn finish(
    config: &MarqueeConfig,
    editor: &mut PlaylistEditor,
    dry_run: bool,
) -> MarqueeResult<()> {
    let slides = editor.slides();
    println!(
        "{} ({} of {})",
        editor.meta().name,
        slides.len(),
        slides.max()
    );

    if dry_run {
        for (name, value) in editor.form().fields() {
            match value {
                FormValue::Text(text) => println!("  {} = {}", name, text),
                FormValue::File(file) => {
                    println!("  {} = <{}, {} bytes>", name, file.name(), file.len())
                }
            }
        }
        return Ok(());
    }

    let client = PlaylistClient::new(config.api().clone())?;
    let saved = editor.save(&client).await?;
    println!("Saved playlist {} ({})", saved.id, saved.name);
    Ok(())
}
