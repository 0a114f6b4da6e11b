//! Read-only command handlers: layouts, file checks, library listing.

use marquee::{LayoutCaps, MarqueeConfig, MarqueeResult, PlaylistApi, PlaylistClient, validation};
use std::path::PathBuf;

/// Print the layout table.
pub fn show_layouts(caps: &LayoutCaps) {
    println!("Layouts:");
    println!("{:-<40}", "");
    for entry in caps.entries() {
        println!("  {:>4}  {} slides", entry.id, entry.slides);
    }
    println!("  other {}", caps.resolve(None));
}

/// Report whether each file would be accepted as a slide image.
///
/// Returns the number of rejected files.
pub fn check_files(files: &[PathBuf]) -> usize {
    let mut rejected = 0;
    for path in files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime = validation::mime_for_path(path).unwrap_or_default();
        match validation::check_image_name(&name, mime) {
            Ok(()) => println!("ok       {}", path.display()),
            Err(reason) => {
                rejected += 1;
                println!("rejected {} ({})", path.display(), reason);
            }
        }
    }
    rejected
}

/// List one page of library images.
pub async fn list_media(config: &MarqueeConfig, page: u32) -> MarqueeResult<()> {
    let client = PlaylistClient::new(config.api().clone())?;
    let listing = client.list_media(page).await?;

    println!(
        "Media page {} of {} ({} total):",
        listing.current_page(),
        listing.last_page(),
        listing.total()
    );
    println!("{:-<80}", "");
    for media in listing.data() {
        println!("{:>8}  {}", media.id, media.url);
    }
    if listing.has_next() {
        println!("Next: marquee media --page {}", listing.current_page() + 1);
    }
    Ok(())
}
