//! Image acceptability checks for slide candidates.
//!
//! Slides are still images only. Files are judged by extension and declared
//! content type; URLs by extension alone. Icons and video formats are always
//! rejected, even when the content type claims otherwise.

use marquee_core::UploadFile;
use marquee_error::ImageRejection;
use std::path::Path;

/// Content types accepted for uploaded slides.
pub const ACCEPTED_MIME_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// File-picker filter string matching [`ACCEPTED_MIME_TYPES`].
pub const ACCEPT_FILTER: &str = "image/jpeg, image/jpg, image/png, image/webp";

const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

const DISALLOWED_EXTENSIONS: [&str; 1] = ["ico"];

const VIDEO_EXTENSIONS: [&str; 7] = ["mp4", "webm", "mov", "m4v", "avi", "mkv", "3gp"];

/// Lowercased extension of the last path segment, if it has one.
fn extension(name: &str) -> Option<String> {
    let segment = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let (_, ext) = segment.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Rejections that apply to files and URLs alike.
fn check_rejected_extension(ext: Option<&str>) -> Result<(), ImageRejection> {
    match ext {
        Some(ext) if DISALLOWED_EXTENSIONS.contains(&ext) => Err(ImageRejection::Disallowed),
        Some(ext) if VIDEO_EXTENSIONS.contains(&ext) => Err(ImageRejection::Video),
        _ => Ok(()),
    }
}

fn check_extension(name: &str) -> Result<(), ImageRejection> {
    let ext = extension(name);
    check_rejected_extension(ext.as_deref())?;
    match ext {
        Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(ImageRejection::UnsupportedExtension),
    }
}

/// Check a file name and declared content type.
///
/// An empty content type is accepted when the extension already matched.
///
/// # Examples
///
/// ```
/// use marquee_slides::validation::check_image_name;
/// use marquee_slides::ImageRejection;
///
/// assert_eq!(check_image_name("photo.webp", "image/webp"), Ok(()));
/// assert_eq!(check_image_name("photo.PNG", ""), Ok(()));
/// assert_eq!(check_image_name("photo.ico", ""), Err(ImageRejection::Disallowed));
/// assert_eq!(check_image_name("photo.png", "image/gif"), Err(ImageRejection::UnsupportedMime));
/// ```
pub fn check_image_name(name: &str, content_type: &str) -> Result<(), ImageRejection> {
    check_extension(name)?;

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if mime.is_empty() || ACCEPTED_MIME_TYPES.contains(&mime.as_str()) {
        Ok(())
    } else {
        Err(ImageRejection::UnsupportedMime)
    }
}

/// Check an upload, reporting why it was rejected.
pub fn check_image_file(file: &UploadFile) -> Result<(), ImageRejection> {
    check_image_name(file.name(), file.content_type())
}

/// Check a remote URL or bare filename. Query strings and fragments are ignored.
///
/// Library URLs often carry no extension, so only icons and video formats
/// are rejected here; the server vouches for the rest.
///
/// ```
/// use marquee_slides::validation::check_image_url;
/// use marquee_slides::ImageRejection;
///
/// assert_eq!(check_image_url("https://cdn.test/a.jpg?v=2"), Ok(()));
/// assert_eq!(check_image_url("https://cdn.test/media/42"), Ok(()));
/// assert_eq!(check_image_url("https://cdn.test/clip.MP4"), Err(ImageRejection::Video));
/// ```
pub fn check_image_url(url: &str) -> Result<(), ImageRejection> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    check_rejected_extension(extension(path).as_deref())
}

/// Whether `file` is an acceptable slide image.
pub fn is_valid_image_file(file: &UploadFile) -> bool {
    check_image_file(file).is_ok()
}

/// Whether `url` points at an acceptable slide image.
pub fn is_valid_image_url(url: &str) -> bool {
    check_image_url(url).is_ok()
}

/// Content type for an accepted image path, inferred from its extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content_type: &str) -> UploadFile {
        UploadFile::new(name, content_type, vec![0u8; 8])
    }

    #[test]
    fn rejects_icon_without_mime() {
        assert!(!is_valid_image_file(&file("photo.ico", "")));
    }

    #[test]
    fn accepts_webp_with_mime() {
        assert!(is_valid_image_file(&file("photo.webp", "image/webp")));
    }

    #[test]
    fn rejects_video_even_with_video_mime() {
        assert!(!is_valid_image_file(&file("clip.mp4", "video/mp4")));
        assert_eq!(
            check_image_file(&file("clip.mp4", "video/mp4")),
            Err(ImageRejection::Video)
        );
    }

    #[test]
    fn rejects_video_extensions_regardless_of_declared_type() {
        for ext in VIDEO_EXTENSIONS {
            let name = format!("clip.{}", ext);
            assert!(!is_valid_image_file(&file(&name, "image/png")), "{}", name);
        }
    }

    #[test]
    fn accepts_every_image_extension_case_insensitively() {
        for name in ["a.jpg", "b.JPEG", "c.Png", "d.webp"] {
            assert!(is_valid_image_file(&file(name, "")), "{}", name);
        }
    }

    #[test]
    fn accepts_jpg_alias_and_parameters() {
        assert!(is_valid_image_file(&file("a.jpg", "image/jpg")));
        assert!(is_valid_image_file(&file("a.jpg", "IMAGE/JPEG; q=0.9")));
    }

    #[test]
    fn rejects_mismatched_mime() {
        assert!(!is_valid_image_file(&file("a.png", "application/pdf")));
    }

    #[test]
    fn rejects_missing_or_unknown_extension() {
        assert_eq!(
            check_image_name("README", "image/png"),
            Err(ImageRejection::UnsupportedExtension)
        );
        assert_eq!(
            check_image_name("anim.gif", "image/gif"),
            Err(ImageRejection::UnsupportedExtension)
        );
        assert_eq!(
            check_image_name("trailing.", ""),
            Err(ImageRejection::UnsupportedExtension)
        );
    }

    #[test]
    fn url_checks_ignore_query_and_directories() {
        assert!(is_valid_image_url("https://cdn.test/media/7.webp"));
        assert!(is_valid_image_url("https://cdn.test/media/7.png#frag"));
        assert!(is_valid_image_url("u9"));
        assert!(!is_valid_image_url("https://cdn.test/clips.mp4/7.ico"));
        assert!(!is_valid_image_url("https://cdn.test/favicon.ico"));
        assert!(!is_valid_image_url("https://cdn.test/loop.webm?x=1"));
    }

    #[test]
    fn infers_mime_for_known_extensions() {
        assert_eq!(mime_for_path(Path::new("/tmp/a.JPG")), Some("image/jpeg"));
        assert_eq!(mime_for_path(Path::new("/tmp/a.webp")), Some("image/webp"));
        assert_eq!(mime_for_path(Path::new("/tmp/a.gif")), None);
        assert_eq!(mime_for_path(Path::new("/tmp/noext")), None);
    }

    #[test]
    fn accept_filter_lists_accepted_types() {
        assert_eq!(ACCEPT_FILTER, ACCEPTED_MIME_TYPES.join(", "));
    }
}
