//! The slide collection being edited.

use crate::validation::{check_image_file, check_image_url};
use crate::{LayoutCap, PreviewHandle, PreviewRegistry, SlideForm, SlideItem};
use marquee_core::{LibraryMedia, PlaylistMeta, SavedSlide, UploadFile};
use marquee_error::{SlideError, SlideErrorKind};
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// Outcome of [`SlideCollection::add_uploads`].
#[derive(Debug, Default)]
pub struct AddReport {
    /// Uploads appended and still present after the cap was applied
    pub added: usize,
    /// Files that failed image validation, for the caller to warn about
    pub rejected: Vec<SlideError>,
    /// Valid uploads discarded because the layout cap was reached
    pub discarded: usize,
}

/// Outcome of [`SlideCollection::merge_library`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Library ids removed because they are no longer selected
    pub removed: Vec<i64>,
    /// Library ids appended
    pub added: Vec<i64>,
}

impl MergeReport {
    /// Whether the merge left the collection untouched.
    pub fn is_unchanged(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Ordered slides of one interactive playlist, capped by its layout.
///
/// The collection owns the preview handles of its uploads and releases them
/// when slides leave it, and all remaining ones when it is dropped. After any
/// mutation the collection holds at most [`max`](Self::max) slides and no two
/// library slides share a media id.
///
/// # Example
///
/// ```
/// use marquee_core::UploadFile;
/// use marquee_slides::{LayoutCap, SlideCollection};
///
/// let mut slides = SlideCollection::new(LayoutCap::exact(4));
/// let uploads: Vec<_> = (0..5)
///     .map(|i| UploadFile::new(format!("{}.jpg", i), "image/jpeg", vec![i as u8]))
///     .collect();
///
/// let report = slides.add_uploads(uploads);
/// assert_eq!(slides.len(), 4);
/// assert_eq!(report.discarded, 1);
/// ```
#[derive(Debug)]
pub struct SlideCollection {
    items: Vec<SlideItem>,
    cap: LayoutCap,
    previews: PreviewRegistry,
}

impl SlideCollection {
    /// Empty collection under `cap`.
    pub fn new(cap: LayoutCap) -> Self {
        Self::with_previews(cap, PreviewRegistry::new())
    }

    /// Empty collection using a caller-supplied preview registry.
    pub fn with_previews(cap: LayoutCap, previews: PreviewRegistry) -> Self {
        debug!(cap = %cap, "Creating slide collection");
        Self {
            items: Vec::new(),
            cap,
            previews,
        }
    }

    /// Slides in order.
    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no slides.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Active cap.
    pub fn max(&self) -> LayoutCap {
        self.cap
    }

    /// Free slots under the cap; `None` when unbounded.
    pub fn remaining(&self) -> Option<usize> {
        self.cap.remaining(self.items.len())
    }

    /// Whether the layout's required slide count is met.
    pub fn is_complete(&self) -> bool {
        self.remaining().is_none_or(|left| left == 0)
    }

    /// Media ids of library slides, in slide order.
    pub fn library_ids(&self) -> Vec<i64> {
        self.items.iter().filter_map(SlideItem::media_id).collect()
    }

    /// Preview registry, for inspecting outstanding handles.
    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    /// Switch to another layout's cap, dropping slides beyond it.
    #[instrument(skip(self), fields(len = self.items.len()))]
    pub fn set_cap(&mut self, cap: LayoutCap) {
        self.cap = cap;
        self.truncate_to_cap();
    }

    /// Append uploads, skipping files that are not acceptable images.
    ///
    /// Each accepted file gets a preview. If the cap is exceeded, the newest
    /// slides beyond it are discarded.
    #[instrument(skip(self, files), fields(len = self.items.len()))]
    pub fn add_uploads(&mut self, files: impl IntoIterator<Item = UploadFile>) -> AddReport {
        let mut report = AddReport::default();
        let before = self.items.len();

        for file in files {
            if let Err(reason) = check_image_file(&file) {
                warn!(name = file.name(), %reason, "Skipping invalid upload");
                report.rejected.push(SlideError::new(SlideErrorKind::InvalidImage {
                    name: file.name().to_string(),
                    reason,
                }));
                continue;
            }
            let preview = self.previews.acquire(&file);
            self.items.push(SlideItem::upload(file, preview));
        }

        let appended = self.items.len() - before;
        report.discarded = self.truncate_to_cap().min(appended);
        report.added = appended - report.discarded;
        debug!(
            added = report.added,
            rejected = report.rejected.len(),
            discarded = report.discarded,
            "Added uploads"
        );
        report
    }

    /// Make the library slides match the current library selection.
    ///
    /// Library slides no longer selected are removed. Newly selected media
    /// that are valid images are appended while there is room. Uploads keep
    /// their positions relative to each other. Calling this again with the
    /// same selection changes nothing.
    #[instrument(skip(self, selected), fields(len = self.items.len(), selected = selected.len()))]
    pub fn merge_library(&mut self, selected: &[LibraryMedia]) -> MergeReport {
        let selected_ids: HashSet<i64> = selected.iter().map(|m| m.id).collect();
        let mut report = MergeReport::default();

        self.items.retain(|item| match item.media_id() {
            Some(id) if !selected_ids.contains(&id) => {
                report.removed.push(id);
                false
            }
            _ => true,
        });

        let mut present: HashSet<i64> = self.library_ids().into_iter().collect();
        for media in selected {
            if present.contains(&media.id) {
                continue;
            }
            if let Err(reason) = check_image_url(&media.url) {
                debug!(media_id = media.id, %reason, "Skipping non-image library media");
                continue;
            }
            if !self.cap.has_room(self.items.len()) {
                debug!(media_id = media.id, "Layout cap reached; skipping library media");
                continue;
            }
            self.items.push(SlideItem::library(media));
            present.insert(media.id);
            report.added.push(media.id);
        }

        debug!(
            removed = report.removed.len(),
            added = report.added.len(),
            "Merged library selection"
        );
        report
    }

    /// Replace the slide at `index` with an upload.
    ///
    /// Returns the media id of the replaced slide if it came from the library,
    /// so the caller can deselect it in the media picker.
    ///
    /// # Errors
    ///
    /// Fails without touching the collection if `index` is out of range or
    /// `file` is not an acceptable image.
    #[instrument(skip(self, file), fields(name = file.name()))]
    pub fn replace_at(&mut self, index: usize, file: UploadFile) -> Result<Option<i64>, SlideError> {
        self.check_index(index)?;
        check_image_file(&file).map_err(|reason| {
            SlideError::new(SlideErrorKind::InvalidImage {
                name: file.name().to_string(),
                reason,
            })
        })?;

        let preview = self.previews.acquire(&file);
        let old = std::mem::replace(&mut self.items[index], SlideItem::upload(file, preview));
        self.release_item(&old);
        debug!(index, replaced = %old.kind(), "Replaced slide");
        Ok(old.media_id())
    }

    /// Remove the slide at `index`.
    ///
    /// Returns the media id of the removed slide if it came from the library.
    ///
    /// # Errors
    ///
    /// Fails without touching the collection if `index` is out of range.
    #[instrument(skip(self))]
    pub fn delete_at(&mut self, index: usize) -> Result<Option<i64>, SlideError> {
        self.check_index(index)?;
        let old = self.items.remove(index);
        self.release_item(&old);
        debug!(index, removed = %old.kind(), "Deleted slide");
        Ok(old.media_id())
    }

    /// Replace the whole sequence, e.g. after drag-and-drop.
    ///
    /// Later duplicates of a library media id or of an upload are dropped, as
    /// are uploads whose preview this collection no longer holds (a stale
    /// clone, or a slide from another collection). Then the cap is applied.
    /// Uploads that no longer appear have their previews released.
    #[instrument(skip(self, new_sequence), fields(len = self.items.len(), new_len = new_sequence.len()))]
    pub fn reorder(&mut self, new_sequence: Vec<SlideItem>) {
        let mut seen_media = HashSet::new();
        let mut seen_previews = HashSet::new();
        let mut items: Vec<SlideItem> = new_sequence
            .into_iter()
            .filter(|item| match (item.media_id(), item.preview()) {
                (Some(id), _) => seen_media.insert(id),
                (None, Some(preview)) if !self.previews.contains(preview) => {
                    warn!(handle = %preview, "Dropping upload whose preview is not held here");
                    false
                }
                (None, Some(preview)) => seen_previews.insert(preview.clone()),
                (None, None) => true,
            })
            .collect();

        match self.cap.limit() {
            Some(max) if items.len() > max => {
                warn!(max, dropped = items.len() - max, "Reordered sequence exceeds layout cap");
                items.truncate(max);
            }
            _ => {}
        }

        let kept: HashSet<&PreviewHandle> = items.iter().filter_map(SlideItem::preview).collect();
        let stale: Vec<PreviewHandle> = self
            .items
            .iter()
            .filter_map(SlideItem::preview)
            .filter(|handle| !kept.contains(handle))
            .cloned()
            .collect();
        for handle in &stale {
            self.previews.release(handle);
        }

        self.items = items;
        debug!(len = self.items.len(), released = stale.len(), "Reordered slides");
    }

    /// Move one slide from `from` to `to`, shifting the slides in between.
    ///
    /// # Errors
    ///
    /// Fails without touching the collection if either index is out of range.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), SlideError> {
        self.check_index(from)?;
        self.check_index(to)?;
        let mut sequence = self.items.clone();
        let item = sequence.remove(from);
        sequence.insert(to, item);
        self.reorder(sequence);
        Ok(())
    }

    /// Load the slides of a saved playlist, replacing the current sequence.
    ///
    /// Slides whose media is not an image are skipped; the rest are ordered by
    /// their saved index. Returns the number of slides loaded.
    #[instrument(skip(self, saved), fields(saved = saved.len()))]
    pub fn hydrate(&mut self, saved: &[SavedSlide]) -> usize {
        let mut slides: Vec<&SavedSlide> = saved
            .iter()
            .filter(|slide| check_image_url(&slide.media).is_ok())
            .collect();
        slides.sort_by_key(|slide| slide.index);

        let sequence = slides
            .into_iter()
            .map(|slide| SlideItem::library(&LibraryMedia::new(slide.media_id, slide.media.clone())))
            .collect();
        self.reorder(sequence);
        debug!(loaded = self.items.len(), "Hydrated saved slides");
        self.items.len()
    }

    /// Multipart body for saving the current slides.
    pub fn to_form_data(&self, meta: &PlaylistMeta) -> SlideForm {
        SlideForm::from_slides(meta, &self.items)
    }

    fn check_index(&self, index: usize) -> Result<(), SlideError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(SlideError::new(SlideErrorKind::IndexOutOfRange {
                index,
                len: self.items.len(),
            }))
        }
    }

    fn release_item(&mut self, item: &SlideItem) {
        if let Some(handle) = item.preview() {
            self.previews.release(handle);
        }
    }

    /// Drop slides beyond the cap, returning how many were dropped.
    fn truncate_to_cap(&mut self) -> usize {
        let Some(max) = self.cap.limit() else {
            return 0;
        };
        if self.items.len() <= max {
            return 0;
        }
        let dropped: Vec<SlideItem> = self.items.drain(max..).collect();
        for item in &dropped {
            self.release_item(item);
        }
        warn!(max, dropped = dropped.len(), "Layout cap reached; dropped newest slides");
        dropped.len()
    }
}

impl Drop for SlideCollection {
    fn drop(&mut self) {
        let released = self.previews.release_all();
        debug!(released, "Slide collection closed");
    }
}
