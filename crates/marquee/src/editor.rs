//! Playlist editing sessions.

use marquee_client::PlaylistApi;
use marquee_core::{LibraryMedia, PlaylistMeta, PlaylistSummary, UploadFile};
use marquee_error::{MarqueeResult, SlideError};
use marquee_slides::{LayoutCaps, SlideCollection, SlideForm, SlideSource};
use tracing::{debug, info, instrument, warn};

/// Edits to apply to a playlist in one go.
///
/// Deletions run first (highest index first, so indexes refer to the slides
/// as they were loaded), then the layout change, then uploads, then newly
/// selected library media, then moves.
#[derive(Debug, Clone, Default)]
pub struct EditPlan {
    /// New playlist name
    pub name: Option<String>,
    /// New layout id
    pub layout: Option<u32>,
    /// Slide indexes to delete
    pub deletes: Vec<usize>,
    /// Files to upload as new slides
    pub uploads: Vec<UploadFile>,
    /// Library media to add to the selection
    pub media: Vec<LibraryMedia>,
    /// Slide moves as `(from, to)` pairs
    pub moves: Vec<(usize, usize)>,
}

/// What applying an [`EditPlan`] did, for reporting to the operator.
#[derive(Debug, Default)]
pub struct EditSummary {
    /// Problems that skipped part of the plan
    pub warnings: Vec<SlideError>,
    /// Valid uploads dropped because the layout was full
    pub discarded_uploads: usize,
}

/// One editing session over a new or saved playlist.
///
/// The session owns the slide collection and the library selection the
/// collection mirrors. Removing a library slide also deselects its media, so
/// the next merge does not bring it back.
#[derive(Debug)]
pub struct PlaylistEditor {
    playlist_id: Option<i64>,
    meta: PlaylistMeta,
    caps: LayoutCaps,
    selection: Vec<LibraryMedia>,
    slides: SlideCollection,
}

impl PlaylistEditor {
    /// Start a new, empty playlist.
    pub fn create(meta: PlaylistMeta, caps: LayoutCaps) -> Self {
        let slides = SlideCollection::new(caps.resolve(Some(meta.style_id)));
        Self {
            playlist_id: None,
            meta,
            caps,
            selection: Vec::new(),
            slides,
        }
    }

    /// Load a saved playlist for editing.
    ///
    /// # Errors
    ///
    /// Returns an error if the playlist cannot be fetched.
    #[instrument(skip(api, caps))]
    pub async fn open(api: &dyn PlaylistApi, id: i64, caps: LayoutCaps) -> MarqueeResult<Self> {
        let detail = api.fetch_playlist(id).await?;
        let mut editor = Self::create(detail.meta(), caps);
        editor.playlist_id = Some(*detail.id());
        editor.slides.hydrate(detail.slides());
        editor.selection = editor
            .slides
            .items()
            .iter()
            .filter_map(|item| item.media_id().map(|id| LibraryMedia::new(id, item.url())))
            .collect();
        info!(slides = editor.slides.len(), "Opened playlist");
        Ok(editor)
    }

    /// Id of the saved playlist, if editing one.
    pub fn playlist_id(&self) -> Option<i64> {
        self.playlist_id
    }

    /// Current name and layout.
    pub fn meta(&self) -> &PlaylistMeta {
        &self.meta
    }

    /// Library media currently selected.
    pub fn selection(&self) -> &[LibraryMedia] {
        &self.selection
    }

    /// Slides being edited.
    pub fn slides(&self) -> &SlideCollection {
        &self.slides
    }

    /// Apply a batch of edits.
    #[instrument(skip(self, plan), fields(deletes = plan.deletes.len(), uploads = plan.uploads.len(), media = plan.media.len()))]
    pub fn apply(&mut self, plan: EditPlan) -> EditSummary {
        let mut summary = EditSummary::default();

        if let Some(name) = plan.name {
            self.meta.name = name;
        }

        let mut deletes = plan.deletes;
        deletes.sort_unstable_by(|a, b| b.cmp(a));
        deletes.dedup();
        for index in deletes {
            match self.slides.delete_at(index) {
                Ok(Some(media_id)) => self.deselect(media_id),
                Ok(None) => {}
                Err(e) => {
                    warn!(index, "Cannot delete slide: {}", e.kind());
                    summary.warnings.push(e);
                }
            }
        }

        if let Some(layout) = plan.layout {
            self.meta.style_id = layout;
            self.slides.set_cap(self.caps.resolve(Some(layout)));
            self.sync_selection();
        }

        let report = self.slides.add_uploads(plan.uploads);
        summary.discarded_uploads = report.discarded;
        summary.warnings.extend(report.rejected);

        for media in plan.media {
            if !self.selection.iter().any(|m| m.id == media.id) {
                self.selection.push(media);
            }
        }
        self.slides.merge_library(&self.selection);
        self.sync_selection();

        for (from, to) in plan.moves {
            if let Err(e) = self.slides.move_item(from, to) {
                warn!(from, to, "Cannot move slide: {}", e.kind());
                summary.warnings.push(e);
            }
        }

        debug!(
            slides = self.slides.len(),
            warnings = summary.warnings.len(),
            "Applied edit plan"
        );
        summary
    }

    /// Replace one slide with an upload, deselecting a replaced library item.
    ///
    /// # Errors
    ///
    /// Fails without changes if the index or file is rejected.
    pub fn replace(&mut self, index: usize, file: UploadFile) -> Result<(), SlideError> {
        if let Some(media_id) = self.slides.replace_at(index, file)? {
            self.deselect(media_id);
        }
        Ok(())
    }

    /// Multipart body for the current state.
    pub fn form(&self) -> SlideForm {
        self.slides.to_form_data(&self.meta)
    }

    /// Save to the API, creating or updating as appropriate.
    ///
    /// On failure the session is unchanged and saving can be retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the API rejects or cannot receive the playlist.
    #[instrument(skip(self, api), fields(playlist_id = ?self.playlist_id, slides = self.slides.len()))]
    pub async fn save(&mut self, api: &dyn PlaylistApi) -> MarqueeResult<PlaylistSummary> {
        if let Some(left) = self.slides.remaining().filter(|left| *left > 0) {
            warn!(missing = left, "Saving before the layout is filled");
        }

        let summary = match self.playlist_id {
            Some(id) => api.update_playlist(id, self.form()).await?,
            None => api.create_playlist(self.form()).await?,
        };
        self.playlist_id = Some(summary.id);
        info!(id = summary.id, "Playlist saved");
        Ok(summary)
    }

    /// Library-backed slides as `(index, media_id)` pairs.
    pub fn library_positions(&self) -> Vec<(usize, i64)> {
        self.slides
            .items()
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match item.source() {
                SlideSource::Library { media_id } => Some((i, *media_id)),
                SlideSource::Upload { .. } => None,
            })
            .collect()
    }

    fn deselect(&mut self, media_id: i64) {
        self.selection.retain(|m| m.id != media_id);
    }

    /// Drop selected media the collection could not hold, so the selection
    /// shows what will actually be saved.
    fn sync_selection(&mut self) {
        let present = self.slides.library_ids();
        self.selection.retain(|m| present.contains(&m.id));
    }
}
