//! Tests for playlist editing sessions against a recording API.

use async_trait::async_trait;
use marquee::{
    EditPlan, HttpError, LayoutCap, LayoutCaps, LibraryMedia, MarqueeResult, MediaPage,
    PlaylistApi, PlaylistDetail, PlaylistEditor, PlaylistMeta, PlaylistSummary, SavedSlide,
    SlideErrorKind, SlideForm, UploadFile,
};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Create(SlideForm),
    Update(i64, SlideForm),
}

/// Serves one saved playlist and records every save.
#[derive(Default)]
struct RecordingApi {
    saved: Option<PlaylistDetail>,
    calls: Mutex<Vec<Call>>,
    fail_saves: bool,
}

impl RecordingApi {
    fn with_playlist(detail: PlaylistDetail) -> Self {
        Self {
            saved: Some(detail),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaylistApi for RecordingApi {
    async fn create_playlist(&self, form: SlideForm) -> MarqueeResult<PlaylistSummary> {
        if self.fail_saves {
            return Err(HttpError::with_status(500, "boom").into());
        }
        let name = form.text("name").unwrap_or_default().to_string();
        self.calls.lock().unwrap().push(Call::Create(form));
        Ok(PlaylistSummary { id: 77, name })
    }

    async fn update_playlist(&self, id: i64, form: SlideForm) -> MarqueeResult<PlaylistSummary> {
        if self.fail_saves {
            return Err(HttpError::with_status(500, "boom").into());
        }
        let name = form.text("name").unwrap_or_default().to_string();
        self.calls.lock().unwrap().push(Call::Update(id, form));
        Ok(PlaylistSummary { id, name })
    }

    async fn fetch_playlist(&self, id: i64) -> MarqueeResult<PlaylistDetail> {
        self.saved
            .clone()
            .filter(|detail| *detail.id() == id)
            .ok_or_else(|| HttpError::with_status(404, "Playlist not found").into())
    }

    async fn list_media(&self, _page: u32) -> MarqueeResult<MediaPage> {
        Err(HttpError::new("not served").into())
    }
}

fn jpeg(name: &str) -> UploadFile {
    UploadFile::new(name, "image/jpeg", vec![0xff, 0xd8, 0xff])
}

fn media(id: i64) -> LibraryMedia {
    LibraryMedia::new(id, format!("https://cdn.test/{}.jpg", id))
}

fn saved_quad() -> PlaylistDetail {
    PlaylistDetail::new(
        5,
        "Menu",
        2,
        vec![
            SavedSlide { index: 1, media: "https://cdn.test/2.jpg".into(), media_id: 2 },
            SavedSlide { index: 0, media: "https://cdn.test/1.jpg".into(), media_id: 1 },
            SavedSlide { index: 2, media: "https://cdn.test/3.jpg".into(), media_id: 3 },
        ],
    )
}

#[tokio::test]
async fn test_create_saves_new_playlist() {
    let api = RecordingApi::default();
    let mut editor = PlaylistEditor::create(PlaylistMeta::new("Lobby", 1), LayoutCaps::default());

    let summary = editor.apply(EditPlan {
        uploads: vec![jpeg("a.jpg"), jpeg("b.jpg"), jpeg("c.jpg")],
        ..EditPlan::default()
    });
    assert_eq!(summary.discarded_uploads, 1);
    assert_eq!(editor.slides().max(), LayoutCap::exact(2));

    let saved = editor.save(&api).await.unwrap();
    assert_eq!(saved.id, 77);
    assert_eq!(editor.playlist_id(), Some(77));

    match &api.calls()[..] {
        [Call::Create(form)] => {
            assert_eq!(form.text("name"), Some("Lobby"));
            assert_eq!(form.slide_number(), Some(2));
            assert_eq!(form.file("slides[1][media]").map(|f| f.name()), Some("b.jpg"));
        }
        other => panic!("unexpected calls {:?}", other),
    }

    // A second save updates the playlist just created.
    editor.save(&api).await.unwrap();
    assert!(matches!(api.calls().last(), Some(Call::Update(77, _))));
}

#[tokio::test]
async fn test_open_hydrates_in_saved_order() {
    let api = RecordingApi::with_playlist(saved_quad());
    let editor = PlaylistEditor::open(&api, 5, LayoutCaps::default())
        .await
        .unwrap();

    assert_eq!(editor.playlist_id(), Some(5));
    assert_eq!(editor.meta(), &PlaylistMeta::new("Menu", 2));
    assert_eq!(editor.slides().library_ids(), vec![1, 2, 3]);
    assert_eq!(editor.selection(), &[media(1), media(2), media(3)]);
    assert_eq!(editor.slides().remaining(), Some(1));
}

#[tokio::test]
async fn test_open_missing_playlist_fails() {
    let api = RecordingApi::default();
    assert!(PlaylistEditor::open(&api, 5, LayoutCaps::default()).await.is_err());
}

#[tokio::test]
async fn test_deleted_library_slide_stays_deselected() {
    let api = RecordingApi::with_playlist(saved_quad());
    let mut editor = PlaylistEditor::open(&api, 5, LayoutCaps::default())
        .await
        .unwrap();

    let summary = editor.apply(EditPlan {
        deletes: vec![0, 2],
        media: vec![media(9)],
        ..EditPlan::default()
    });

    assert!(summary.warnings.is_empty());
    assert_eq!(editor.slides().library_ids(), vec![2, 9]);
    assert_eq!(editor.selection(), &[media(2), media(9)]);

    // A later merge does not bring deleted media back.
    editor.apply(EditPlan::default());
    assert_eq!(editor.slides().library_ids(), vec![2, 9]);
}

#[tokio::test]
async fn test_apply_collects_warnings_and_moves() {
    let mut editor = PlaylistEditor::create(PlaylistMeta::new("Wall", 3), LayoutCaps::default());

    let summary = editor.apply(EditPlan {
        deletes: vec![4],
        uploads: vec![jpeg("a.jpg"), UploadFile::new("clip.mp4", "video/mp4", vec![0])],
        media: vec![media(1)],
        moves: vec![(1, 0), (7, 0)],
        ..EditPlan::default()
    });

    let kinds: Vec<_> = summary.warnings.iter().map(|w| w.kind().clone()).collect();
    assert_eq!(kinds.len(), 3);
    assert!(matches!(kinds[0], SlideErrorKind::IndexOutOfRange { index: 4, len: 0 }));
    assert!(matches!(kinds[1], SlideErrorKind::InvalidImage { .. }));
    assert!(matches!(kinds[2], SlideErrorKind::IndexOutOfRange { index: 7, len: 2 }));

    assert_eq!(editor.slides().items()[0].media_id(), Some(1));
    assert_eq!(editor.slides().items()[1].file().map(|f| f.name()), Some("a.jpg"));
}

#[tokio::test]
async fn test_layout_change_truncates_and_deselects() {
    let api = RecordingApi::with_playlist(saved_quad());
    let mut editor = PlaylistEditor::open(&api, 5, LayoutCaps::default())
        .await
        .unwrap();

    editor.apply(EditPlan {
        name: Some("Menu v2".into()),
        layout: Some(1),
        ..EditPlan::default()
    });

    assert_eq!(editor.meta(), &PlaylistMeta::new("Menu v2", 1));
    assert_eq!(editor.slides().library_ids(), vec![1, 2]);
    assert_eq!(editor.selection(), &[media(1), media(2)]);

    editor.save(&api).await.unwrap();
    match api.calls().last() {
        Some(Call::Update(5, form)) => {
            assert_eq!(form.text("style_id"), Some("1"));
            assert_eq!(form.text("slides[1][media_id]"), Some("2"));
            assert_eq!(form.slide_number(), Some(2));
        }
        other => panic!("unexpected call {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_save_leaves_session_intact() {
    let api = RecordingApi {
        fail_saves: true,
        ..RecordingApi::default()
    };
    let mut editor = PlaylistEditor::create(PlaylistMeta::new("Lobby", 2), LayoutCaps::default());
    editor.apply(EditPlan {
        uploads: vec![jpeg("a.jpg")],
        media: vec![media(3)],
        ..EditPlan::default()
    });
    let before = editor.form();

    assert!(editor.save(&api).await.is_err());
    assert_eq!(editor.playlist_id(), None);
    assert_eq!(editor.form(), before);
    assert_eq!(editor.slides().previews().outstanding(), 1);
}

#[tokio::test]
async fn test_replace_deselects_library_media() {
    let api = RecordingApi::with_playlist(saved_quad());
    let mut editor = PlaylistEditor::open(&api, 5, LayoutCaps::default())
        .await
        .unwrap();

    editor.replace(1, jpeg("new.jpg")).unwrap();
    assert_eq!(editor.selection(), &[media(1), media(3)]);
    assert_eq!(editor.library_positions(), vec![(0, 1), (2, 3)]);

    assert!(editor.replace(9, jpeg("x.jpg")).is_err());
}

#[tokio::test]
async fn test_deletes_use_loaded_indexes_before_layout_shrinks() {
    let api = RecordingApi::with_playlist(saved_quad());
    let mut editor = PlaylistEditor::open(&api, 5, LayoutCaps::default())
        .await
        .unwrap();

    let summary = editor.apply(EditPlan {
        layout: Some(1),
        deletes: vec![0],
        ..EditPlan::default()
    });

    assert!(summary.warnings.is_empty());
    assert_eq!(editor.slides().library_ids(), vec![2, 3]);
    assert_eq!(editor.selection(), &[media(2), media(3)]);

    let summary = editor.apply(EditPlan {
        deletes: vec![2],
        ..EditPlan::default()
    });
    assert!(matches!(
        summary.warnings[0].kind(),
        SlideErrorKind::IndexOutOfRange { index: 2, len: 2 }
    ));
}
