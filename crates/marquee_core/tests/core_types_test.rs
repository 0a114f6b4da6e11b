use marquee_core::{LibraryMedia, MediaPage, MediaType, PlaylistDetail, UploadFile};
use std::io::Write;
use strum::IntoEnumIterator;

#[test]
fn media_type_round_trips_through_str() {
    for media_type in MediaType::iter() {
        let parsed: MediaType = media_type.as_str().parse().unwrap();
        assert_eq!(parsed, media_type);
        assert_eq!(media_type.to_string(), media_type.as_str());
    }
    assert!("audio".parse::<MediaType>().is_err());
}

#[test]
fn media_page_parses_paginated_listing() {
    let json = r#"{
        "data": [{"id": 1, "url": "https://cdn.test/1.png", "name": "ignored"}],
        "current_page": 1,
        "last_page": 3,
        "per_page": 15,
        "total": 31
    }"#;
    let page: MediaPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.data(), &vec![LibraryMedia::new(1, "https://cdn.test/1.png")]);
    assert_eq!(*page.total(), 31);
    assert!(page.has_next());
}

#[test]
fn media_page_defaults_to_single_page() {
    let page: MediaPage = serde_json::from_str(r#"{"data": []}"#).unwrap();
    assert_eq!(*page.current_page(), 1);
    assert!(!page.has_next());
}

#[test]
fn playlist_detail_parses_without_slides() {
    let detail: PlaylistDetail =
        serde_json::from_str(r#"{"id": 4, "name": "Lobby", "style_id": 2}"#).unwrap();
    assert!(detail.slides().is_empty());
    assert_eq!(detail.meta().style_id, 2);
    assert_eq!(detail.meta().name, "Lobby");
}

#[tokio::test]
async fn upload_reads_file_from_disk() {
    let mut tmp = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    tmp.write_all(b"not really a png").unwrap();

    let upload = UploadFile::from_path(tmp.path(), "image/png").await.unwrap();
    assert!(upload.name().ends_with(".png"));
    assert_eq!(upload.content_type(), "image/png");
    assert_eq!(upload.bytes(), b"not really a png");
}

#[tokio::test]
async fn upload_from_missing_path_fails() {
    let result = UploadFile::from_path("/definitely/not/here.png", "").await;
    assert!(result.is_err());
}
