//! Multipart body of a playlist save.

use crate::{SlideItem, SlideSource};
use marquee_core::{PlaylistMeta, UploadFile};

/// Value of one multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Plain text field
    Text(String),
    /// File part
    File(UploadFile),
}

impl FormValue {
    /// Text content, if this is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::File(_) => None,
        }
    }
}

/// Ordered multipart fields for creating or updating a playlist.
///
/// Layout of the body:
///
/// ```text
/// name            = <playlist name>
/// style_id        = <layout id>
/// slide_number    = <N>
/// slides[i][index]    = i                    for i in 0..N
/// slides[i][media_id] = <library asset id>   library slides
/// slides[i][media]    = <file part>          upload slides
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideForm {
    fields: Vec<(String, FormValue)>,
}

impl SlideForm {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize `slides` in order under the playlist metadata.
    pub fn from_slides(meta: &PlaylistMeta, slides: &[SlideItem]) -> Self {
        let mut form = Self::new();
        form.push_text("name", meta.name.clone());
        form.push_text("style_id", meta.style_id.to_string());
        form.push_text("slide_number", slides.len().to_string());

        for (i, slide) in slides.iter().enumerate() {
            form.push_text(format!("slides[{}][index]", i), i.to_string());
            match slide.source() {
                SlideSource::Library { media_id } => {
                    form.push_text(format!("slides[{}][media_id]", i), media_id.to_string());
                }
                SlideSource::Upload { file, .. } => {
                    form.push_file(format!("slides[{}][media]", i), file.clone());
                }
            }
        }
        form
    }

    /// Append a text field.
    pub fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), FormValue::Text(value.into())));
    }

    /// Append a file part.
    pub fn push_file(&mut self, name: impl Into<String>, file: UploadFile) {
        self.fields.push((name.into(), FormValue::File(file)));
    }

    /// Add a `_method` field for transports that only post multipart bodies.
    pub fn with_method_override(mut self, method: &str) -> Self {
        self.push_text("_method", method.to_ascii_uppercase());
        self
    }

    /// All fields in order.
    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }

    /// Consume the form, yielding its fields.
    pub fn into_fields(self) -> Vec<(String, FormValue)> {
        self.fields
    }

    /// First value of a text field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .and_then(|(_, value)| value.as_text())
    }

    /// First file attached under `name`.
    pub fn file(&self, name: &str) -> Option<&UploadFile> {
        self.fields.iter().find_map(|(field, value)| match value {
            FormValue::File(file) if field == name => Some(file),
            _ => None,
        })
    }

    /// Declared slide count.
    pub fn slide_number(&self) -> Option<usize> {
        self.text("slide_number")?.parse().ok()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
