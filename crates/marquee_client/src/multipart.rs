//! Conversion of slide forms into `reqwest` multipart bodies.

use marquee_error::{HttpError, MarqueeResult};
use marquee_slides::{FormValue, SlideForm};
use reqwest::multipart::{Form, Part};

/// Build the multipart body for a slide form, preserving field order.
///
/// File parts carry the upload's name and, when known, its content type.
///
/// # Errors
///
/// Returns an error if an upload declares a malformed content type.
pub fn into_multipart(form: SlideForm) -> MarqueeResult<Form> {
    let mut multipart = Form::new();
    for (name, value) in form.into_fields() {
        multipart = match value {
            FormValue::Text(text) => multipart.text(name, text),
            FormValue::File(file) => {
                let mut part =
                    Part::bytes(file.bytes().to_vec()).file_name(file.name().to_string());
                if !file.content_type().is_empty() {
                    part = part.mime_str(file.content_type()).map_err(|e| {
                        HttpError::new(format!(
                            "Invalid content type '{}' for {}: {}",
                            file.content_type(),
                            file.name(),
                            e
                        ))
                    })?;
                }
                multipart.part(name, part)
            }
        };
    }
    Ok(multipart)
}
