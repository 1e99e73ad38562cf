//! Decoding of images submitted as base64 data URLs.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Upper bound on the decoded image size.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// An image decoded from a data URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    /// File extension taken from the MIME subtype, lowercase.
    pub extension: String,
    pub bytes: Vec<u8>,
}

/// Decodes `data:<type>/<subtype>;base64,<payload>`.
///
/// The payload must be standard padded base64. The extension is derived from the
/// subtype (`jpeg` becomes `jpg`) and restricted to short alphanumeric values so
/// it can be used in a file name.
///
/// # Returns
/// - `Ok(DecodedImage)` - Decoded bytes and extension
/// - `Err(&'static str)` - Human readable reason, used as the field error message
pub fn decode_data_url(value: &str) -> Result<DecodedImage, &'static str> {
    const INVALID: &str = "Invalid image. Expected a base64 encoded data URL.";

    let Some(rest) = value.strip_prefix("data:") else {
        return Err(INVALID);
    };
    let Some((mime, payload)) = rest.split_once(";base64,") else {
        return Err(INVALID);
    };
    let Some((kind, subtype)) = mime.split_once('/') else {
        return Err(INVALID);
    };

    if kind != "image" {
        return Err("Uploaded file is not an image.");
    }

    let subtype = subtype.to_ascii_lowercase();
    if subtype.is_empty()
        || subtype.len() > 10
        || !subtype.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(INVALID);
    }

    if payload.is_empty() || payload.len() % 4 != 0 {
        return Err(INVALID);
    }

    let bytes = BASE64.decode(payload).map_err(|_| INVALID)?;
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err("Image is too large.");
    }

    let extension = match subtype.as_str() {
        "jpeg" => "jpg".to_string(),
        other => other.to_string(),
    };

    Ok(DecodedImage { extension, bytes })
}
