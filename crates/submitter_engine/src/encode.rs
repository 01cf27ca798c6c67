use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::types::{EncodeError, EncodedResume};

/// Declared when the picker gave no type and the extension is unknown.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Reads the whole file and produces the base64 payload plus the media type
/// to declare: the caller's, or a guess from the extension.
pub async fn read_and_encode(
    path: &Path,
    declared_media_type: Option<&str>,
) -> Result<EncodedResume, EncodeError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| EncodeError::Read {
            path: path.display().to_string(),
            source,
        })?;
    let media_type = declared_media_type
        .map(str::to_string)
        .unwrap_or_else(|| media_type_for_path(path).to_string());
    Ok(EncodedResume {
        content_base64: STANDARD.encode(&bytes),
        media_type,
    })
}

/// Extension-based guess, covering the formats the analysis endpoint can
/// extract text from.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("txt") | Some("md") => "text/plain",
        _ => FALLBACK_MEDIA_TYPE,
    }
}
