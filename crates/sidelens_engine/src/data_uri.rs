use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::types::ClientError;

/// Reads `path` and encodes it as a `data:` URI suitable for a JSON payload.
pub async fn read_as_data_uri(path: &Path) -> Result<String, ClientError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|err| ClientError::ImageRead {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
    Ok(format!(
        "data:{};base64,{}",
        mime_for_path(path),
        BASE64.encode(bytes)
    ))
}

/// Mime type from the file extension; unknown extensions ship as image/png,
/// matching what the backend assumes for decoded uploads.
fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "image/png",
    }
}
