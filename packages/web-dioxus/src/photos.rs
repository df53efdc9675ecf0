//! Turning picked image files into data URLs for previews.
//!
//! Photos never leave the browser; the data URL is the stored image.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use dioxus::html::FileEngine;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("{0} is not a supported image type")]
    UnsupportedType(String),

    #[error("Could not read {0}")]
    Unreadable(String),
}

fn mime_type(file_name: &str) -> Result<&'static str, PhotoError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        "heic" => Ok("image/heic"),
        _ => Err(PhotoError::UnsupportedType(file_name.to_string())),
    }
}

pub fn to_data_url(file_name: &str, bytes: &[u8]) -> Result<String, PhotoError> {
    let mime = mime_type(file_name)?;
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Read at most `limit` of the picked files.
pub async fn read_photos(
    engine: Arc<dyn FileEngine>,
    limit: usize,
) -> Vec<Result<String, PhotoError>> {
    let mut photos = Vec::new();
    for name in engine.files().into_iter().take(limit) {
        let photo = match engine.read_file(&name).await {
            Some(bytes) => to_data_url(&name, &bytes),
            None => Err(PhotoError::Unreadable(name)),
        };
        photos.push(photo);
    }
    photos
}
