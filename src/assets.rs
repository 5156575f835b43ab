//! Static image assets.
//!
//! Images are read from the assets directory at runtime and inlined as
//! base64 data URIs, so the webview never needs file access.

use std::path::{Path, PathBuf};

use base64::Engine;
use bizcard_core::{CardError, Result};

/// Read-only view of the assets directory
#[derive(Clone, Debug, PartialEq)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Load `relative` as a data URI.
    pub fn data_uri(&self, relative: &str) -> Result<String> {
        let path = self.root.join(relative);
        let bytes = std::fs::read(&path).map_err(|source| CardError::Asset {
            path: path.clone(),
            source,
        })?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(format!("data:{};base64,{}", mime_for(relative), encoded))
    }

    /// Like [`AssetStore::data_uri`], logging and discarding the error.
    pub fn try_data_uri(&self, relative: &str) -> Option<String> {
        match self.data_uri(relative) {
            Ok(uri) => Some(uri),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }
}

fn mime_for(relative: &str) -> &'static str {
    let ext = Path::new(relative)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}
