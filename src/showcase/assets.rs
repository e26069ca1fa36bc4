//! Screenshot presence checks
//!
//! Assets are never opened or decoded; only their metadata is read.

use serde::Serialize;
use std::path::Path;

/// Whether a screenshot is on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AssetStatus {
    Present { bytes: u64 },
    Missing,
}

impl AssetStatus {
    pub fn is_present(&self) -> bool {
        matches!(self, AssetStatus::Present { .. })
    }
}

/// Check an asset path; anything that is not a readable file is missing
pub fn check_asset(path: &Path) -> AssetStatus {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => AssetStatus::Present { bytes: meta.len() },
        Ok(_) => {
            tracing::warn!(path = %path.display(), "Asset path is not a file");
            AssetStatus::Missing
        }
        Err(_) => AssetStatus::Missing,
    }
}
