//! Workflow card rendering

use crate::config::WorkflowEntry;
use crate::descriptor::{DescriptorError, Summary, export_artifact, summarize, try_load};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Download offered with a loaded card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Download {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: u64,
}

/// What a card shows once its descriptor has been looked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CardView {
    Loaded {
        title: String,
        description: String,
        summary: Summary,
        download: Download,
    },
    Missing {
        title: String,
        description: String,
        path: PathBuf,
    },
}

impl CardView {
    pub fn title(&self) -> &str {
        match self {
            CardView::Loaded { title, .. } | CardView::Missing { title, .. } => title,
        }
    }
}

/// Load the card's descriptor and build its view
///
/// A missing file yields `CardView::Missing`; unreadable or malformed files
/// are returned as errors so the caller can report them per card.
pub fn render_card(entry: &WorkflowEntry, base_dir: &Path) -> Result<CardView, DescriptorError> {
    let path = entry.resolve(base_dir);

    let missing = || CardView::Missing {
        title: entry.title.clone(),
        description: entry.description.clone(),
        path: path.clone(),
    };

    let Some(descriptor) = try_load(&path)? else {
        tracing::debug!(card = %entry.title, path = %path.display(), "Workflow file not found");
        return Ok(missing());
    };

    // The file can vanish between the two reads
    let Some(artifact) = export_artifact(&path)? else {
        return Ok(missing());
    };

    Ok(CardView::Loaded {
        title: entry.title.clone(),
        description: entry.description.clone(),
        summary: summarize(&descriptor),
        download: Download {
            file_name: artifact.file_name,
            mime: artifact.mime,
            bytes: artifact.bytes.len() as u64,
        },
    })
}
