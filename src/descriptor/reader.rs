//! Loading descriptors and exporting their raw bytes

use super::DescriptorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// MIME type offered with exported descriptors
pub const JSON_MIME: &str = "application/json";

const UNKNOWN_WORKFLOW: &str = "Unknown";
const UNNAMED_NODE: &str = "Unnamed Node";
const UNKNOWN_NODE_TYPE: &str = "type";

/// Parsed workflow document with defaults applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowDescriptor {
    pub name: String,
    pub nodes: Vec<NodeEntry>,
}

/// A single node of a workflow document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

/// Document shape as it appears on disk; `null` and missing are the same
#[derive(Debug, Deserialize)]
struct RawDescriptor {
    name: Option<String>,
    nodes: Option<Vec<RawNode>>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    name: Option<String>,
    #[serde(rename = "type")]
    node_type: Option<String>,
}

impl From<RawNode> for NodeEntry {
    fn from(raw: RawNode) -> Self {
        Self {
            name: raw.name.unwrap_or_else(|| UNNAMED_NODE.to_string()),
            node_type: raw.node_type.unwrap_or_else(|| UNKNOWN_NODE_TYPE.to_string()),
        }
    }
}

impl From<RawDescriptor> for WorkflowDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        Self {
            name: raw.name.unwrap_or_else(|| UNKNOWN_WORKFLOW.to_string()),
            nodes: raw
                .nodes
                .unwrap_or_default()
                .into_iter()
                .map(NodeEntry::from)
                .collect(),
        }
    }
}

impl WorkflowDescriptor {
    /// Parse a descriptor from document bytes
    ///
    /// The top level and every node must be JSON objects. serde would
    /// otherwise accept arrays positionally for struct types.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        use serde::de::Error as _;

        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        let object = value
            .as_object()
            .ok_or_else(|| serde_json::Error::custom("workflow document must be a JSON object"))?;

        if let Some(serde_json::Value::Array(nodes)) = object.get("nodes") {
            if let Some(index) = nodes.iter().position(|n| !n.is_object()) {
                return Err(serde_json::Error::custom(format!(
                    "node {} must be a JSON object",
                    index
                )));
            }
        }

        let raw = RawDescriptor::deserialize(value)?;
        Ok(raw.into())
    }
}

/// Raw descriptor bytes ready to be offered for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Original file name, reused as the download name
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Load a descriptor, returning `Ok(None)` when the path does not exist
pub fn try_load(path: &Path) -> Result<Option<WorkflowDescriptor>, DescriptorError> {
    let Some(bytes) = export_bytes(path)? else {
        return Ok(None);
    };

    let descriptor =
        WorkflowDescriptor::from_slice(&bytes).map_err(|source| DescriptorError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        name = %descriptor.name,
        nodes = descriptor.nodes.len(),
        "Loaded workflow descriptor"
    );

    Ok(Some(descriptor))
}

/// Read the unmodified file content, returning `Ok(None)` when absent
///
/// Only `NotFound` counts as absent; any other I/O failure, including a
/// stat failure on a parent directory, is `Unreadable`.
pub fn export_bytes(path: &Path) -> Result<Option<Vec<u8>>, DescriptorError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Workflow file not found");
            Ok(None)
        }
        Err(source) => Err(DescriptorError::Unreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Raw bytes plus the file name and MIME type used for download
pub fn export_artifact(path: &Path) -> Result<Option<ExportArtifact>, DescriptorError> {
    let Some(bytes) = export_bytes(path)? else {
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "workflow.json".to_string());

    Ok(Some(ExportArtifact {
        file_name,
        mime: JSON_MIME,
        bytes,
    }))
}
