//! Showcase entries: project info, workflow cards and screenshots

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Project information shown alongside the cards
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectInfo {
    /// Project name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Technology stack, free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// A workflow card: a descriptor file plus its heading
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WorkflowEntry {
    /// Card heading
    pub title: String,

    /// One-line description under the heading
    #[serde(default)]
    pub description: String,

    /// Path to the exported workflow JSON
    pub path: String,
}

/// A screenshot that accompanies the workflows
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScreenshotEntry {
    pub title: String,
    pub path: String,
}

/// Resolve a configured path against the project directory
///
/// A leading `~` is expanded first; absolute paths are kept as they are.
pub fn resolve_path(raw: &str, base_dir: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(raw);
    let path = Path::new(expanded.as_ref());
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

impl WorkflowEntry {
    pub fn resolve(&self, base_dir: &Path) -> PathBuf {
        resolve_path(&self.path, base_dir)
    }
}

impl ScreenshotEntry {
    pub fn resolve(&self, base_dir: &Path) -> PathBuf {
        resolve_path(&self.path, base_dir)
    }
}

/// Check entries for empty fields and duplicate workflow titles
pub fn validate_entries(
    workflows: &[WorkflowEntry],
    screenshots: &[ScreenshotEntry],
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut seen_titles = HashSet::new();
    for (i, wf) in workflows.iter().enumerate() {
        if wf.title.trim().is_empty() {
            errors.push(format!("workflow #{} has an empty title", i + 1));
        } else if !seen_titles.insert(wf.title.as_str()) {
            errors.push(format!("duplicate workflow title: {}", wf.title));
        }
        if wf.path.trim().is_empty() {
            errors.push(format!("workflow '{}' has an empty path", wf.title));
        }
    }

    for (i, shot) in screenshots.iter().enumerate() {
        if shot.title.trim().is_empty() {
            errors.push(format!("screenshot #{} has an empty title", i + 1));
        }
        if shot.path.trim().is_empty() {
            errors.push(format!("screenshot '{}' has an empty path", shot.title));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workflow(title: &str, path: &str) -> WorkflowEntry {
        WorkflowEntry {
            title: title.into(),
            description: String::new(),
            path: path.into(),
        }
    }

    #[test]
    fn test_workflow_entry_toml() {
        let toml = r#"
            title = "MCP Client"
            description = "Chat trigger to AI agent"
            path = "workflows/client.json"
        "#;
        let entry: WorkflowEntry = toml::from_str(toml).unwrap();
        assert_eq!(entry.title, "MCP Client");
        assert_eq!(entry.path, "workflows/client.json");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml = r#"
            title = "Shot"
            path = "a.png"
            caption = "nope"
        "#;
        assert!(toml::from_str::<ScreenshotEntry>(toml).is_err());
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let base = Path::new("/srv/showcase");
        assert_eq!(
            resolve_path("workflows/a.json", base),
            PathBuf::from("/srv/showcase/workflows/a.json")
        );
        assert_eq!(
            resolve_path("/tmp/b.json", base),
            PathBuf::from("/tmp/b.json")
        );
    }

    #[test]
    fn test_resolve_expands_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let resolved = resolve_path("~/flows/a.json", Path::new("/srv"));
        assert_eq!(resolved, home.join("flows/a.json"));
    }

    #[test]
    fn test_validate_entries() {
        assert!(validate_entries(&[workflow("A", "a.json")], &[]).is_ok());

        let errors = validate_entries(
            &[
                workflow("A", "a.json"),
                workflow("A", "b.json"),
                workflow("", "c.json"),
                workflow("D", " "),
            ],
            &[ScreenshotEntry {
                title: "Shot".into(),
                path: String::new(),
            }],
        )
        .unwrap_err();

        assert!(errors.iter().any(|e| e.contains("duplicate workflow title: A")));
        assert!(errors.iter().any(|e| e.contains("#3 has an empty title")));
        assert!(errors.iter().any(|e| e.contains("'D' has an empty path")));
        assert!(errors.iter().any(|e| e.contains("screenshot 'Shot'")));
    }
}
