//! Configuration loading with multi-layer merge

use super::entries::validate_entries;
use super::{ProjectInfo, ScreenshotEntry, WorkflowEntry};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level showcase configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Project information
    #[serde(default)]
    pub project: ProjectInfo,

    /// Workflow cards, rendered in order
    #[serde(default)]
    pub workflows: Vec<WorkflowEntry>,

    /// Screenshots, reported in order
    #[serde(default)]
    pub screenshots: Vec<ScreenshotEntry>,
}

impl ShowcaseConfig {
    /// Built-in showcase: the MCP lead qualification project
    pub fn builtin() -> Self {
        let workflow = |title: &str, description: &str, path: &str| WorkflowEntry {
            title: title.to_string(),
            description: description.to_string(),
            path: path.to_string(),
        };
        let screenshot = |title: &str, path: &str| ScreenshotEntry {
            title: title.to_string(),
            path: path.to_string(),
        };

        Self {
            project: ProjectInfo {
                name: Some("n8n MCP Lead Qualification Agent".to_string()),
                stack: Some("n8n · MCP · Gemini · Google Sheets".to_string()),
            },
            workflows: vec![
                workflow(
                    "MCP Client Lead Qualification Workflow",
                    "Trigger: When chat message received → AI Agent (Gemini + Memory + MCP Client Tool)",
                    "workflows/MCP_Client_Lead_qualification.json",
                ),
                workflow(
                    "MCP Server → Google Sheets Workflow",
                    "Trigger: MCP Server Trigger → Append row in Google Sheets",
                    "workflows/MCP_Server_Lead_qualification.json",
                ),
            ],
            screenshots: vec![
                screenshot(
                    "Client Workflow (n8n canvas)",
                    "screenshots/Screenshot 2026-01-13 095759.png",
                ),
                screenshot(
                    "Chat Demo - Step 1 (BHK selection)",
                    "screenshots/Screenshot 2026-01-13 100002.png",
                ),
                screenshot(
                    "Chat Demo - Step 2 (Booking + Contact)",
                    "screenshots/Screenshot 2026-01-13 100014.png",
                ),
                screenshot(
                    "Server Workflow (MCP Trigger → Google Sheets)",
                    "screenshots/Screenshot 2026-01-13 100110.png",
                ),
            ],
        }
    }

    /// Load configuration from the standard hierarchy
    ///
    /// Load order (later overrides earlier):
    /// 1. Built-in showcase
    /// 2. ~/.config/wfshow/config.toml
    /// 3. .wfshow/config.toml (project)
    /// 4. Explicit config file, if given
    pub fn load(project_dir: Option<&Path>, explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::builtin();

        // Load user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                let user_config = Self::load_file(&user_config_path)
                    .with_context(|| format!("loading {}", user_config_path.display()))?;
                tracing::debug!(path = %user_config_path.display(), "Loaded user config");
                config.merge(user_config);
            }
        }

        // Load project config
        let project_config_path = project_dir
            .map(|p| p.join(".wfshow/config.toml"))
            .unwrap_or_else(|| PathBuf::from(".wfshow/config.toml"));

        if project_config_path.exists() {
            let project_config = Self::load_file(&project_config_path)
                .with_context(|| format!("loading {}", project_config_path.display()))?;
            tracing::debug!(path = %project_config_path.display(), "Loaded project config");
            config.merge(project_config);
        }

        // Explicit file must exist
        if let Some(path) = explicit {
            let explicit_config =
                Self::load_file(path).with_context(|| format!("loading {}", path.display()))?;
            tracing::debug!(path = %path.display(), "Loaded explicit config");
            config.merge(explicit_config);
        }

        config.validate().map_err(|errors| {
            anyhow::anyhow!("configuration validation failed:\n  {}", errors.join("\n  "))
        })?;

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Get the user config path (~/.config/wfshow/config.toml)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wfshow/config.toml"))
    }

    /// Merge another config into this one (other takes precedence)
    ///
    /// Lists are replaced wholesale when the other side is non-empty, so a
    /// project config can swap out the built-in cards entirely.
    pub fn merge(&mut self, other: Self) {
        if other.project.name.is_some() {
            self.project.name = other.project.name;
        }
        if other.project.stack.is_some() {
            self.project.stack = other.project.stack;
        }

        if !other.workflows.is_empty() {
            self.workflows = other.workflows;
        }
        if !other.screenshots.is_empty() {
            self.screenshots = other.screenshots;
        }
    }

    /// Validate all entries, collecting every problem
    pub fn validate(&self) -> Result<(), Vec<String>> {
        validate_entries(&self.workflows, &self.screenshots)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", contents).unwrap();
        path
    }

    #[test]
    fn test_builtin_config() {
        let config = ShowcaseConfig::builtin();
        assert_eq!(config.workflows.len(), 2);
        assert_eq!(config.screenshots.len(), 4);
        assert!(config.validate().is_ok());
        assert!(
            config.workflows[0]
                .path
                .ends_with("MCP_Client_Lead_qualification.json")
        );
    }

    #[test]
    fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            "config.toml",
            r#"
            [project]
            name = "Invoice Bot"

            [[workflows]]
            title = "Invoice intake"
            path = "flows/invoice.json"

            [[screenshots]]
            title = "Canvas"
            path = "shots/canvas.png"
        "#,
        );

        let config = ShowcaseConfig::load_file(&path).unwrap();
        assert_eq!(config.project.name.as_deref(), Some("Invoice Bot"));
        assert_eq!(config.project.stack, None);
        assert_eq!(config.workflows[0].description, "");
        assert_eq!(config.screenshots[0].path, "shots/canvas.png");
    }

    #[test]
    fn test_config_merge() {
        let mut base = ShowcaseConfig::builtin();

        let override_config = ShowcaseConfig {
            project: ProjectInfo {
                name: None,
                stack: Some("n8n · OpenAI".into()),
            },
            workflows: vec![WorkflowEntry {
                title: "Only".into(),
                description: String::new(),
                path: "only.json".into(),
            }],
            screenshots: Vec::new(),
        };

        base.merge(override_config);

        // Set fields win, unset fields keep the earlier layer
        assert_eq!(
            base.project.name.as_deref(),
            Some("n8n MCP Lead Qualification Agent")
        );
        assert_eq!(base.project.stack.as_deref(), Some("n8n · OpenAI"));

        // Non-empty list replaces, empty list keeps
        assert_eq!(base.workflows.len(), 1);
        assert_eq!(base.screenshots.len(), 4);
    }

    #[test]
    fn test_load_project_and_explicit_layers() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            ".wfshow/config.toml",
            r#"
            [[workflows]]
            title = "Project flow"
            path = "project.json"
        "#,
        );
        let explicit = write_config(
            dir.path(),
            "other.toml",
            r#"
            [[screenshots]]
            title = "Explicit shot"
            path = "explicit.png"
        "#,
        );

        let config = ShowcaseConfig::load(Some(dir.path()), Some(&explicit)).unwrap();
        assert_eq!(config.workflows[0].title, "Project flow");
        assert_eq!(config.screenshots.len(), 1);
        assert_eq!(config.screenshots[0].title, "Explicit shot");
    }

    #[test]
    fn test_load_rejects_invalid_entries() {
        let dir = TempDir::new().unwrap();
        let explicit = write_config(
            dir.path(),
            "dup.toml",
            r#"
            [[workflows]]
            title = "Same"
            path = "a.json"

            [[workflows]]
            title = "Same"
            path = "b.json"
        "#,
        );

        let err = ShowcaseConfig::load(Some(dir.path()), Some(&explicit)).unwrap_err();
        assert!(err.to_string().contains("duplicate workflow title"));
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(ShowcaseConfig::load(Some(dir.path()), Some(&missing)).is_err());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config = ShowcaseConfig::builtin();
        let rendered = config.to_toml().unwrap();
        let parsed: ShowcaseConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
