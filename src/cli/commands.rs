//! CLI command implementations

use super::output::{OutputEvent, OutputHandler};
use crate::config::{ShowcaseConfig, resolve_path};
use crate::descriptor::{DescriptorError, WorkflowDescriptor, export_artifact, summarize, try_load};
use crate::showcase::{check_asset, render_card};
use std::path::Path;

/// Everything requested was found and parsed
pub const EXIT_OK: i32 = 0;
/// A requested file does not exist
pub const EXIT_NOT_FOUND: i32 = 1;
/// A file exists but could not be used, or an export was refused
pub const EXIT_FAILED: i32 = 2;

/// Summarize a single workflow descriptor
pub fn inspect(path: &str, base_dir: &Path, handler: &dyn OutputHandler) -> i32 {
    let path = resolve_path(path, base_dir);

    match try_load(&path) {
        Ok(Some(descriptor)) => {
            handler.emit(OutputEvent::Inspected {
                path,
                summary: summarize(&descriptor),
            });
            EXIT_OK
        }
        Ok(None) => {
            handler.emit(OutputEvent::NotFound { path });
            EXIT_NOT_FOUND
        }
        Err(e) => {
            tracing::error!(path = %e.path().display(), error = %e, "Failed to load workflow");
            handler.emit(OutputEvent::Error {
                error: e.to_string(),
            });
            EXIT_FAILED
        }
    }
}

/// Copy a descriptor's raw bytes into `out_dir` under its original name
///
/// Only documents that parse as descriptors are exported. An existing
/// destination is overwritten only with `force`, and never when it is the
/// source file itself. Failures to create or write the destination exit
/// with `EXIT_FAILED`, the same as a refused export.
pub fn export(
    path: &str,
    base_dir: &Path,
    out_dir: &Path,
    force: bool,
    handler: &dyn OutputHandler,
) -> i32 {
    let source = resolve_path(path, base_dir);

    let artifact = match export_artifact(&source) {
        Ok(Some(artifact)) => artifact,
        Ok(None) => {
            handler.emit(OutputEvent::NotFound { path: source });
            return EXIT_NOT_FOUND;
        }
        Err(e) => return report_failure(&e, handler),
    };

    if let Err(source_err) = WorkflowDescriptor::from_slice(&artifact.bytes) {
        let e = DescriptorError::Malformed {
            path: source,
            source: source_err,
        };
        return report_failure(&e, handler);
    }

    if let Err(e) = std::fs::create_dir_all(out_dir) {
        return report_write_failure(&format!("creating {}", out_dir.display()), &e, handler);
    }
    let destination = out_dir.join(&artifact.file_name);

    if destination.exists() {
        if same_file(&source, &destination) {
            handler.emit(OutputEvent::Error {
                error: format!("refusing to export {} onto itself", source.display()),
            });
            return EXIT_FAILED;
        }
        if !force {
            handler.emit(OutputEvent::Error {
                error: format!(
                    "{} already exists (use --force to overwrite)",
                    destination.display()
                ),
            });
            return EXIT_FAILED;
        }
    }

    if let Err(e) = std::fs::write(&destination, &artifact.bytes) {
        return report_write_failure(&format!("writing {}", destination.display()), &e, handler);
    }

    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        bytes = artifact.bytes.len(),
        "Exported workflow"
    );

    handler.emit(OutputEvent::Exported {
        file_name: artifact.file_name,
        mime: artifact.mime.to_string(),
        bytes: artifact.bytes.len() as u64,
        destination,
    });

    EXIT_OK
}

/// Render every configured workflow card
///
/// Missing files are shown as notices and do not affect the exit code;
/// a card that fails to load is reported and the remaining cards still render.
pub fn show_workflows(
    config: &ShowcaseConfig,
    base_dir: &Path,
    handler: &dyn OutputHandler,
) -> i32 {
    handler.emit(OutputEvent::Debug {
        message: format!("resolving workflow paths against {}", base_dir.display()),
    });
    handler.emit(OutputEvent::Project {
        name: config.project.name.clone(),
        stack: config.project.stack.clone(),
    });

    if config.workflows.is_empty() {
        handler.emit(OutputEvent::Info {
            message: "(no workflows configured)".into(),
        });
        return EXIT_OK;
    }

    let mut exit_code = EXIT_OK;
    for entry in &config.workflows {
        match render_card(entry, base_dir) {
            Ok(card) => {
                tracing::debug!(card = card.title(), "Rendered workflow card");
                handler.emit(OutputEvent::Card { card });
            }
            Err(e) => {
                tracing::error!(card = %entry.title, error = %e, "Failed to render workflow card");
                handler.emit(OutputEvent::CardFailed {
                    title: entry.title.clone(),
                    path: e.path().to_path_buf(),
                    error: e.to_string(),
                });
                exit_code = EXIT_FAILED;
            }
        }
    }

    exit_code
}

/// Report which configured screenshots are on disk
pub fn show_screenshots(
    config: &ShowcaseConfig,
    base_dir: &Path,
    handler: &dyn OutputHandler,
) -> i32 {
    if config.screenshots.is_empty() {
        handler.emit(OutputEvent::Info {
            message: "(no screenshots configured)".into(),
        });
        return EXIT_OK;
    }

    for entry in &config.screenshots {
        let path = entry.resolve(base_dir);
        let status = check_asset(&path);
        if !status.is_present() {
            tracing::debug!(screenshot = %entry.title, path = %path.display(), "Image missing");
        }
        handler.emit(OutputEvent::Asset {
            title: entry.title.clone(),
            path,
            status,
        });
    }

    EXIT_OK
}

/// Print the effective configuration
pub fn show_config(config: &ShowcaseConfig, handler: &dyn OutputHandler) -> i32 {
    match config.to_toml() {
        Ok(rendered) => {
            handler.result(true, Some(rendered.trim_end()));
            EXIT_OK
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to render configuration");
            handler.emit(OutputEvent::Error {
                error: format!("{:#}", e),
            });
            EXIT_FAILED
        }
    }
}

fn report_failure(e: &DescriptorError, handler: &dyn OutputHandler) -> i32 {
    tracing::error!(path = %e.path().display(), error = %e, "Failed to export workflow");
    handler.emit(OutputEvent::Error {
        error: e.to_string(),
    });
    EXIT_FAILED
}

fn report_write_failure(action: &str, e: &std::io::Error, handler: &dyn OutputHandler) -> i32 {
    tracing::error!(error = %e, "Failed {}", action);
    handler.emit(OutputEvent::Error {
        error: format!("{}: {}", action, e),
    });
    EXIT_FAILED
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
