//! Output handlers for CLI commands
//!
//! Supports console (pretty), JSON, and quiet output modes.

use crate::descriptor::Summary;
use crate::showcase::{AssetStatus, CardView};
use clap::ValueEnum;
use serde::Serialize;
use std::path::PathBuf;

/// Output mode for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Human-readable cards and notices
    #[default]
    Console,
    /// One JSON object per event
    Json,
    /// Only final command output
    Quiet,
}

/// Events emitted while inspecting a showcase
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum OutputEvent {
    Project {
        name: Option<String>,
        stack: Option<String>,
    },
    Card {
        card: CardView,
    },
    CardFailed {
        title: String,
        path: PathBuf,
        error: String,
    },
    Inspected {
        path: PathBuf,
        summary: Summary,
    },
    NotFound {
        path: PathBuf,
    },
    Asset {
        title: String,
        path: PathBuf,
        status: AssetStatus,
    },
    Exported {
        file_name: String,
        mime: String,
        bytes: u64,
        destination: PathBuf,
    },
    Error {
        error: String,
    },
    Info {
        message: String,
    },
    Debug {
        message: String,
    },
}

/// Output handler trait
pub trait OutputHandler {
    /// Emit an event
    fn emit(&self, event: OutputEvent);

    /// Write final result
    fn result(&self, success: bool, output: Option<&str>);
}

/// Console output handler
pub struct ConsoleHandler {
    debug: bool,
}

impl ConsoleHandler {
    /// Create a new console handler
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    fn format_size(bytes: u64) -> String {
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    fn print_summary(summary: &Summary) {
        println!("Workflow Details");
        println!("  - Workflow Name: {}", summary.name);
        println!("  - Total Nodes: {}", summary.node_count);
        for node in &summary.nodes {
            println!("    • {}  |  `{}`", node.name, node.node_type);
        }
    }

    fn print_card(card: &CardView) {
        match card {
            CardView::Loaded {
                title,
                description,
                summary,
                download,
            } => {
                println!("### {}", title);
                if !description.is_empty() {
                    println!("{}", description);
                }
                println!("✅ Workflow file loaded successfully");
                Self::print_summary(summary);
                println!(
                    "⬇️  Download {} ({}, {})",
                    download.file_name,
                    download.mime,
                    Self::format_size(download.bytes)
                );
            }
            CardView::Missing {
                title,
                description,
                path,
            } => {
                println!("### {}", title);
                if !description.is_empty() {
                    println!("{}", description);
                }
                println!("❌ Workflow file not found: `{}`", path.display());
                println!("Tip: Upload your workflow JSON into the repo folder correctly.");
            }
        }
        println!();
    }
}

impl OutputHandler for ConsoleHandler {
    fn emit(&self, event: OutputEvent) {
        match event {
            OutputEvent::Project { name, stack } => {
                if let Some(name) = name {
                    println!("Project: {}", name);
                }
                if let Some(stack) = stack {
                    println!("Stack: {}", stack);
                }
                println!();
            }
            OutputEvent::Card { card } => Self::print_card(&card),
            OutputEvent::CardFailed { title, path, error } => {
                println!("### {}", title);
                println!("❌ Workflow file could not be loaded: `{}`", path.display());
                println!("   {}", error);
                println!();
            }
            OutputEvent::Inspected { path, summary } => {
                println!("✅ Loaded {}", path.display());
                Self::print_summary(&summary);
            }
            OutputEvent::NotFound { path } => {
                eprintln!("❌ Workflow file not found: `{}`", path.display());
            }
            OutputEvent::Asset {
                title,
                path,
                status,
            } => match status {
                AssetStatus::Present { bytes } => {
                    println!(
                        "✅ {} - {} ({})",
                        title,
                        path.display(),
                        Self::format_size(bytes)
                    );
                }
                AssetStatus::Missing => {
                    println!("⚠️  {} - Image missing: `{}`", title, path.display());
                }
            },
            OutputEvent::Exported {
                file_name,
                mime,
                bytes,
                destination,
            } => {
                println!(
                    "⬇️  Exported {} ({}, {}) to {}",
                    file_name,
                    mime,
                    Self::format_size(bytes),
                    destination.display()
                );
            }
            OutputEvent::Error { error } => {
                eprintln!("Error: {}", error);
            }
            OutputEvent::Info { message } => {
                eprintln!("{}", message);
            }
            OutputEvent::Debug { message } => {
                if self.debug {
                    eprintln!("[debug] {}", message);
                }
            }
        }
    }

    fn result(&self, _success: bool, output: Option<&str>) {
        if let Some(out) = output {
            println!("{}", out);
        }
    }
}

/// JSON output handler
pub struct JsonHandler {
    pretty: bool,
}

impl JsonHandler {
    /// Create a new JSON handler
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn print_json<T: Serialize>(&self, value: &T) {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };

        if let Ok(s) = json {
            println!("{}", s);
        }
    }
}

impl OutputHandler for JsonHandler {
    fn emit(&self, event: OutputEvent) {
        self.print_json(&event);
    }

    fn result(&self, success: bool, output: Option<&str>) {
        #[derive(Serialize)]
        struct FinalResult<'a> {
            success: bool,
            output: Option<&'a str>,
        }

        self.print_json(&FinalResult { success, output });
    }
}

/// Quiet handler that emits nothing
pub struct QuietHandler;

impl OutputHandler for QuietHandler {
    fn emit(&self, _event: OutputEvent) {}
    fn result(&self, _success: bool, output: Option<&str>) {
        // Only print final output, nothing else
        if let Some(out) = output {
            println!("{}", out);
        }
    }
}

/// Create an output handler based on mode
pub fn create_handler(mode: OutputMode, debug: bool) -> Box<dyn OutputHandler> {
    match mode {
        OutputMode::Console => Box::new(ConsoleHandler::new(debug)),
        OutputMode::Json => Box::new(JsonHandler::new(true)),
        OutputMode::Quiet => Box::new(QuietHandler),
    }
}
