//! CLI module for wfshow
//!
//! This module provides:
//! - Command implementations (inspect, export, workflows, screenshots, config)
//! - Output handlers (console, JSON, quiet)
//!
//! # Example
//!
//! ```ignore
//! use crate::cli::{commands, output};
//!
//! let handler = output::create_handler(output::OutputMode::Console, false);
//! let exit_code = commands::inspect("workflows/lead.json", Path::new("."), &*handler);
//! ```

pub mod commands;
pub mod output;

pub use commands::{export, inspect, show_config, show_screenshots, show_workflows};
pub use output::{OutputMode, create_handler};
