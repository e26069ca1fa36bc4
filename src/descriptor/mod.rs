//! Workflow descriptor reading, summarizing and export
//!
//! A descriptor is the parsed form of an exported workflow document: a
//! top-level `name` and an ordered list of `nodes`, each with an optional
//! `name` and `type`. Everything else in the document is ignored.
//!
//! Missing files are not errors. `try_load` and `export_artifact` return
//! `Ok(None)` when the path does not exist so callers can show a notice,
//! and reserve `Err` for files that exist but cannot be read or parsed.

mod error;
mod reader;
mod summary;

pub use error::DescriptorError;
pub use reader::{WorkflowDescriptor, export_artifact, try_load};
pub use summary::{Summary, summarize};
