//! Configuration types and loading for wfshow

mod entries;
mod loader;

pub use entries::{ProjectInfo, ScreenshotEntry, WorkflowEntry, resolve_path};
pub use loader::ShowcaseConfig;
