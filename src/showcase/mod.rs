//! Workflow cards and screenshot checks for a configured showcase

mod assets;
mod card;

pub use assets::{AssetStatus, check_asset};
pub use card::{CardView, render_card};
