//! Portfolio Common Library
//!
//! Web(WASM)フロントと共有する型とロジック

pub mod types;
pub mod catalog;
pub mod filter;
pub mod carousel;
pub mod reveal;
pub mod prefs;
pub mod route;
pub mod error;

pub use types::ProjectRecord;
pub use catalog::Catalog;
pub use filter::{filter, FilterState, ALL_CATEGORIES};
pub use carousel::{CarouselLayout, LayoutMode, ScrollGeometry};
pub use reveal::{RevealConfig, RevealState};
pub use prefs::{Preferences, Theme};
pub use route::Page;
pub use error::{Error, Result};
