//! UIコンポーネント

pub mod header;
pub mod lazy_image;
pub mod project_card;
pub mod reveal;
pub mod timeline_carousel;
