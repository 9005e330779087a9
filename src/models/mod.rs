// ABOUTME: Core data models for TubeShare channels and the in-progress channel selection

pub mod channel;
pub mod selection;

pub use channel::{secure_thumbnail_url, Channel};
pub use selection::SelectionList;
