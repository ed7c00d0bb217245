//! File formats and the download step for exporting and importing the store.

pub mod download;
pub mod json;
pub mod markdown;

pub use download::{Download, Saved, save};
