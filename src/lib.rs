//! reqtrack: record hand-transcribed HTTP request/response pairs in the
//! terminal, browse them, and export/import them as Markdown or JSON.

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod pattern;
pub mod state;
pub mod terminal;
pub mod transfer;
pub mod ui;
