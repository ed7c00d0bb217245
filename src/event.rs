use std::path::PathBuf;

use crossterm::event::KeyEvent;

use crate::error::AppError;
use crate::state::record::Record;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Completion of a background import read.
    Imported {
        path: PathBuf,
        result: Result<Vec<Record>, AppError>,
    },
}
