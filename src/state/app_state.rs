use super::{
    focus::Focus,
    form::FormState,
    list::ListState,
    mode::Mode,
    store::RecordStore,
    text::TextField,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line feedback shown in the status bar until the next action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Info }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: StatusKind::Error }
    }
}

/// Which overlay popup (if any) is currently visible.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActivePopup {
    #[default]
    None,
    /// File path prompt for JSON import.
    Import,
    /// Blocking error report; any key dismisses it.
    Error { title: String, message: String },
}

#[derive(Debug, Clone, Default)]
pub enum ImportStatus {
    #[default]
    Idle,
    /// At least one background read is still in flight.
    Reading { pending: usize, spinner_tick: u8 },
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub mode: Mode,
    pub focus: Focus,
    pub store: RecordStore,
    pub form: FormState,
    pub list: ListState,
    pub active_popup: ActivePopup,
    pub import_path: TextField,
    pub import_status: ImportStatus,
    pub status: Option<StatusMessage>,
    pub highlight_theme: String,
    pub should_quit: bool,
    /// Set to `true` whenever visible state changes. The render loop skips
    /// `terminal.draw()` when `false`, avoiding redundant work on idle ticks.
    pub dirty: bool,
}

impl AppState {
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let message = message.into();
        self.status = Some(StatusMessage::error(message.clone()));
        self.active_popup = ActivePopup::Error { title: title.into(), message };
    }
}
