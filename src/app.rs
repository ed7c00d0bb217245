use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::error::AppError;
use crate::event::Event;
use crate::state::app_state::{ActivePopup, AppState, ImportStatus, StatusMessage};
use crate::state::focus::Focus;
use crate::state::form::{FormField, SubmitOutcome};
use crate::state::mode::Mode;
use crate::state::record::Record;
use crate::state::text::TextField;
use crate::transfer::{self, json, markdown};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Json,
}

pub struct App {
    pub state: AppState,
    tx: UnboundedSender<Event>,
    export_dir: PathBuf,
}

impl App {
    pub fn new(tx: UnboundedSender<Event>, config: Config) -> Self {
        Self {
            state: AppState {
                dirty: true,
                highlight_theme: config.highlight_theme,
                ..Default::default()
            },
            tx,
            export_dir: config.export_dir,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                self.state.dirty = true;
                self.handle_key(key);
            }
            Event::Key(_) => {}
            // Tick: only dirty when the spinner is visible; otherwise a no-op.
            Event::Tick => self.handle_tick(),
            // Terminal resize always requires a full redraw.
            Event::Resize(_, _) => self.state.dirty = true,
            Event::Imported { path, result } => {
                self.state.dirty = true;
                self.handle_imported(path, result);
            }
        }

        if self.state.form.sync(&self.state.store) {
            self.state.dirty = true;
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.state.should_quit = true;
            return;
        }

        match self.state.active_popup {
            ActivePopup::Import => return self.handle_import_key(key),
            ActivePopup::Error { .. } => {
                self.state.active_popup = ActivePopup::None;
                return;
            }
            ActivePopup::None => {}
        }

        // Ctrl+S submits the form from anywhere.
        if ctrl && key.code == KeyCode::Char('s') {
            self.submit();
            return;
        }

        match self.state.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Insert => self.handle_insert_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Tab => self.state.focus = self.state.focus.next(),
            KeyCode::BackTab => self.state.focus = self.state.focus.prev(),
            KeyCode::Char('1') => self.state.focus = Focus::Form,
            KeyCode::Char('2') => self.state.focus = Focus::List,
            KeyCode::Char('m') => self.export(ExportFormat::Markdown),
            KeyCode::Char('x') => self.export(ExportFormat::Json),
            KeyCode::Char('o') => self.open_import_prompt(),
            _ => match self.state.focus {
                Focus::Form => self.handle_form_key(key),
                Focus::List => self.handle_list_key(key),
            },
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => form.field = form.field.next(),
            KeyCode::Char('k') | KeyCode::Up => form.field = form.field.prev(),
            KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left
                if form.field == FormField::Method =>
            {
                form.method = form.method.prev();
            }
            KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right
                if form.field == FormField::Method =>
            {
                form.method = form.method.next();
            }
            KeyCode::Char('i') | KeyCode::Enter => match form.field {
                FormField::Url | FormField::Payload | FormField::Response => {
                    self.state.mode = Mode::Insert;
                }
                FormField::Method => form.method = form.method.next(),
                FormField::Submit => self.submit(),
            },
            KeyCode::Esc if form.is_editing() => {
                form.cancel_edit();
                tracing::info!("edit cancelled");
                self.state.status = Some(StatusMessage::info("Edit cancelled"));
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let len = self.state.store.len();
        let list = &mut self.state.list;
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => list.select_next(len),
            KeyCode::Char('k') | KeyCode::Up => list.select_prev(),
            KeyCode::Char('g') | KeyCode::Home => list.select_first(),
            KeyCode::Char('G') | KeyCode::End => list.select_last(len),
            KeyCode::Enter | KeyCode::Char(' ') if len > 0 => list.toggle(list.selected()),
            KeyCode::Char('e') if len > 0 => self.edit(self.state.list.selected()),
            _ => {}
        }
    }

    fn handle_insert_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        if !form.field.is_text() {
            self.state.mode = Mode::Normal;
            return;
        }
        let multiline = form.field.is_multiline();
        match key.code {
            KeyCode::Esc => self.state.mode = Mode::Normal,
            KeyCode::Tab => {
                self.state.mode = Mode::Normal;
                form.field = form.field.next();
            }
            KeyCode::Enter if multiline => form.edit_active(|f| f.insert('\n')),
            KeyCode::Enter => {
                self.state.mode = Mode::Normal;
                form.field = form.field.next();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.edit_active(|f| f.insert(c));
            }
            KeyCode::Backspace => form.edit_active(TextField::backspace),
            KeyCode::Delete => form.edit_active(TextField::delete),
            KeyCode::Left => form.edit_active(TextField::left),
            KeyCode::Right => form.edit_active(TextField::right),
            KeyCode::Home => form.edit_active(TextField::home),
            KeyCode::End => form.edit_active(TextField::end),
            KeyCode::Up if multiline => form.edit_active(TextField::up),
            KeyCode::Down if multiline => form.edit_active(TextField::down),
            _ => {}
        }
    }

    fn handle_import_key(&mut self, key: KeyEvent) {
        let input = &mut self.state.import_path;
        match key.code {
            KeyCode::Esc => self.state.active_popup = ActivePopup::None,
            KeyCode::Enter => self.start_import(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
            KeyCode::Char('u') => input.clear(),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.left(),
            KeyCode::Right => input.right(),
            KeyCode::Home => input.home(),
            KeyCode::End => input.end(),
            _ => {}
        }
    }

    fn handle_tick(&mut self) {
        if let ImportStatus::Reading { spinner_tick, .. } = &mut self.state.import_status {
            *spinner_tick = spinner_tick.wrapping_add(1);
            self.state.dirty = true;
        }
    }

    /// Start editing the record at `index`; the form fills itself on the
    /// next sync.
    pub fn edit(&mut self, index: usize) {
        self.state.form.begin_edit(index);
        self.state.focus = Focus::Form;
        self.state.mode = Mode::Normal;
        tracing::info!(index, "editing request");
        self.state.status = Some(StatusMessage::info(format!("Editing request {}", index + 1)));
    }

    pub fn submit(&mut self) {
        self.state.mode = Mode::Normal;
        match self.state.form.submit(&mut self.state.store) {
            Ok(SubmitOutcome::Created(index)) => {
                tracing::info!(index, "request added");
                self.state.list.select_last(self.state.store.len());
                self.state.status = Some(StatusMessage::info(format!("Added request {}", index + 1)));
            }
            Ok(SubmitOutcome::Updated(index)) => {
                tracing::info!(index, "request updated");
                self.state.status = Some(StatusMessage::info(format!("Updated request {}", index + 1)));
            }
            Err(err) => {
                tracing::warn!("submit rejected: {err}");
                self.state.status = Some(StatusMessage::error(err.to_string()));
            }
        }
    }

    pub fn export(&mut self, format: ExportFormat) {
        let records = self.state.store.as_slice();
        let download = match format {
            ExportFormat::Markdown => markdown::download(records),
            ExportFormat::Json => json::download(records),
        };
        match download.and_then(|d| transfer::save(&self.export_dir, &d)) {
            Ok(saved) => {
                self.state.status = Some(StatusMessage::info(format!(
                    "Saved {} ({})",
                    saved.path.display(),
                    saved.human_size()
                )));
            }
            Err(err) => {
                tracing::error!(?format, "export failed: {err}");
                self.state.show_error("Export failed", err.to_string());
            }
        }
    }

    fn open_import_prompt(&mut self) {
        if self.state.import_path.is_empty() {
            let suggestion = self.export_dir.join(json::FILE_NAME);
            self.state.import_path.set(suggestion.display().to_string());
        }
        self.state.active_popup = ActivePopup::Import;
    }

    /// Kick off a background read of the path in the import prompt. The
    /// store is only replaced once the read completes.
    fn start_import(&mut self) {
        let raw = self.state.import_path.as_str().trim();
        if raw.is_empty() {
            self.state.status = Some(StatusMessage::error("Enter a file path to import"));
            return;
        }
        let path = PathBuf::from(raw);
        self.state.active_popup = ActivePopup::None;
        self.state.import_status = match self.state.import_status {
            ImportStatus::Idle => ImportStatus::Reading { pending: 1, spinner_tick: 0 },
            ImportStatus::Reading { pending, spinner_tick } => {
                ImportStatus::Reading { pending: pending + 1, spinner_tick }
            }
        };
        tracing::info!(path = %path.display(), "import started");

        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = json::read_file(&path).await;
            let _ = tx.send(Event::Imported { path, result });
        });
    }

    fn handle_imported(&mut self, path: PathBuf, result: Result<Vec<Record>, AppError>) {
        self.state.import_status = match self.state.import_status {
            ImportStatus::Reading { pending, spinner_tick } if pending > 1 => {
                ImportStatus::Reading { pending: pending - 1, spinner_tick }
            }
            _ => ImportStatus::Idle,
        };

        match result {
            Ok(records) => {
                let count = records.len();
                self.state.store.replace_all(records);
                self.state.list.reset();
                tracing::info!(path = %path.display(), count, "import finished");
                self.state.status = Some(StatusMessage::info(format!(
                    "Imported {count} request(s) from {}",
                    path.display()
                )));
            }
            Err(err) => {
                tracing::error!(path = %path.display(), "import failed: {err}");
                self.state.show_error("Import failed", err.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::state::record::HttpMethod;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn app() -> (App, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(tx, Config::default()), rx)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_a_url_and_submitting_adds_a_record() {
        let (mut app, _rx) = app();
        app.handle_event(key(KeyCode::Char('i')));
        assert_eq!(app.state.mode, Mode::Insert);
        type_str(&mut app, "/users/7");
        app.handle_event(key(KeyCode::Esc));
        app.handle_event(ctrl('s'));

        assert_eq!(app.state.store.len(), 1);
        assert_eq!(app.state.store.get(0).unwrap().url, r"\/users\/\d+");
        assert_eq!(app.state.form.url(), "");
    }

    #[test]
    fn q_in_insert_mode_is_text() {
        let (mut app, _rx) = app();
        app.handle_event(key(KeyCode::Enter));
        type_str(&mut app, "q");
        assert!(!app.state.should_quit);
        assert_eq!(app.state.form.url_input().as_str(), "q");
        app.handle_event(key(KeyCode::Esc));
        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.state.should_quit);
    }

    #[test]
    fn method_field_cycles_with_brackets() {
        let (mut app, _rx) = app();
        app.handle_event(key(KeyCode::Char('j')));
        assert_eq!(app.state.form.field, FormField::Method);
        app.handle_event(key(KeyCode::Char(']')));
        app.handle_event(key(KeyCode::Char(']')));
        assert_eq!(app.state.form.method, HttpMethod::Put);
        app.handle_event(key(KeyCode::Char('[')));
        assert_eq!(app.state.form.method, HttpMethod::Post);
    }

    #[test]
    fn empty_submit_sets_an_error_status() {
        let (mut app, _rx) = app();
        app.handle_event(ctrl('s'));
        assert!(app.state.store.is_empty());
        let status = app.state.status.clone().unwrap();
        assert_eq!(status, StatusMessage::error("URL is required"));
    }

    #[test]
    fn edit_from_list_prefills_without_toggling_disclosure() {
        let (mut app, _rx) = app();
        app.state.store.replace_all(vec![
            Record::new("a", HttpMethod::Get, "", ""),
            Record::new("b", HttpMethod::Put, "p", "r"),
        ]);
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(key(KeyCode::Char('j')));
        app.handle_event(key(KeyCode::Char('e')));

        assert_eq!(app.state.focus, Focus::Form);
        assert_eq!(app.state.form.edit_index(), Some(1));
        assert_eq!(app.state.form.url(), "b");
        assert_eq!(app.state.form.method, HttpMethod::Put);
        assert_eq!(app.state.list.open(), None);
    }

    #[test]
    fn list_toggle_opens_and_closes() {
        let (mut app, _rx) = app();
        app.state.store.replace_all(vec![Record::new("a", HttpMethod::Get, "", "")]);
        app.handle_event(key(KeyCode::Char('2')));
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.state.list.open(), Some(0));
        app.handle_event(key(KeyCode::Char(' ')));
        assert_eq!(app.state.list.open(), None);
    }

    #[test]
    fn esc_cancels_an_edit() {
        let (mut app, _rx) = app();
        app.state.store.replace_all(vec![Record::new("a", HttpMethod::Get, "", "")]);
        app.edit(0);
        app.handle_event(key(KeyCode::Esc));
        assert!(!app.state.form.is_editing());
        assert_eq!(app.state.form.url(), "");
    }

    #[test]
    fn failed_import_keeps_the_store_and_shows_a_popup() {
        let (mut app, _rx) = app();
        app.state.store.replace_all(vec![Record::new("a", HttpMethod::Get, "", "")]);
        let result = json::parse_records("not json").map_err(AppError::from);
        app.handle_event(Event::Imported { path: PathBuf::from("bad.json"), result });

        assert_eq!(app.state.store.len(), 1);
        assert!(matches!(app.state.active_popup, ActivePopup::Error { .. }));
        app.handle_event(key(KeyCode::Char('z')));
        assert_eq!(app.state.active_popup, ActivePopup::None);
    }

    #[test]
    fn import_replaces_store_and_refills_active_edit() {
        let (mut app, _rx) = app();
        app.state.store.replace_all(vec![
            Record::new("a", HttpMethod::Get, "", ""),
            Record::new("b", HttpMethod::Get, "", ""),
        ]);
        app.state.list.toggle(1);
        app.edit(1);
        app.handle_event(Event::Tick);
        assert_eq!(app.state.form.url(), "b");

        let records = vec![
            Record::new("x", HttpMethod::Post, "", ""),
            Record::new("y", HttpMethod::Delete, "", ""),
        ];
        app.handle_event(Event::Imported { path: PathBuf::from("in.json"), result: Ok(records) });

        assert_eq!(app.state.store.len(), 2);
        assert_eq!(app.state.list.open(), None);
        assert_eq!(app.state.form.edit_index(), Some(1));
        assert_eq!(app.state.form.url(), "y");
        assert_eq!(app.state.form.method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn import_prompt_reads_file_in_background() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.json");
        std::fs::write(&path, r#"[{"url":"u","method":"GET","payload":"","response":""}]"#).unwrap();

        let (mut app, mut rx) = app();
        app.handle_event(key(KeyCode::Char('o')));
        assert_eq!(app.state.active_popup, ActivePopup::Import);
        app.handle_event(ctrl('u'));
        type_str(&mut app, &path.display().to_string());
        app.handle_event(key(KeyCode::Enter));

        assert_eq!(app.state.active_popup, ActivePopup::None);
        assert!(matches!(app.state.import_status, ImportStatus::Reading { pending: 1, .. }));
        assert!(app.state.store.is_empty());

        let event = rx.recv().await.unwrap();
        app.handle_event(event);
        assert!(matches!(app.state.import_status, ImportStatus::Idle));
        assert_eq!(app.state.store.as_slice(), [Record::new("u", HttpMethod::Get, "", "")]);
    }
}
