use ratatui::{Terminal, backend::TestBackend};

use reqtrack::state::app_state::{ActivePopup, AppState};
use reqtrack::state::focus::Focus;
use reqtrack::state::record::{HttpMethod, Record};
use reqtrack::ui::layout;

fn draw(state: &AppState) -> String {
    let backend = TestBackend::new(120, 32);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| layout::render(frame, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn state_with(records: Vec<Record>) -> AppState {
    let mut state = AppState {
        highlight_theme: String::from("Solarized (dark)"),
        ..Default::default()
    };
    state.store.replace_all(records);
    state
}

#[test]
fn empty_list_renders_no_rows() {
    let screen = draw(&state_with(Vec::new()));
    assert!(screen.contains("HTTP Requests Tracker"));
    assert!(screen.contains("Add New Request"));
    assert!(screen.contains("Request List (0)"));
    assert!(screen.contains("No requests yet"));
    assert!(!screen.contains('►'));
    assert!(!screen.contains('▼'));
}

#[test]
fn collapsed_rows_show_only_urls() {
    let state = state_with(vec![
        Record::new(r"\/first", HttpMethod::Get, "secret-payload", ""),
        Record::new(r"\/second", HttpMethod::Post, "", ""),
    ]);
    let screen = draw(&state);
    assert_eq!(screen.matches('►').count(), 2);
    assert!(screen.contains(r"\/first"));
    assert!(screen.contains(r"\/second"));
    assert!(screen.contains("[e] Edit"));
    assert!(!screen.contains("secret-payload"));
}

#[test]
fn expanded_row_shows_details_verbatim() {
    let mut state = state_with(vec![
        Record::new(r"\/a", HttpMethod::Get, "", ""),
        Record::new(r"\/b", HttpMethod::Delete, "{\"id\": 9}", "plain response"),
    ]);
    state.focus = Focus::List;
    state.list.select_next(2);
    state.list.toggle(1);

    let screen = draw(&state);
    assert_eq!(screen.matches('▼').count(), 1);
    assert_eq!(screen.matches('►').count(), 1);
    assert!(screen.contains("Method: DELETE"));
    assert!(screen.contains("{\"id\": 9}"));
    assert!(screen.contains("plain response"));
}

#[test]
fn edit_mode_changes_form_labels() {
    let mut state = state_with(vec![Record::new("x", HttpMethod::Get, "", "")]);
    state.form.begin_edit(0);
    state.form.sync(&state.store);

    let screen = draw(&state);
    assert!(screen.contains("Edit Request"));
    assert!(screen.contains("[ Update Request ]"));
}

#[test]
fn error_popup_is_drawn_over_panes() {
    let mut state = state_with(Vec::new());
    state.active_popup = ActivePopup::Error {
        title: String::from("Import failed"),
        message: String::from("file is not valid JSON"),
    };
    let screen = draw(&state);
    assert!(screen.contains("Import failed"));
    assert!(screen.contains("file is not valid JSON"));
    assert!(screen.contains("Press any key to dismiss"));
}
