use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::{ActivePopup, AppState};
use super::{error_popup, form, import_prompt, record_list, status_bar};

// TokyoNight palette
pub const ACCENT_BLUE: Color = Color::Rgb(122, 162, 247);  // #7aa2f7
pub const BORDER_INACTIVE: Color = Color::Rgb(65, 72, 104); // #414868
pub const BG: Color = Color::Rgb(26, 27, 38);               // #1a1b26
pub const TEXT_MUTED: Color = Color::Rgb(86, 95, 137);      // #565f89
pub const TEXT_PRIMARY: Color = Color::Rgb(192, 202, 245);  // #c0caf5
pub const STATUS_ERR: Color = Color::Rgb(247, 118, 142);    // #f7768e

pub const SPINNER_FRAMES: &[char] = &['⣾', '⣽', '⣻', '⢿', '⡿', '⣟', '⣯', '⣷'];

pub const APP_TITLE: &str = "HTTP Requests Tracker";

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // [title 1] [panes flex] [status 1]
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, vertical[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[1]);

    form::render(frame, panes[0], state);
    record_list::render(frame, panes[1], state);
    status_bar::render(frame, vertical[2], state);

    // Overlay popups — rendered last so they appear on top
    match &state.active_popup {
        ActivePopup::None => {}
        ActivePopup::Import => import_prompt::render(frame, area, state),
        ActivePopup::Error { title, message } => error_popup::render(frame, area, title, message),
    }
}
