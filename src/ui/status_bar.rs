use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::app_state::{AppState, ImportStatus, StatusKind};
use crate::state::focus::Focus;
use crate::state::mode::Mode;
use super::layout::{BORDER_INACTIVE, SPINNER_FRAMES, STATUS_ERR};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (mode_label, mode_color) = match state.mode {
        Mode::Normal => ("NORMAL", Color::Rgb(122, 162, 247)), // blue
        Mode::Insert => ("INSERT", Color::Rgb(158, 206, 106)), // green
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", mode_label),
        Style::default()
            .fg(Color::Black)
            .bg(mode_color)
            .add_modifier(Modifier::BOLD),
    )];

    if let ImportStatus::Reading { spinner_tick, .. } = state.import_status {
        let idx = (spinner_tick as usize) % SPINNER_FRAMES.len();
        spans.push(Span::styled(
            format!(" {} importing…", SPINNER_FRAMES[idx]),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(status) = &state.status {
        let color = match status.kind {
            StatusKind::Info => Color::Rgb(158, 206, 106),
            StatusKind::Error => STATUS_ERR,
        };
        spans.push(Span::styled(format!(" {}", status.text), Style::default().fg(color)));
    }

    let hints = match (state.mode, state.focus) {
        (Mode::Insert, _) => "  · Esc:done · Tab:next field · Ctrl+S:submit",
        (Mode::Normal, Focus::Form) => {
            "  · j/k:field · i:edit · [ ]:method · Ctrl+S:submit · m:md · x:json · o:import · Tab:list · q:quit"
        }
        (Mode::Normal, Focus::List) => {
            "  · j/k:move · Enter:expand · e:edit · m:md · x:json · o:import · Tab:form · q:quit"
        }
    };
    spans.push(Span::styled(hints, Style::default().fg(BORDER_INACTIVE)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
