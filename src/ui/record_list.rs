use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::focus::Focus;
use crate::state::record::Record;
use super::form::method_color;
use super::highlight::{detect_lang, highlight_text};
use super::layout::{ACCENT_BLUE, BORDER_INACTIVE, TEXT_MUTED, TEXT_PRIMARY};

const OPEN_GLYPH: &str = "▼";
const CLOSED_GLYPH: &str = "►";
const DETAIL_INDENT: &str = "    ";
const SELECTED_BG: Color = Color::Rgb(41, 45, 62);

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::List;
    let border_color = if focused { ACCENT_BLUE } else { BORDER_INACTIVE };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Request List ({}) ", state.store.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height < 1 {
        return;
    }

    if state.store.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "No requests yet. Fill in the form and submit.",
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut selected_line = 0usize;

    for (i, record) in state.store.iter().enumerate() {
        let is_selected = i == state.list.selected();
        let is_open = state.list.is_open(i);
        if is_selected {
            selected_line = lines.len();
        }
        lines.push(header_line(record, is_open, is_selected, focused));
        if is_open {
            lines.extend(detail_lines(record, &state.highlight_theme));
        }
    }

    // Scroll so the selected header stays on screen.
    let height = inner.height as usize;
    let scroll = selected_line.saturating_sub(height.saturating_sub(1));

    let para = Paragraph::new(Text::from(lines)).scroll((scroll as u16, 0));
    frame.render_widget(para, inner);
}

fn header_line(record: &Record, is_open: bool, is_selected: bool, focused: bool) -> Line<'static> {
    let glyph = if is_open { OPEN_GLYPH } else { CLOSED_GLYPH };
    let row_bg = if is_selected { SELECTED_BG } else { Color::Reset };
    let url_fg = if is_selected && focused { Color::White } else { TEXT_PRIMARY };
    let edit_style = if is_selected && focused {
        Style::default().fg(ACCENT_BLUE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BORDER_INACTIVE)
    };

    Line::from(vec![
        Span::styled(format!("{glyph} "), Style::default().fg(ACCENT_BLUE)),
        Span::styled(record.url.clone(), Style::default().fg(url_fg)),
        Span::raw("  "),
        Span::styled("[e] Edit", edit_style),
    ])
    .style(Style::default().bg(row_bg))
}

fn detail_lines(record: &Record, theme: &str) -> Vec<Line<'static>> {
    let label = Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD);
    let mut lines = vec![Line::from(vec![
        Span::raw(DETAIL_INDENT),
        Span::styled("Method: ", label),
        Span::styled(
            record.method.as_str(),
            Style::default().fg(method_color(record.method)),
        ),
    ])];

    for (name, body) in [("Payload:", &record.payload), ("Response:", &record.response)] {
        lines.push(Line::from(vec![Span::raw(DETAIL_INDENT), Span::styled(name, label)]));
        lines.extend(body_lines(body, theme));
    }
    lines
}

/// Body text shown verbatim, highlighted when it looks like JSON or XML.
fn body_lines(body: &str, theme: &str) -> Vec<Line<'static>> {
    if body.is_empty() {
        return vec![Line::from(vec![
            Span::raw(DETAIL_INDENT),
            Span::styled("(empty)", Style::default().fg(BORDER_INACTIVE)),
        ])];
    }

    let text = match detect_lang(body) {
        "txt" => Text::raw(body.to_string()),
        lang => highlight_text(body, lang, theme),
    };
    text.lines
        .into_iter()
        .map(|mut line| {
            line.spans.insert(0, Span::raw(DETAIL_INDENT));
            line
        })
        .collect()
}
