use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::app_state::AppState;
use crate::state::focus::Focus;
use crate::state::form::FormField;
use crate::state::mode::Mode;
use crate::state::record::HttpMethod;
use crate::state::text::TextField;
use super::layout::{ACCENT_BLUE, BORDER_INACTIVE, TEXT_MUTED, TEXT_PRIMARY};

const EDIT_ACCENT: Color = Color::Rgb(224, 175, 104); // #e0af68

pub fn method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::Get => Color::Rgb(115, 218, 202),
        HttpMethod::Post => Color::Rgb(158, 206, 106),
        HttpMethod::Put => Color::Rgb(224, 175, 104),
        HttpMethod::Delete => Color::Rgb(247, 118, 142),
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.form;
    let focused = state.focus == Focus::Form;
    let border_color = match (focused, form.is_editing()) {
        (_, true) => EDIT_ACCENT,
        (true, false) => ACCENT_BLUE,
        (false, false) => BORDER_INACTIVE,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", form.title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width < 4 || inner.height < 10 {
        return;
    }

    // [url 3] [pattern 1] [method 1] [payload fill] [response fill] [submit 1]
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let active = |field: FormField| focused && form.field == field;
    let inserting = focused && state.mode == Mode::Insert;

    render_text_box(frame, chunks[0], " URL ", form.url_input(), active(FormField::Url), inserting, false);

    let pattern = Line::from(vec![
        Span::styled(" → ", Style::default().fg(TEXT_MUTED)),
        Span::styled(form.url(), Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(pattern), chunks[1]);

    render_method(frame, chunks[2], form.method, active(FormField::Method));

    render_text_box(frame, chunks[3], " Payload ", &form.payload, active(FormField::Payload), inserting, true);
    render_text_box(frame, chunks[4], " Response ", &form.response, active(FormField::Response), inserting, true);

    let submit_style = if active(FormField::Submit) {
        Style::default().fg(Color::Black).bg(ACCENT_BLUE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT_BLUE)
    };
    let submit = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("[ {} ]", form.submit_label()), submit_style),
    ]);
    frame.render_widget(Paragraph::new(submit), chunks[5]);
}

fn render_method(frame: &mut Frame, area: Rect, method: HttpMethod, active: bool) {
    let label_style = if active {
        Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_MUTED)
    };
    let arrow_style = Style::default().fg(if active { ACCENT_BLUE } else { BORDER_INACTIVE });
    let line = Line::from(vec![
        Span::styled(" Method: ", label_style),
        Span::styled("◂ ", arrow_style),
        Span::styled(
            method.as_str(),
            Style::default().fg(method_color(method)).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▸", arrow_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_text_box(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    field: &TextField,
    active: bool,
    inserting: bool,
    multiline: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if active { ACCENT_BLUE } else { BORDER_INACTIVE }))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // Keep the cursor inside the viewport.
    let (row, col) = field.row_col();
    let row = row as u16;
    let col = col as u16;
    let v_scroll = if multiline { row.saturating_sub(inner.height - 1) } else { 0 };
    let h_scroll = col.saturating_sub(inner.width - 1);

    let text = Paragraph::new(field.as_str())
        .style(Style::default().fg(TEXT_PRIMARY))
        .scroll((v_scroll, h_scroll));
    frame.render_widget(text, inner);

    if active && inserting {
        frame.set_cursor_position(Position {
            x: inner.x + col - h_scroll,
            y: inner.y + row - v_scroll,
        });
    }
}
