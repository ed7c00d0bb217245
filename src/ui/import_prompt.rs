use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::app_state::AppState;
use crate::ui::layout::{ACCENT_BLUE, BG, TEXT_MUTED, TEXT_PRIMARY};
use crate::ui::popup::centered_rows;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rows(60, 5, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_BLUE))
        .title(" Import from JSON ")
        .style(Style::default().bg(BG));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    // Input field, scrolled so the cursor stays visible
    let input = state.import_path.as_str();
    let cursor = state.import_path.cursor();
    let col = input[..cursor].chars().count() as u16;
    let h_scroll = col.saturating_sub(chunks[0].width.saturating_sub(1));

    let (before, cursor_char, after) = if cursor < input.len() {
        let ch = input[cursor..].chars().next().unwrap_or(' ');
        let next = cursor + ch.len_utf8();
        (&input[..cursor], ch.to_string(), &input[next..])
    } else {
        (input, "_".to_string(), "")
    };

    let input_line = Line::from(vec![
        Span::styled(before, Style::default().fg(TEXT_PRIMARY)),
        Span::styled(cursor_char, Style::default().bg(Color::White).fg(Color::Black)),
        Span::styled(after, Style::default().fg(TEXT_PRIMARY)),
    ]);

    frame.render_widget(Paragraph::new(input_line).scroll((0, h_scroll)), chunks[0]);

    // Set actual terminal cursor
    frame.set_cursor_position(Position {
        x: chunks[0].x + col - h_scroll,
        y: chunks[0].y,
    });

    // Separator
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "─".repeat(inner.width as usize),
            Style::default().fg(TEXT_MUTED),
        ))),
        chunks[1],
    );

    // Footer hints
    let hint = Line::from(vec![
        Span::styled("Enter", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" import  ", Style::default().fg(TEXT_MUTED)),
        Span::styled("Ctrl+U", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" clear  ", Style::default().fg(TEXT_MUTED)),
        Span::styled("Esc", Style::default().fg(TEXT_PRIMARY)),
        Span::styled(" cancel", Style::default().fg(TEXT_MUTED)),
    ]);
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().add_modifier(Modifier::DIM)),
        chunks[2],
    );
}
