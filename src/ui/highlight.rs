use std::sync::LazyLock;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Guess a syntax from the first non-blank character.
pub fn detect_lang(text: &str) -> &'static str {
    let t = text.trim_start();
    if t.starts_with('{') || t.starts_with('[') {
        "json"
    } else if t.starts_with('<') {
        "xml"
    } else {
        "txt"
    }
}

/// Highlight `text` for display. Falls back to unstyled text when the
/// theme is unknown or a line fails to highlight; the characters shown are
/// always exactly those of `text`.
pub fn highlight_text(text: &str, lang: &str, theme: &str) -> Text<'static> {
    let syntax = SYNTAX_SET
        .find_syntax_by_extension(lang)
        .or_else(|| SYNTAX_SET.find_syntax_by_name(lang))
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let Some(theme) = THEME_SET.themes.get(theme) else {
        return Text::raw(text.to_string());
    };

    let mut h = HighlightLines::new(syntax, theme);
    let mut lines: Vec<Line<'static>> = Vec::new();

    for line in LinesWithEndings::from(text) {
        match h.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => {
                let spans: Vec<Span<'static>> = ranges
                    .into_iter()
                    .map(|(style, content)| {
                        let fg = style.foreground;
                        Span::styled(
                            content.trim_end_matches(['\r', '\n']).to_string(),
                            Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                        )
                    })
                    .collect();
                lines.push(Line::from(spans));
            }
            Err(_) => lines.push(Line::raw(line.trim_end_matches(['\r', '\n']).to_string())),
        }
    }

    Text::from(lines)
}
