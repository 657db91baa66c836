//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// How a field box should be drawn
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    /// Shown in the bottom border; turns the border red
    pub error: Option<&'a str>,
    /// Shown instead of an empty value
    pub placeholder: &'a str,
}

fn border_style(field: &FieldView) -> Style {
    if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let cursor = if field.is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let content = if field.value.is_empty() && !field.is_active {
        Paragraph::new(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        ))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.value, style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(&field));
    if let Some(error) = field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
