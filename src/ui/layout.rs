//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::{Focus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Submit shortcut hint
pub const SUBMIT_HINT: &str = "^S:book";

/// Reserve the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Submission indicator
    let indicator = if app.form.state().is_submitting {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else if app.form.state().is_submitted {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Gray))
    };
    spans.push(indicator);

    if app.state.current_view == View::Booking {
        spans.push(Span::styled(
            format!("{} ", app.state.focus.label()),
            Style::default().fg(Color::Cyan),
        ));
    }

    let hints = get_view_hints(app.state.current_view, app.state.focus);
    spans.push(Span::styled(hints, Style::default().fg(Color::Black)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Render quit hint on the right
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View, focus: Focus) -> String {
    match (view, focus) {
        (View::Confirmation, _) => "y:copy ref  n:new booking  q:quit".to_string(),
        (View::Booking, Focus::Calendar) => {
            format!("h/j/k/l:move  [/]:month  Enter:pick  r:refresh  Tab:slots  {SUBMIT_HINT}")
        }
        (View::Booking, Focus::Slots) => {
            format!("j/k:move  Enter:pick  Esc:calendar  Tab:details  {SUBMIT_HINT}")
        }
        (View::Booking, Focus::Form) => {
            format!("Tab/S-Tab:field  Esc:calendar  {SUBMIT_HINT}")
        }
    }
}
