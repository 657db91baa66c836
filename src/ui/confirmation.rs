//! Confirmation view shown after a booking is stored

use crate::app::App;
use crate::calendar::{format_date, format_time};
use crate::state::ConfirmedBooking;
use chrono::NaiveTime;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(60),
            Constraint::Min(0),
        ])
        .split(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    let mut lines = Vec::new();
    if let Some(success) = &app.form.state().submit_success {
        lines.push(Line::from(Span::styled(
            success.text.clone(),
            Style::default().fg(Color::Green),
        )));
        lines.push(Line::from(""));
    }
    match &app.state.confirmation {
        Some(booking) => lines.extend(detail_lines(booking)),
        None => lines.push(Line::from("Your booking was received.")),
    }

    let block = Block::default()
        .title(Span::styled(
            " Booking confirmed ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        rows[1],
    );
}

fn detail_lines(booking: &ConfirmedBooking) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Name       ", label),
            Span::raw(booking.name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Email      ", label),
            Span::raw(booking.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("When       ", label),
            Span::styled(when(booking), Style::default().add_modifier(Modifier::BOLD)),
        ]),
    ];
    if let Some(reference) = &booking.reference {
        lines.push(Line::from(vec![
            Span::styled("Reference  ", label),
            Span::styled(reference.clone(), Style::default().fg(Color::Cyan)),
        ]));
    }
    lines
}

/// e.g. `Mon, Oct 19 at 09:00 AM`
fn when(booking: &ConfirmedBooking) -> String {
    let time = NaiveTime::parse_from_str(&booking.time, "%H:%M")
        .map(format_time)
        .unwrap_or_else(|_| booking.time.clone());
    format!("{} at {time}", format_date(booking.date))
}
