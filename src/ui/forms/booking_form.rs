//! Booking details form

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::booking::{BookingField, BookingFormData, MAX_MESSAGE_CHARS};
use crate::calendar::{format_date, format_time};
use crate::form::{FormEngine, FormValues};
use crate::state::Focus;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::SUBMIT_HINT;
use chrono::NaiveTime;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

/// Draw the details form with the picked slot, banner and submit button
pub fn draw_booking_form(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.state.focus == Focus::Form;
    let block = Block::default()
        .title(" Your details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // First / last name
            Constraint::Length(FIELD_HEIGHT),  // Email / phone
            Constraint::Length(FIELD_HEIGHT),  // Company / job title
            Constraint::Min(5),                // Message
            Constraint::Length(FIELD_HEIGHT),  // Date / time
            Constraint::Length(1),             // Banner
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .split(inner);

    let pairs = [
        (BookingField::FirstName, BookingField::LastName),
        (BookingField::Email, BookingField::Phone),
        (BookingField::Company, BookingField::JobTitle),
        (BookingField::Date, BookingField::Time),
    ];
    let pair_rows = [rows[0], rows[1], rows[2], rows[4]];
    for ((left, right), row) in pairs.into_iter().zip(pair_rows) {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row);
        draw_booking_field(frame, halves[0], app, left);
        draw_booking_field(frame, halves[1], app, right);
    }
    draw_booking_field(frame, rows[3], app, BookingField::Message);

    draw_banner(frame, rows[5], &app.form);

    let state = app.form.state();
    let label = if state.is_submitting {
        "Booking...".to_string()
    } else {
        format!("Book call ({SUBMIT_HINT})")
    };
    let button_width = (label.chars().count() as u16 + 4).min(rows[6].width);
    let button_area = Rect {
        width: button_width,
        ..rows[6]
    };
    render_button(
        frame,
        button_area,
        &label,
        false,
        !state.is_submitting,
        Some(Color::Green),
    );
}

fn draw_booking_field(frame: &mut Frame, area: Rect, app: &App, field: BookingField) {
    let Some(descriptor) = BookingFormData::descriptor(field) else {
        return;
    };
    let values = app.form.values();
    let is_active = app.state.focus == Focus::Form && app.state.active_form_field() == Some(field);

    let value = display_value(values, field);
    let label = if field == BookingField::Message {
        format!(
            "{} ({}/{MAX_MESSAGE_CHARS})",
            descriptor.label,
            values.message.chars().count()
        )
    } else {
        descriptor.label.to_string()
    };
    let placeholder = match field {
        BookingField::Date => "pick a day in the calendar",
        BookingField::Time => "pick a time slot",
        BookingField::Phone | BookingField::Message => "(optional)",
        _ => "",
    };

    draw_field(
        frame,
        area,
        FieldView {
            label: &label,
            value: &value,
            is_active,
            is_multiline: descriptor.is_multiline(),
            error: app.form.field_error(field),
            placeholder,
        },
    );
}

/// Text shown in a field box; picked values use their display form
fn display_value(values: &BookingFormData, field: BookingField) -> String {
    match field {
        BookingField::Date => values.date.map(format_date).unwrap_or_default(),
        BookingField::Time => values
            .time
            .as_deref()
            .and_then(|time| NaiveTime::parse_from_str(time, "%H:%M").ok())
            .map(format_time)
            .unwrap_or_default(),
        other => values.value(other).as_text().to_string(),
    }
}

fn draw_banner(frame: &mut Frame, area: Rect, form: &FormEngine<BookingFormData>) {
    let state = form.state();
    let line = if state.is_submitting {
        Line::from(Span::styled(
            "Submitting your booking...",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = &state.submit_error {
        Line::from(Span::styled(
            format!("✗ {error}"),
            Style::default().fg(Color::Red),
        ))
    } else if let Some(success) = &state.submit_success {
        Line::from(Span::styled(
            format!("✓ {}", success.text),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}
