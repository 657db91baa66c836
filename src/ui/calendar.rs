//! Month grid and time slot list

use crate::app::App;
use crate::calendar::{format_date, CalendarState, MonthGrid, TimeSlot};
use crate::state::Focus;
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Borders + weekday header + six week rows
pub const MONTH_HEIGHT: u16 = 9;

const WEEKDAY_HEADER: &str = " Su Mo Tu We Th Fr Sa";

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw the displayed month with bookable days highlighted
pub fn draw_month(frame: &mut Frame, area: Rect, app: &App) {
    let calendar = &app.calendar;
    let focused = app.state.focus == Focus::Calendar;

    let block = Block::default()
        .title(format!(" {} ", calendar.current_month.format("%B %Y")))
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    if let Some(error) = &calendar.error {
        let content = Paragraph::new(error.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let lines = match calendar.month_grid() {
        Ok(grid) => month_lines(calendar, &grid, focused),
        Err(err) => vec![Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn month_lines(calendar: &CalendarState, grid: &MonthGrid, focused: bool) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        WEEKDAY_HEADER,
        Style::default().fg(Color::Gray),
    ))];

    for row in 0..grid.week_rows() {
        let mut spans = Vec::with_capacity(7);
        for column in 0..7 {
            let cell = grid.day_at(row, column).and_then(|day| {
                NaiveDate::from_ymd_opt(grid.year, grid.month, day).map(|date| (day, date))
            });
            match cell {
                Some((day, date)) => spans.push(Span::styled(
                    format!("{day:>3}"),
                    day_style(calendar, date, focused),
                )),
                None => spans.push(Span::raw("   ")),
            }
        }
        lines.push(Line::from(spans));
    }

    lines
}

fn day_style(calendar: &CalendarState, date: NaiveDate, focused: bool) -> Style {
    let mut style = if calendar.selected_date == Some(date) {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else if calendar.availability.is_date_bookable(date) {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    if date == calendar.cursor {
        style = if focused {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style.add_modifier(Modifier::UNDERLINED)
        };
    }
    style
}

/// Draw the time slots of the selected date, grouped by morning and afternoon
pub fn draw_slots(frame: &mut Frame, area: Rect, app: &App) {
    let calendar = &app.calendar;
    let focused = app.state.focus == Focus::Slots;

    let title = match calendar.selected_date {
        Some(date) => format!(" {} ", format_date(date)),
        None => " Time slots ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let slots = calendar.slots_for_selected();
    if slots.is_empty() {
        let content = Paragraph::new("Select a date to see\navailable times.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let mut items = Vec::with_capacity(slots.len() + 2);
    let mut last_period = None;
    for (idx, slot) in slots.iter().enumerate() {
        let period = slot_period(slot);
        if last_period != Some(period) {
            items.push(ListItem::new(Line::from(Span::styled(
                period,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ))));
            last_period = Some(period);
        }

        let is_cursor = focused && idx == app.state.slot_index;
        let is_selected = calendar.selected_time.as_deref() == Some(slot.time.as_str());
        let prefix = if is_cursor { "▸ " } else { "  " };

        let style = if !slot.available {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else if is_cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let marker = if is_selected { " ✓" } else { "" };

        items.push(ListItem::new(Line::from(vec![
            Span::styled(prefix, Style::default().fg(Color::Cyan)),
            Span::styled(slot.formatted_time.clone(), style),
            Span::styled(marker, Style::default().fg(Color::Green)),
        ])));
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn slot_period(slot: &TimeSlot) -> &'static str {
    match slot.hour() {
        Some(hour) if hour < 12 => "Morning",
        _ => "Afternoon",
    }
}
