//! UI module for rendering the TUI

mod calendar;
mod components;
mod confirmation;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Width of the calendar and slot column
const CALENDAR_WIDTH: u16 = 30;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Booking => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(CALENDAR_WIDTH), Constraint::Min(40)])
                .split(main_area);

            let left = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(calendar::MONTH_HEIGHT),
                    Constraint::Min(0),
                ])
                .split(columns[0]);

            calendar::draw_month(frame, left[0], app);
            calendar::draw_slots(frame, left[1], app);
            forms::draw_booking_form(frame, columns[1], app);
        }
        View::Confirmation => confirmation::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
