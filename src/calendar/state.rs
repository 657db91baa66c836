//! Calendar widget state: selection, displayed month and cursor

use super::availability::{
    month_grid_metadata, Availability, AvailabilityGenerator, CalendarError, MonthGrid,
};
use super::slots::TimeSlot;
use chrono::{Datelike, Days, Months, NaiveDate};

/// Message shown when the horizon cannot be generated
pub const LOAD_ERROR: &str = "Unable to load calendar availability";

/// Mutable calendar state owned by the UI; regenerates through the generator
#[derive(Debug, Clone)]
pub struct CalendarState {
    generator: AvailabilityGenerator,
    days_ahead: u32,
    pub availability: Availability,
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<String>,
    /// First day of the displayed month
    pub current_month: NaiveDate,
    /// Day highlighted by keyboard navigation
    pub cursor: NaiveDate,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl CalendarState {
    pub fn new(generator: AvailabilityGenerator, days_ahead: u32, today: NaiveDate) -> Self {
        let mut state = Self {
            generator,
            days_ahead,
            availability: Availability::default(),
            selected_date: None,
            selected_time: None,
            current_month: first_of_month(today),
            cursor: today,
            is_loading: false,
            error: None,
        };
        state.refresh(today);
        state
    }

    /// Regenerate availability relative to `today`
    pub fn refresh(&mut self, today: NaiveDate) {
        self.is_loading = true;
        self.error = None;

        match self.generator.generate(self.days_ahead, today) {
            Ok(availability) => {
                tracing::debug!(
                    days = availability.entries().len(),
                    "generated booking availability"
                );
                self.availability = availability;
                if let Some(first) = self.availability.first_bookable_date() {
                    if !self.availability.is_date_bookable(self.cursor) {
                        self.move_cursor_to(first);
                    }
                }
                let still_bookable = self
                    .selected_date
                    .is_some_and(|date| self.availability.is_date_bookable(date));
                if !still_bookable {
                    self.clear_selection();
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to generate availability");
                self.availability = Availability::default();
                self.clear_selection();
                self.error = Some(LOAD_ERROR.to_string());
            }
        }

        self.is_loading = false;
    }

    /// Select a bookable date; clears the selected time
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if !self.availability.is_date_bookable(date) {
            return false;
        }
        if self.selected_date != Some(date) {
            self.selected_time = None;
        }
        self.selected_date = Some(date);
        self.move_cursor_to(date);
        true
    }

    /// Select a time on the selected date, if that slot is available
    pub fn select_time(&mut self, time: &str) -> bool {
        let available = self
            .slots_for_selected()
            .iter()
            .any(|slot| slot.time == time && slot.available);
        if available {
            self.selected_time = Some(time.to_string());
        }
        available
    }

    pub fn clear_selection(&mut self) {
        self.selected_date = None;
        self.selected_time = None;
    }

    pub fn slots_for_selected(&self) -> &[TimeSlot] {
        match self.selected_date {
            Some(date) => self.availability.lookup_by_date(date),
            None => &[],
        }
    }

    pub fn slots_for_cursor(&self) -> &[TimeSlot] {
        self.availability.lookup_by_date(self.cursor)
    }

    pub fn next_month(&mut self) {
        if let Some(next) = self.current_month.checked_add_months(Months::new(1)) {
            self.current_month = next;
            self.cursor = next;
        }
    }

    pub fn prev_month(&mut self) {
        if let Some(prev) = self.current_month.checked_sub_months(Months::new(1)) {
            self.current_month = prev;
            self.cursor = prev;
        }
    }

    /// Move the cursor by whole days; the displayed month follows it
    pub fn move_cursor(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.move_cursor_to(date);
        }
    }

    fn move_cursor_to(&mut self, date: NaiveDate) {
        self.cursor = date;
        self.current_month = first_of_month(date);
    }

    pub fn month_grid(&self) -> Result<MonthGrid, CalendarError> {
        month_grid_metadata(self.current_month.year(), self.current_month.month())
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Short display form, e.g. `Mon, Oct 19`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}
