//! Application state definitions

use crate::booking::{BookingField, BookingFormData};
use crate::form::FormValues;
use chrono::NaiveDate;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Booking,
    /// Shown after a booking has been stored
    Confirmation,
}

/// Which pane of the booking view receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Calendar,
    Slots,
    Form,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::Calendar => Self::Slots,
            Self::Slots => Self::Form,
            Self::Form => Self::Calendar,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Calendar => Self::Form,
            Self::Slots => Self::Calendar,
            Self::Form => Self::Slots,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Calendar => "Calendar",
            Self::Slots => "Time slots",
            Self::Form => "Details",
        }
    }
}

/// A booking that was accepted by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedBooking {
    pub reference: Option<String>,
    pub name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: String,
}

impl ConfirmedBooking {
    /// Build from the values that were submitted
    pub fn from_values(values: &BookingFormData, reference: Option<String>) -> Option<Self> {
        let booking = values.to_new_booking()?;
        Some(Self {
            reference,
            name: booking.name,
            email: booking.email,
            date: booking.date,
            time: booking.time,
        })
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub focus: Focus,

    // Form
    /// Index into the typed (editable) booking fields
    pub active_field: usize,
    /// Index into the time slots of the selected date
    pub slot_index: usize,

    // Results
    pub confirmation: Option<ConfirmedBooking>,

    // UI state
    pub status_message: Option<String>,
    error_queue: VecDeque<String>,
}

impl AppState {
    /// Fields edited by typing, in display order
    pub fn editable_fields() -> Vec<BookingField> {
        BookingFormData::descriptors()
            .iter()
            .filter(|d| d.is_editable())
            .map(|d| d.field)
            .collect()
    }

    pub fn active_form_field(&self) -> Option<BookingField> {
        Self::editable_fields().get(self.active_field).copied()
    }

    /// Move to the next typed field, wrapping around
    pub fn next_field(&mut self) {
        let count = Self::editable_fields().len();
        if count > 0 {
            self.active_field = (self.active_field + 1) % count;
        }
    }

    /// Move to the previous typed field, wrapping around
    pub fn prev_field(&mut self) {
        let count = Self::editable_fields().len();
        if count > 0 {
            self.active_field = (self.active_field + count - 1) % count;
        }
    }

    /// Focus a specific typed field; returns false for picked fields
    pub fn focus_field(&mut self, field: BookingField) -> bool {
        match Self::editable_fields().iter().position(|f| *f == field) {
            Some(index) => {
                self.focus = Focus::Form;
                self.active_field = index;
                true
            }
            None => false,
        }
    }

    pub fn move_slot_down(&mut self, count: usize) {
        if count > 0 && self.slot_index < count - 1 {
            self.slot_index += 1;
        }
    }

    pub fn move_slot_up(&mut self) {
        self.slot_index = self.slot_index.saturating_sub(1);
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently on screen
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Back to an empty booking view
    pub fn start_new_booking(&mut self) {
        self.current_view = View::Booking;
        self.focus = Focus::Calendar;
        self.active_field = 0;
        self.slot_index = 0;
        self.confirmation = None;
    }
}
