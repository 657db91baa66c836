//! Booking calendar: static availability and the state a calendar widget
//! drives over it

mod availability;
mod slots;
mod state;

pub use availability::{
    month_grid_metadata, Availability, AvailabilityGenerator, CalendarAvailability,
    CalendarError, MonthGrid, DEFAULT_DAYS_AHEAD, DEFAULT_WORKING_DAYS,
};
pub use slots::{format_time, standard_slots, TimeSlot, SLOT_MINUTES};
pub use state::{format_date, CalendarState, LOAD_ERROR};
