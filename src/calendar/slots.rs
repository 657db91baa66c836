//! Time slots offered on every bookable day

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Slot length in minutes
pub const SLOT_MINUTES: u32 = 30;

/// Booking windows as `[start, end)` minutes past midnight
const SLOT_WINDOWS: [(u32, u32); 2] = [(9 * 60, 12 * 60), (14 * 60, 17 * 60)];

/// A single bookable window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// 24-hour `HH:MM`
    pub time: String,
    pub available: bool,
    /// 12-hour display form, e.g. `02:30 PM`
    pub formatted_time: String,
}

impl TimeSlot {
    pub fn new(time: NaiveTime, available: bool) -> Self {
        Self {
            time: time.format("%H:%M").to_string(),
            available,
            formatted_time: format_time(time),
        }
    }

    pub fn hour(&self) -> Option<u32> {
        NaiveTime::parse_from_str(&self.time, "%H:%M")
            .ok()
            .map(|t| t.hour())
    }
}

/// 12-hour display string for a slot start
pub fn format_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// The fixed slot table: 09:00–11:30 and 14:00–16:30, every 30 minutes
pub fn standard_slots() -> Vec<TimeSlot> {
    SLOT_WINDOWS
        .iter()
        .flat_map(|&(start, end)| (start..end).step_by(SLOT_MINUTES as usize))
        .filter_map(|minutes| NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0))
        .map(|time| TimeSlot::new(time, true))
        .collect()
}
