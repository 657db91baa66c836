//! Static availability generation and month-grid arithmetic

use super::slots::{standard_slots, TimeSlot};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default booking horizon in days
pub const DEFAULT_DAYS_AHEAD: u32 = 30;

/// Monday to Friday
pub const DEFAULT_WORKING_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("date out of range: {reference} + {days} days")]
    DateOutOfRange { reference: NaiveDate, days: u32 },
    #[error("invalid month {month} in year {year}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Slots offered on one eligible date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarAvailability {
    pub date: NaiveDate,
    pub time_slots: Vec<TimeSlot>,
}

/// A generated booking horizon
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Availability {
    entries: Vec<CalendarAvailability>,
}

impl Availability {
    pub fn entries(&self) -> &[CalendarAvailability] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slots for `date`; empty outside the horizon or on non-working days
    pub fn lookup_by_date(&self, date: NaiveDate) -> &[TimeSlot] {
        self.entries
            .iter()
            .find(|entry| entry.date == date)
            .map(|entry| entry.time_slots.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_date_bookable(&self, date: NaiveDate) -> bool {
        self.lookup_by_date(date).iter().any(|slot| slot.available)
    }

    pub fn first_bookable_date(&self) -> Option<NaiveDate> {
        self.entries
            .iter()
            .find(|entry| entry.time_slots.iter().any(|slot| slot.available))
            .map(|entry| entry.date)
    }
}

/// Produces a fixed horizon of working days, each with the same slot table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityGenerator {
    working_days: Vec<Weekday>,
    slots: Vec<TimeSlot>,
}

impl Default for AvailabilityGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_WORKING_DAYS.to_vec())
    }
}

impl AvailabilityGenerator {
    pub fn new(working_days: Vec<Weekday>) -> Self {
        Self {
            working_days,
            slots: standard_slots(),
        }
    }

    pub fn working_days(&self) -> &[Weekday] {
        &self.working_days
    }

    /// One entry per working day in `reference + 1 ..= reference + days_ahead`
    pub fn generate(
        &self,
        days_ahead: u32,
        reference: NaiveDate,
    ) -> Result<Availability, CalendarError> {
        let mut entries = Vec::new();
        for offset in 1..=days_ahead {
            let date = reference
                .checked_add_days(Days::new(u64::from(offset)))
                .ok_or(CalendarError::DateOutOfRange {
                    reference,
                    days: offset,
                })?;
            if !self.working_days.contains(&date.weekday()) {
                continue;
            }
            entries.push(CalendarAvailability {
                date,
                time_slots: self.slots.clone(),
            });
        }
        Ok(Availability { entries })
    }
}

/// What a calendar grid needs to lay out a month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Column of day 1, 0 = Sunday
    pub starting_weekday: u32,
}

impl MonthGrid {
    /// Number of week rows the grid spans
    pub fn week_rows(&self) -> u32 {
        (self.starting_weekday + self.days_in_month).div_ceil(7)
    }

    /// Day of month shown at `(row, column)`, if any
    pub fn day_at(&self, row: u32, column: u32) -> Option<u32> {
        let index = row * 7 + column;
        (index >= self.starting_weekday && index < self.starting_weekday + self.days_in_month)
            .then(|| index - self.starting_weekday + 1)
    }
}

/// Day count and first-day column of `year`/`month`
pub fn month_grid_metadata(year: i32, month: u32) -> Result<MonthGrid, CalendarError> {
    let invalid = CalendarError::InvalidMonth { year, month };
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(invalid.clone())?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(invalid)?;

    Ok(MonthGrid {
        year,
        month,
        days_in_month: (next - first).num_days() as u32,
        starting_weekday: first.weekday().num_days_from_sunday(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod generate {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_friday_one_day_ahead_is_empty() {
            // 2026-10-16 is a Friday
            let friday = date(2026, 10, 16);
            assert_eq!(friday.weekday(), Weekday::Fri);
            let availability = AvailabilityGenerator::default().generate(1, friday).unwrap();
            assert!(availability.is_empty());
        }

        #[test]
        fn test_excludes_reference_date() {
            let monday = date(2026, 10, 19);
            let availability = AvailabilityGenerator::default().generate(1, monday).unwrap();
            let dates: Vec<_> = availability.entries().iter().map(|e| e.date).collect();
            assert_eq!(dates, vec![date(2026, 10, 20)]);
        }

        #[test]
        fn test_only_working_days_for_any_horizon() {
            let generator = AvailabilityGenerator::default();
            let reference = date(2026, 10, 18);
            for days_ahead in 0..60 {
                let availability = generator.generate(days_ahead, reference).unwrap();
                assert!(availability
                    .entries()
                    .iter()
                    .all(|e| DEFAULT_WORKING_DAYS.contains(&e.date.weekday())));
            }
        }

        #[test]
        fn test_two_weeks_has_ten_entries_of_twelve_slots() {
            let availability = AvailabilityGenerator::default()
                .generate(14, date(2026, 10, 18))
                .unwrap();
            assert_eq!(availability.entries().len(), 10);
            assert!(availability
                .entries()
                .iter()
                .all(|e| e.time_slots.len() == 12));
        }

        #[test]
        fn test_custom_working_days() {
            let generator = AvailabilityGenerator::new(vec![Weekday::Sat]);
            let availability = generator.generate(7, date(2026, 10, 18)).unwrap();
            let dates: Vec<_> = availability.entries().iter().map(|e| e.date).collect();
            assert_eq!(dates, vec![date(2026, 10, 24)]);
        }

        #[test]
        fn test_is_deterministic() {
            let generator = AvailabilityGenerator::default();
            let reference = date(2026, 2, 20);
            assert_eq!(
                generator.generate(30, reference).unwrap(),
                generator.generate(30, reference).unwrap()
            );
        }

        #[test]
        fn test_dates_are_unique_and_ordered() {
            let availability = AvailabilityGenerator::default()
                .generate(45, date(2026, 12, 20))
                .unwrap();
            let dates: Vec<_> = availability.entries().iter().map(|e| e.date).collect();
            assert!(dates.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn test_overflow_is_an_error() {
            let result = AvailabilityGenerator::default().generate(5, NaiveDate::MAX);
            assert_eq!(
                result,
                Err(CalendarError::DateOutOfRange {
                    reference: NaiveDate::MAX,
                    days: 1
                })
            );
        }
    }

    mod lookup {
        use super::*;
        use pretty_assertions::assert_eq;

        fn horizon() -> Availability {
            AvailabilityGenerator::default()
                .generate(30, date(2026, 10, 18))
                .unwrap()
        }

        #[test]
        fn test_lookup_inside_horizon() {
            let availability = horizon();
            assert_eq!(availability.lookup_by_date(date(2026, 10, 19)).len(), 12);
            assert!(availability.is_date_bookable(date(2026, 10, 19)));
        }

        #[test]
        fn test_lookup_outside_horizon_is_empty() {
            let availability = horizon();
            for outside in [
                date(2026, 10, 18),
                date(2026, 10, 1),
                date(2026, 11, 30),
                date(2030, 1, 1),
            ] {
                assert!(availability.lookup_by_date(outside).is_empty());
                assert!(!availability.is_date_bookable(outside));
            }
        }

        #[test]
        fn test_weekend_not_bookable() {
            let availability = horizon();
            assert!(!availability.is_date_bookable(date(2026, 10, 24)));
        }

        #[test]
        fn test_first_bookable_date() {
            assert_eq!(horizon().first_bookable_date(), Some(date(2026, 10, 19)));
            assert_eq!(Availability::default().first_bookable_date(), None);
        }
    }

    mod month_grid {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_october_2026() {
            let grid = month_grid_metadata(2026, 10).unwrap();
            assert_eq!(grid.days_in_month, 31);
            // 2026-10-01 is a Thursday
            assert_eq!(grid.starting_weekday, 4);
            assert_eq!(grid.week_rows(), 5);
        }

        #[test]
        fn test_leap_february() {
            assert_eq!(month_grid_metadata(2028, 2).unwrap().days_in_month, 29);
            assert_eq!(month_grid_metadata(2026, 2).unwrap().days_in_month, 28);
        }

        #[test]
        fn test_december_rolls_year() {
            assert_eq!(month_grid_metadata(2026, 12).unwrap().days_in_month, 31);
        }

        #[test]
        fn test_invalid_month() {
            assert_eq!(
                month_grid_metadata(2026, 13),
                Err(CalendarError::InvalidMonth {
                    year: 2026,
                    month: 13
                })
            );
        }

        #[test]
        fn test_day_at() {
            let grid = month_grid_metadata(2026, 10).unwrap();
            assert_eq!(grid.day_at(0, 3), None);
            assert_eq!(grid.day_at(0, 4), Some(1));
            assert_eq!(grid.day_at(4, 6), Some(31));
            assert_eq!(grid.day_at(5, 0), None);
        }
    }
}
