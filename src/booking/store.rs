//! Trait abstraction for booking persistence to enable mocking in tests

use super::record::{BookingRecord, BookingStatus, NewBooking};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Conditional insert refused: the identifier is already taken
    #[error("booking {0} already exists")]
    Duplicate(String),
    #[error("booking {0} not found")]
    NotFound(String),
    #[error("booking store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("booking store data is malformed: {0}")]
    Format(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store for bookings
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Insert a new pending booking under a freshly generated identifier.
    /// Never overwrites an existing record.
    async fn create(&self, booking: NewBooking) -> StoreResult<BookingRecord>;

    async fn get(&self, id: &str) -> StoreResult<Option<BookingRecord>>;

    /// Change the status of an existing booking
    async fn update_status(&self, id: &str, status: BookingStatus) -> StoreResult<BookingRecord>;

    /// All bookings, oldest first, optionally capped
    async fn list(&self, limit: Option<usize>) -> StoreResult<Vec<BookingRecord>>;

    /// Bookings on one date, ordered by time
    async fn list_for_date(&self, date: NaiveDate) -> StoreResult<Vec<BookingRecord>>;

    async fn list_by_email(&self, email: &str) -> StoreResult<Vec<BookingRecord>>;

    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// True when no non-cancelled booking holds `date`/`time`.
    ///
    /// Advisory only: nothing stops a concurrent writer from taking the slot
    /// between this check and a `create`.
    async fn is_time_slot_available(&self, date: NaiveDate, time: &str) -> StoreResult<bool> {
        let bookings = self.list_for_date(date).await?;
        Ok(!bookings
            .iter()
            .any(|b| b.time == time && b.status.holds_slot()))
    }
}
