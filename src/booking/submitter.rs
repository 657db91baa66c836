//! Submit handler that turns a validated booking form into a stored record

use super::form::{BookingField, BookingFormData};
use super::store::BookingStore;
use crate::form::{validate_fields, SubmitHandler, SubmitOutcome};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::watch;

pub const BOOKING_CREATED: &str = "Booking created successfully";
pub const MISSING_SLOT: &str = "Please select a date and time for your call";
pub const PAST_DATE: &str = "Please select a future date";

/// Writes one booking per successful submission
pub struct BookingSubmitter {
    store: Arc<dyn BookingStore>,
    /// Local date used to refuse bookings in the past
    today: watch::Receiver<NaiveDate>,
}

impl BookingSubmitter {
    pub fn new(store: Arc<dyn BookingStore>, today: watch::Receiver<NaiveDate>) -> Self {
        Self { store, today }
    }

    /// Re-check the values independently of the form that produced them
    fn rejection(&self, values: &BookingFormData) -> Option<String> {
        let mut errors = validate_fields(values);
        let today = *self.today.borrow();
        if values.date.is_some_and(|date| date < today) {
            errors.insert(BookingField::Date, PAST_DATE.to_string());
        }
        if errors.is_empty() {
            return None;
        }
        Some(errors.into_values().collect::<Vec<_>>().join(", "))
    }
}

#[async_trait]
impl SubmitHandler<BookingFormData> for BookingSubmitter {
    async fn submit(&self, values: &BookingFormData) -> Result<SubmitOutcome> {
        if let Some(message) = self.rejection(values) {
            tracing::warn!(%message, "booking rejected before writing");
            return Ok(SubmitOutcome::failed(message));
        }
        let Some(booking) = values.to_new_booking() else {
            return Ok(SubmitOutcome::failed(MISSING_SLOT));
        };

        // Double booking of a date/time is not prevented, only reported.
        match self
            .store
            .is_time_slot_available(booking.date, &booking.time)
            .await
        {
            Ok(true) => {}
            Ok(false) => tracing::warn!(
                date = %booking.date,
                time = %booking.time,
                "slot already holds a booking, storing another"
            ),
            Err(err) => tracing::warn!(error = %err, "slot availability check failed"),
        }

        match self.store.create(booking).await {
            Ok(record) => {
                tracing::info!(booking_id = %record.id, "booking submitted");
                Ok(SubmitOutcome::succeeded(BOOKING_CREATED, Some(record.id)))
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to create booking");
                Ok(SubmitOutcome::failed(err.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::memory::MemoryStore;
    use crate::booking::record::{BookingRecord, BookingStatus};
    use crate::booking::store::{MockBookingStore, StoreError};
    use chrono::{NaiveDate, Utc};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn today() -> watch::Receiver<NaiveDate> {
        let (_tx, rx) = watch::channel(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        rx
    }

    fn submitter(store: Arc<dyn BookingStore>) -> BookingSubmitter {
        BookingSubmitter::new(store, today())
    }

    fn form() -> BookingFormData {
        BookingFormData {
            first_name: "Jo".to_string(),
            last_name: "March".to_string(),
            email: "Jo@March.org".to_string(),
            company: "Pickwick".to_string(),
            job_title: "Writer".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 22),
            time: Some("11:00".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_success_returns_booking_id() {
        let store = Arc::new(MemoryStore::new());
        let submitter = submitter(store.clone());

        let outcome = submitter.submit(&form()).await.unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.message, BOOKING_CREATED);
        let id = outcome.reference.unwrap();
        let stored = store.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Jo March");
        assert_eq!(stored.email, "jo@march.org");
        assert_eq!(stored.status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn test_missing_time_fails_without_writing() {
        let mut store = MockBookingStore::new();
        store.expect_create().never();
        let submitter = submitter(Arc::new(store));
        let values = BookingFormData {
            time: None,
            ..form()
        };

        let outcome = submitter.submit(&values).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::failed("Please select a time slot"));
    }

    #[tokio::test]
    async fn test_past_date_and_bad_email_are_not_stored() {
        let store = Arc::new(MemoryStore::new());
        let submitter = submitter(store.clone());
        let values = BookingFormData {
            email: "not-an-email".to_string(),
            date: NaiveDate::from_ymd_opt(2001, 1, 1),
            ..form()
        };

        let outcome = submitter.submit(&values).await.unwrap();

        assert!(!outcome.success);
        assert_eq!(
            outcome.message,
            format!("Please enter a valid email address, {PAST_DATE}")
        );
        assert!(store.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_today_is_still_bookable() {
        let mut store = MockBookingStore::new();
        store
            .expect_is_time_slot_available()
            .returning(|_, _| Ok(true));
        store.expect_create().times(1).returning(|booking| {
            Ok(BookingRecord::pending("id".to_string(), booking, Utc::now()))
        });
        let submitter = submitter(Arc::new(store));
        let values = BookingFormData {
            date: NaiveDate::from_ymd_opt(2026, 10, 18),
            ..form()
        };

        assert!(submitter.submit(&values).await.unwrap().success);
    }

    #[tokio::test]
    async fn test_rejection_follows_date_rollover() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 22).unwrap();
        let (tx, rx) = watch::channel(date);
        let submitter = BookingSubmitter::new(Arc::new(MemoryStore::new()), rx);
        assert_eq!(submitter.rejection(&form()), None);

        tx.send_replace(date.succ_opt().unwrap());

        assert_eq!(submitter.rejection(&form()).as_deref(), Some(PAST_DATE));
    }

    #[tokio::test]
    async fn test_store_error_becomes_reported_failure() {
        let mut store = MockBookingStore::new();
        store
            .expect_is_time_slot_available()
            .returning(|_, _| Ok(true));
        store
            .expect_create()
            .times(1)
            .returning(|_| Err(StoreError::Duplicate("abc".to_string())));
        let submitter = submitter(Arc::new(store));

        let outcome = submitter.submit(&form()).await.unwrap();

        assert!(!outcome.success);
        assert_eq!(outcome.message, "booking abc already exists");
    }

    #[tokio::test]
    async fn test_taken_slot_is_still_written() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 22).unwrap();
        let mut store = MockBookingStore::new();
        store
            .expect_is_time_slot_available()
            .with(eq(date), eq("11:00"))
            .returning(|_, _| Ok(false));
        store.expect_create().times(1).returning(|booking| {
            Ok(BookingRecord::pending(
                "second".to_string(),
                booking,
                Utc::now(),
            ))
        });
        let submitter = submitter(Arc::new(store));

        let outcome = submitter.submit(&form()).await.unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.reference.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_failed_availability_check_does_not_block() {
        let mut store = MockBookingStore::new();
        store
            .expect_is_time_slot_available()
            .returning(|_, _| Err(StoreError::NotFound("index".to_string())));
        store.expect_create().times(1).returning(|booking| {
            Ok(BookingRecord::pending("id".to_string(), booking, Utc::now()))
        });
        let submitter = submitter(Arc::new(store));

        assert!(submitter.submit(&form()).await.unwrap().success);
    }
}
