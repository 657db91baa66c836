//! Volatile booking store

use super::record::{BookingRecord, BookingStatus, NewBooking};
use super::store::{BookingStore, StoreResult};
use super::table::BookingTable;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Keeps bookings for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<BookingTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryStore {
    async fn create(&self, booking: NewBooking) -> StoreResult<BookingRecord> {
        let record = BookingRecord::pending(Uuid::new_v4().to_string(), booking, Utc::now());
        self.table.write().await.insert_new(record.clone())?;
        tracing::debug!(booking_id = %record.id, "booking stored in memory");
        Ok(record)
    }

    async fn get(&self, id: &str) -> StoreResult<Option<BookingRecord>> {
        Ok(self.table.read().await.get(id).cloned())
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> StoreResult<BookingRecord> {
        self.table
            .write()
            .await
            .update_status(id, status, Utc::now())
    }

    async fn list(&self, limit: Option<usize>) -> StoreResult<Vec<BookingRecord>> {
        Ok(self.table.read().await.list(limit))
    }

    async fn list_for_date(&self, date: NaiveDate) -> StoreResult<Vec<BookingRecord>> {
        Ok(self.table.read().await.for_date(date))
    }

    async fn list_by_email(&self, email: &str) -> StoreResult<Vec<BookingRecord>> {
        Ok(self.table.read().await.by_email(email))
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.table.write().await.remove(id).map(|_| ())
    }
}
