//! Booking store persisted as a JSON document on disk

use super::record::{BookingRecord, BookingStatus, NewBooking};
use super::store::{BookingStore, StoreResult};
use super::table::BookingTable;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Whole-file JSON store; every write rewrites the file atomically
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    table: RwLock<BookingTable>,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let table = match fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => BookingTable::default(),
            Ok(content) => BookingTable::from_records(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BookingTable::default(),
            Err(err) => return Err(err.into()),
        };
        tracing::info!(path = %path.display(), bookings = table.len(), "opened booking store");
        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, table: &BookingTable) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&table.list(None))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl BookingStore for JsonFileStore {
    async fn create(&self, booking: NewBooking) -> StoreResult<BookingRecord> {
        let record = BookingRecord::pending(Uuid::new_v4().to_string(), booking, Utc::now());
        let mut table = self.table.write().await;
        let mut next = table.clone();
        next.insert_new(record.clone())?;
        self.persist(&next).await?;
        *table = next;
        tracing::info!(
            booking_id = %record.id,
            date = %record.date,
            time = %record.time,
            "booking created"
        );
        Ok(record)
    }

    async fn get(&self, id: &str) -> StoreResult<Option<BookingRecord>> {
        Ok(self.table.read().await.get(id).cloned())
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> StoreResult<BookingRecord> {
        let mut table = self.table.write().await;
        let mut next = table.clone();
        let record = next.update_status(id, status, Utc::now())?;
        self.persist(&next).await?;
        *table = next;
        tracing::info!(booking_id = %id, %status, "booking status updated");
        Ok(record)
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
        let mut table = self.table.write().await;
        let mut next = table.clone();
        next.remove(id)?;
        self.persist(&next).await?;
        *table = next;
        tracing::info!(booking_id = %id, "booking deleted");
        Ok(())
    }
}
