//! In-memory booking table shared by the store implementations

use super::record::{BookingRecord, BookingStatus};
use super::store::{StoreError, StoreResult};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

/// Bookings keyed by identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingTable {
    rows: BTreeMap<String, BookingRecord>,
}

impl BookingTable {
    pub fn from_records(records: Vec<BookingRecord>) -> Self {
        Self {
            rows: records.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Insert only if the identifier is not already present
    pub fn insert_new(&mut self, record: BookingRecord) -> StoreResult<()> {
        if self.rows.contains_key(&record.id) {
            return Err(StoreError::Duplicate(record.id));
        }
        self.rows.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&BookingRecord> {
        self.rows.get(id)
    }

    pub fn update_status(
        &mut self,
        id: &str,
        status: BookingStatus,
        now: DateTime<Utc>,
    ) -> StoreResult<BookingRecord> {
        let record = self
            .rows
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.status = status;
        record.updated_at = now;
        Ok(record.clone())
    }

    pub fn remove(&mut self, id: &str) -> StoreResult<BookingRecord> {
        self.rows
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    pub fn list(&self, limit: Option<usize>) -> Vec<BookingRecord> {
        let mut records: Vec<_> = self.rows.values().cloned().collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        records
    }

    pub fn for_date(&self, date: NaiveDate) -> Vec<BookingRecord> {
        let mut records: Vec<_> = self
            .rows
            .values()
            .filter(|r| r.date == date)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.time.cmp(&b.time));
        records
    }

    /// Case-insensitive match on the stored address
    pub fn by_email(&self, email: &str) -> Vec<BookingRecord> {
        let wanted = email.trim().to_lowercase();
        let mut records: Vec<_> = self
            .rows
            .values()
            .filter(|r| r.email.to_lowercase() == wanted)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::record::NewBooking;
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    fn record(id: &str, day: u32, time: &str, email: &str, age_minutes: i64) -> BookingRecord {
        let created = Utc::now() - Duration::minutes(age_minutes);
        BookingRecord::pending(
            id.to_string(),
            NewBooking {
                name: "Test Person".to_string(),
                email: email.to_string(),
                phone: String::new(),
                date: NaiveDate::from_ymd_opt(2026, 10, day).unwrap(),
                time: time.to_string(),
                message: String::new(),
            },
            created,
        )
    }

    #[test]
    fn test_insert_new_refuses_duplicate_id() {
        let mut table = BookingTable::default();
        table.insert_new(record("a", 20, "09:00", "x@y.z", 0)).unwrap();
        let err = table
            .insert_new(record("a", 21, "10:00", "other@y.z", 0))
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(id) if id == "a"));
        assert_eq!(table.get("a").unwrap().time, "09:00");
    }

    #[test]
    fn test_same_slot_different_ids_both_stored() {
        let mut table = BookingTable::default();
        table.insert_new(record("a", 20, "09:00", "x@y.z", 0)).unwrap();
        table.insert_new(record("b", 20, "09:00", "w@y.z", 0)).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_update_status_bumps_updated_at() {
        let mut table = BookingTable::default();
        let original = record("a", 20, "09:00", "x@y.z", 10);
        table.insert_new(original.clone()).unwrap();
        let now = Utc::now();
        let updated = table
            .update_status("a", BookingStatus::Confirmed, now)
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Confirmed);
        assert_eq!(updated.updated_at, now);
        assert_eq!(updated.created_at, original.created_at);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut table = BookingTable::default();
        assert!(matches!(
            table.update_status("nope", BookingStatus::Cancelled, Utc::now()),
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(table.remove("nope"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_list_oldest_first_with_limit() {
        let table = BookingTable::from_records(vec![
            record("new", 20, "09:00", "x@y.z", 1),
            record("old", 20, "09:30", "x@y.z", 30),
            record("mid", 20, "10:00", "x@y.z", 10),
        ]);
        let ids: Vec<_> = table.list(Some(2)).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["old", "mid"]);
        assert_eq!(table.list(None).len(), 3);
    }

    #[test]
    fn test_for_date_ordered_by_time() {
        let table = BookingTable::from_records(vec![
            record("a", 20, "14:00", "x@y.z", 0),
            record("b", 20, "09:30", "x@y.z", 0),
            record("c", 21, "09:00", "x@y.z", 0),
        ]);
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        let times: Vec<_> = table.for_date(date).into_iter().map(|r| r.time).collect();
        assert_eq!(times, vec!["09:30", "14:00"]);
    }

    #[test]
    fn test_by_email_ignores_case() {
        let table = BookingTable::from_records(vec![
            record("a", 20, "14:00", "ada@example.com", 0),
            record("b", 20, "09:30", "bob@example.com", 0),
        ]);
        let found = table.by_email(" ADA@example.com");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "a");
    }
}
