//! Bookings: form values, records, persistence and the submit handler

mod file;
mod form;
mod memory;
mod record;
mod store;
mod submitter;
mod table;

pub use file::JsonFileStore;
pub use form::{BookingField, BookingFormData, MAX_MESSAGE_CHARS};
pub use memory::MemoryStore;
pub use record::{BookingRecord, BookingStatus, NewBooking};
pub use store::{BookingStore, StoreError, StoreResult};
#[cfg(test)]
pub use store::MockBookingStore;
pub use submitter::{BookingSubmitter, BOOKING_CREATED, MISSING_SLOT, PAST_DATE};
