//! Booking form values and their field descriptors

use super::record::NewBooking;
use crate::form::{
    is_valid_email, is_valid_phone, FieldDescriptor, FieldKind, FieldValue, FormValues,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Longest accepted message, in characters
pub const MAX_MESSAGE_CHARS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    FirstName,
    LastName,
    Email,
    Company,
    JobTitle,
    Phone,
    Message,
    Date,
    Time,
}

/// Values collected by the booking form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub job_title: String,
    pub phone: String,
    pub message: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl BookingFormData {
    /// Compose the store payload; `None` until a date and time are chosen
    pub fn to_new_booking(&self) -> Option<NewBooking> {
        let date = self.date?;
        let time = self.time.clone()?;
        Some(NewBooking {
            name: format!("{} {}", self.first_name.trim(), self.last_name.trim()),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
            date,
            time,
            message: self.message.clone(),
        })
    }
}

fn required(value: &FieldValue, message: &str) -> Option<String> {
    value.is_blank().then(|| message.to_string())
}

fn name_rule(value: &FieldValue, label: &str) -> Option<String> {
    if value.is_blank() {
        Some(format!("{label} is required"))
    } else if value.char_count() < 2 {
        Some(format!("{label} must be at least 2 characters"))
    } else {
        None
    }
}

fn validate_first_name(value: &FieldValue) -> Option<String> {
    name_rule(value, "First name")
}

fn validate_last_name(value: &FieldValue) -> Option<String> {
    name_rule(value, "Last name")
}

fn validate_email(value: &FieldValue) -> Option<String> {
    if value.is_blank() {
        Some("Email is required".to_string())
    } else if !is_valid_email(value.as_text()) {
        Some("Please enter a valid email address".to_string())
    } else {
        None
    }
}

fn validate_company(value: &FieldValue) -> Option<String> {
    required(value, "Company name is required")
}

fn validate_job_title(value: &FieldValue) -> Option<String> {
    required(value, "Job title is required")
}

fn validate_phone(value: &FieldValue) -> Option<String> {
    let phone = value.as_text();
    (!phone.is_empty() && !is_valid_phone(phone))
        .then(|| "Please enter a valid phone number".to_string())
}

fn validate_message(value: &FieldValue) -> Option<String> {
    (value.char_count() > MAX_MESSAGE_CHARS)
        .then(|| format!("Message must be less than {MAX_MESSAGE_CHARS} characters"))
}

fn validate_date(value: &FieldValue) -> Option<String> {
    required(value, "Please select a date")
}

fn validate_time(value: &FieldValue) -> Option<String> {
    required(value, "Please select a time slot")
}

static BOOKING_FIELDS: [FieldDescriptor<BookingField>; 9] = [
    FieldDescriptor {
        field: BookingField::FirstName,
        name: "firstName",
        label: "First name",
        kind: FieldKind::Text,
        validate: validate_first_name,
    },
    FieldDescriptor {
        field: BookingField::LastName,
        name: "lastName",
        label: "Last name",
        kind: FieldKind::Text,
        validate: validate_last_name,
    },
    FieldDescriptor {
        field: BookingField::Email,
        name: "email",
        label: "Email",
        kind: FieldKind::Text,
        validate: validate_email,
    },
    FieldDescriptor {
        field: BookingField::Company,
        name: "company",
        label: "Company",
        kind: FieldKind::Text,
        validate: validate_company,
    },
    FieldDescriptor {
        field: BookingField::JobTitle,
        name: "jobTitle",
        label: "Job title",
        kind: FieldKind::Text,
        validate: validate_job_title,
    },
    FieldDescriptor {
        field: BookingField::Phone,
        name: "phone",
        label: "Phone (optional)",
        kind: FieldKind::Text,
        validate: validate_phone,
    },
    FieldDescriptor {
        field: BookingField::Message,
        name: "message",
        label: "Message (optional)",
        kind: FieldKind::Multiline,
        validate: validate_message,
    },
    FieldDescriptor {
        field: BookingField::Date,
        name: "date",
        label: "Date",
        kind: FieldKind::Picked,
        validate: validate_date,
    },
    FieldDescriptor {
        field: BookingField::Time,
        name: "time",
        label: "Time",
        kind: FieldKind::Picked,
        validate: validate_time,
    },
];

impl FormValues for BookingFormData {
    type Field = BookingField;

    fn descriptors() -> &'static [FieldDescriptor<BookingField>] {
        &BOOKING_FIELDS
    }

    fn value(&self, field: BookingField) -> FieldValue {
        match field {
            BookingField::FirstName => self.first_name.as_str().into(),
            BookingField::LastName => self.last_name.as_str().into(),
            BookingField::Email => self.email.as_str().into(),
            BookingField::Company => self.company.as_str().into(),
            BookingField::JobTitle => self.job_title.as_str().into(),
            BookingField::Phone => self.phone.as_str().into(),
            BookingField::Message => self.message.as_str().into(),
            BookingField::Date => self.date.map(|d| d.to_string()).into(),
            BookingField::Time => self.time.clone().into(),
        }
    }

    fn set_value(&mut self, field: BookingField, value: FieldValue) {
        let text = value.as_text();
        match field {
            BookingField::FirstName => self.first_name = text.to_string(),
            BookingField::LastName => self.last_name = text.to_string(),
            BookingField::Email => self.email = text.to_string(),
            BookingField::Company => self.company = text.to_string(),
            BookingField::JobTitle => self.job_title = text.to_string(),
            BookingField::Phone => self.phone = text.to_string(),
            BookingField::Message => self.message = text.to_string(),
            BookingField::Date => {
                self.date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok();
            }
            BookingField::Time => {
                self.time = (!text.is_empty()).then(|| text.to_string());
            }
        }
    }
}
