//! Form domain layer
//!
//! Type-safe, UI-independent form handling: explicit field descriptors,
//! caller-supplied validation and a submission lifecycle.

mod engine;
mod field;
mod validation;

pub use engine::{
    FormConfig, FormEngine, FormState, PendingSubmit, SubmitHandler, SubmitOutcome,
    SubmitRejected, SubmitStatus, SuccessMessage, ValidateFn,
};
pub use field::{FieldDescriptor, FieldKind, FieldValidator, FieldValue, FormValues};
pub use validation::{is_valid_email, is_valid_phone, no_rules, validate_fields, ValidationErrors};
