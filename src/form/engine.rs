//! Form state machine
//!
//! [`FormEngine`] tracks values, touched flags, validation errors and the
//! submission lifecycle of a single form instance. Validation and submission
//! are delegated to caller-supplied functions.

use super::field::{FieldValue, FormValues};
use super::validation::ValidationErrors;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Fallback text when a fault carries no message
const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Caller-supplied validation: pure, synchronous, full value set in
pub type ValidateFn<T> =
    Arc<dyn Fn(&T) -> ValidationErrors<<T as FormValues>::Field> + Send + Sync>;

/// What a submit handler reports back
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
    /// Identifier produced by the collaborator, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl SubmitOutcome {
    pub fn succeeded(message: impl Into<String>, reference: Option<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            reference,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            reference: None,
        }
    }
}

/// Submission collaborator.
///
/// Expected failures are reported as `Ok` with `success == false`; `Err` is
/// reserved for unexpected faults (transport errors and the like).
#[async_trait]
pub trait SubmitHandler<T: Sync>: Send + Sync {
    async fn submit(&self, values: &T) -> Result<SubmitOutcome>;
}

/// Engine options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// When false the validate function is never called
    pub enable_validation: bool,
    pub validate_on_change: bool,
    pub validate_on_blur: bool,
    pub show_success_message: bool,
    pub success_message_duration: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            enable_validation: true,
            validate_on_change: false,
            validate_on_blur: true,
            show_success_message: true,
            success_message_duration: Duration::from_millis(5000),
        }
    }
}

/// Transient success banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessMessage {
    pub text: String,
    pub shown_at: Instant,
}

/// Snapshot of a form instance
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<T: FormValues> {
    pub values: T,
    pub errors: ValidationErrors<T::Field>,
    pub touched: BTreeMap<T::Field, bool>,
    pub is_submitting: bool,
    pub is_submitted: bool,
    pub submit_error: Option<String>,
    pub submit_success: Option<SuccessMessage>,
}

impl<T: FormValues> FormState<T> {
    pub fn new(values: T) -> Self {
        Self {
            values,
            errors: BTreeMap::new(),
            touched: BTreeMap::new(),
            is_submitting: false,
            is_submitted: false,
            submit_error: None,
            submit_success: None,
        }
    }
}

/// Values captured by [`FormEngine::begin_submit`], to be settled with
/// [`FormEngine::complete_submit`]
#[derive(Debug, Clone)]
pub struct PendingSubmit<T> {
    pub values: T,
    generation: u64,
}

/// Why a submission did not start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected<F> {
    /// Validation failed; errors are also stored on the form
    Invalid(ValidationErrors<F>),
    /// A previous submission has not settled yet
    InFlight,
}

/// Result of settling a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus<F> {
    Submitted(SubmitOutcome),
    /// Handler reported `success == false`
    Failed(String),
    /// Handler raised a fault
    Faulted(String),
    Rejected(SubmitRejected<F>),
    /// Settlement arrived after a reset and was dropped
    Stale,
}

/// Controlled-form state container
pub struct FormEngine<T: FormValues> {
    initial: FormState<T>,
    state: FormState<T>,
    validate: ValidateFn<T>,
    handler: Arc<dyn SubmitHandler<T>>,
    config: FormConfig,
    /// Bumped by reset/initialize so late settlements can be recognised
    generation: u64,
}

impl<T: FormValues> fmt::Debug for FormEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormEngine")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl<T: FormValues> FormEngine<T> {
    pub fn new(
        initial_values: T,
        validate: ValidateFn<T>,
        handler: Arc<dyn SubmitHandler<T>>,
        config: FormConfig,
    ) -> Self {
        let initial = FormState::new(initial_values);
        Self {
            state: initial.clone(),
            initial,
            validate,
            handler,
            config,
            generation: 0,
        }
    }

    /// Replace the initial snapshot and reset to it
    pub fn initialize(&mut self, initial_values: T) {
        self.initial = FormState::new(initial_values);
        self.reset();
    }

    pub fn state(&self) -> &FormState<T> {
        &self.state
    }

    pub fn values(&self) -> &T {
        &self.state.values
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn handler(&self) -> Arc<dyn SubmitHandler<T>> {
        Arc::clone(&self.handler)
    }

    fn run_validation(&self) -> ValidationErrors<T::Field> {
        if !self.config.enable_validation {
            return BTreeMap::new();
        }
        (self.validate)(&self.state.values)
    }

    /// Apply a user edit
    pub fn handle_field_change(&mut self, field: T::Field, raw_value: impl Into<FieldValue>) {
        self.state.values.set_value(field, raw_value.into());
        if self.config.validate_on_change {
            self.state.errors = self.run_validation();
        }
        self.state.submit_error = None;
    }

    /// Mark a field as having lost focus
    pub fn handle_field_blur(&mut self, field: T::Field) {
        self.state.touched.insert(field, true);
        if self.config.validate_on_blur {
            self.state.errors = self.run_validation();
        }
    }

    /// Programmatic value override (no validation, no banner change)
    pub fn set_field_value(&mut self, field: T::Field, value: impl Into<FieldValue>) {
        self.state.values.set_value(field, value.into());
    }

    /// Programmatic error override; `None` removes the entry
    pub fn set_field_error(&mut self, field: T::Field, message: Option<String>) {
        match message {
            Some(message) => {
                self.state.errors.insert(field, message);
            }
            None => {
                self.state.errors.remove(&field);
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.state.errors.is_empty()
    }

    pub fn is_touched(&self, field: T::Field) -> bool {
        self.state.touched.get(&field).copied().unwrap_or(false)
    }

    /// The field's error, shown only once the field is touched
    pub fn field_error(&self, field: T::Field) -> Option<&str> {
        if self.is_touched(field) {
            self.state.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    /// Touch and validate; on success mark the form as submitting and hand
    /// back the values to submit
    pub fn begin_submit(&mut self) -> Result<PendingSubmit<T>, SubmitRejected<T::Field>> {
        if self.state.is_submitting {
            tracing::warn!("submit ignored, previous submission still in flight");
            return Err(SubmitRejected::InFlight);
        }

        for descriptor in T::descriptors() {
            self.state.touched.insert(descriptor.field, true);
        }

        let errors = self.run_validation();
        self.state.errors = errors.clone();
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "submit blocked by validation errors");
            return Err(SubmitRejected::Invalid(errors));
        }

        self.state.is_submitting = true;
        self.state.is_submitted = false;
        self.state.submit_error = None;
        self.state.submit_success = None;
        tracing::debug!(generation = self.generation, "submission started");

        Ok(PendingSubmit {
            values: self.state.values.clone(),
            generation: self.generation,
        })
    }

    /// Apply a handler's settlement to the form
    pub fn complete_submit(
        &mut self,
        pending: PendingSubmit<T>,
        result: Result<SubmitOutcome>,
        now: Instant,
    ) -> SubmitStatus<T::Field> {
        if pending.generation != self.generation {
            tracing::info!(
                pending = pending.generation,
                current = self.generation,
                "dropping settlement of a submission started before reset"
            );
            return SubmitStatus::Stale;
        }

        self.state.is_submitting = false;

        match result {
            Ok(outcome) if outcome.success => {
                self.state.is_submitted = true;
                if self.config.show_success_message {
                    self.state.submit_success = Some(SuccessMessage {
                        text: outcome.message.clone(),
                        shown_at: now,
                    });
                }
                tracing::info!(reference = ?outcome.reference, "submission succeeded");
                SubmitStatus::Submitted(outcome)
            }
            Ok(outcome) => {
                tracing::warn!(message = %outcome.message, "submission failed");
                self.state.submit_error = Some(outcome.message.clone());
                SubmitStatus::Failed(outcome.message)
            }
            Err(err) => {
                let message = err.to_string();
                let message = if message.is_empty() {
                    UNEXPECTED_ERROR.to_string()
                } else {
                    message
                };
                tracing::error!(error = ?err, "submission fault");
                self.state.submit_error = Some(message.clone());
                SubmitStatus::Faulted(message)
            }
        }
    }

    /// Validate and, if clean, run the submit handler to completion
    pub async fn submit(&mut self) -> SubmitStatus<T::Field> {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(rejected) => return SubmitStatus::Rejected(rejected),
        };
        let handler = self.handler();
        let result = handler.submit(&pending.values).await;
        self.complete_submit(pending, result, Instant::now())
    }

    /// Clear the success banner once its display time has passed
    pub fn tick(&mut self, now: Instant) {
        let expired = self.state.submit_success.as_ref().is_some_and(|msg| {
            now.saturating_duration_since(msg.shown_at) >= self.config.success_message_duration
        });
        if expired {
            self.state.submit_success = None;
        }
    }

    /// Restore the post-construction snapshot
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.generation += 1;
    }
}
