//! Field descriptors and values

use std::fmt::Debug;
use std::hash::Hash;

/// How a field receives its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Multi-line text input
    Multiline,
    /// Set by an external widget (date picker, slot list), not typed
    Picked,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// No value chosen yet (e.g. no date picked)
    #[default]
    Unset,
    Text(String),
}

impl FieldValue {
    /// Get the text value (returns empty string when unset)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Unset => "",
        }
    }

    /// True when unset or only whitespace
    pub fn is_blank(&self) -> bool {
        self.as_text().trim().is_empty()
    }

    /// Number of characters in the value
    pub fn char_count(&self) -> usize {
        self.as_text().chars().count()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Unset, Into::into)
    }
}

/// Validator for a single field: `Some(message)` when the value is invalid
pub type FieldValidator = fn(&FieldValue) -> Option<String>;

/// Describes one named, typed slot of a form's value set
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor<F: 'static> {
    pub field: F,
    /// Wire name (used in logs and serialized payloads)
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub validate: FieldValidator,
}

impl<F> FieldDescriptor<F> {
    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    /// Whether the field is edited by typing
    pub fn is_editable(&self) -> bool {
        self.kind != FieldKind::Picked
    }
}

/// A record of field values with an explicit, static field list
pub trait FormValues: Debug + Clone + PartialEq + Send + Sync + 'static {
    /// Field key, one variant per descriptor
    type Field: Debug + Copy + Eq + Ord + Hash + Send + Sync + 'static;

    /// All fields of the form, in display order
    fn descriptors() -> &'static [FieldDescriptor<Self::Field>];

    fn value(&self, field: Self::Field) -> FieldValue;

    fn set_value(&mut self, field: Self::Field, value: FieldValue);

    fn descriptor(field: Self::Field) -> Option<&'static FieldDescriptor<Self::Field>> {
        Self::descriptors().iter().find(|d| d.field == field)
    }
}
