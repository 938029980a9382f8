//! Field-level error maps shared by every form.
//!
//! Validation never fails "the form"; it produces a [`FieldErrors`] map with
//! at most one [`FieldError`] per field. The map is rebuilt from scratch on
//! each validation pass and individual entries are dropped as the user edits
//! the corresponding field.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A field of a specific form (one enum per form).
pub trait FormField: Copy + Ord + fmt::Debug + 'static {
    /// Stable key used for logging and serialisation.
    fn key(&self) -> &'static str;

    /// Label shown next to the input.
    fn label(&self) -> &'static str;
}

/// Why a field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    TooShort { min: usize },
    Mismatch,
    InsufficientImages { required: usize, provided: usize },
}

/// A single human-readable validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(flatten)]
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn required(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Required, message)
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFormat, message)
    }

    pub fn too_short(min: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TooShort { min }, message)
    }

    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Mismatch, message)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Per-field error messages for one form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors<F: FormField + Serialize> {
    entries: BTreeMap<F, FieldError>,
}

impl<F: FormField + Serialize> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<F: FormField + Serialize> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `field`, replacing any previous one.
    pub fn insert(&mut self, field: F, error: FieldError) {
        self.entries.insert(field, error);
    }

    pub fn get(&self, field: F) -> Option<&FieldError> {
        self.entries.get(&field)
    }

    /// Message for `field`, if it currently has an error.
    pub fn message(&self, field: F) -> Option<&str> {
        self.entries.get(&field).map(|error| error.message.as_str())
    }

    pub fn contains(&self, field: F) -> bool {
        self.entries.contains_key(&field)
    }

    /// Drop the error for `field`; returns whether there was one.
    pub fn clear(&mut self, field: F) -> bool {
        self.entries.remove(&field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Fields with errors, in field declaration order.
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &FieldError)> + '_ {
        self.entries.iter().map(|(field, error)| (*field, error))
    }
}

impl<F: FormField + Serialize> fmt::Display for FieldErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (field, error)) in self.entries.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", field.key(), error.message)?;
        }
        Ok(())
    }
}
