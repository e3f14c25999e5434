//! Generic form plumbing shared by every screen.
//!
//! A screen is a [`FormRecord`] (what the user types), a [`FormSpec`] (where
//! it goes and what to say afterwards) and a [`FormController`] tying the
//! two to a [`NotificationSurface`]. Screens that show a remote list keep a
//! [`Collection`] next to their controller.

mod collection;
mod controller;
mod notification;

pub use collection::Collection;
pub use controller::{AfterSuccess, FormController, FormSpec, FormView, Outcome, SubmitState};
pub use notification::{Dismissal, Notification, NotificationKind, NotificationSurface};

use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },

    #[error("'{value}' is not a valid {field}")]
    InvalidChoice { field: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// Masked unless explicitly revealed
    Secret,
    Choice(&'static [&'static str]),
}

/// One input of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Number,
        }
    }

    pub const fn secret(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Secret,
        }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice(options),
        }
    }
}

/// A flat record edited through named inputs.
pub trait FormRecord: Default + Clone + fmt::Debug {
    /// Inputs in display order
    const FIELDS: &'static [Field];

    /// Current value of an input, formatted for editing
    fn field_value(&self, name: &str) -> String;

    /// Parse `raw` into the named input
    fn apply(&mut self, name: &str, raw: &str) -> Result<(), FormError>;
}

/// Parse a numeric input. An empty input counts as zero.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }

    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(FormError::InvalidNumber { field })
}

/// Format a number the way a numeric input would show it
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Raw input values keyed by input name, one per field of `R`.
#[derive(Debug, Clone)]
pub struct FormState<R: FormRecord> {
    values: Vec<String>,
    _record: PhantomData<R>,
}

impl<R: FormRecord> Default for FormState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: FormRecord> FormState<R> {
    /// Form holding the record's default values
    pub fn new() -> Self {
        Self::from_record(&R::default())
    }

    pub fn from_record(record: &R) -> Self {
        Self {
            values: R::FIELDS.iter().map(|f| record.field_value(f.name)).collect(),
            _record: PhantomData,
        }
    }

    pub fn fields(&self) -> &'static [Field] {
        R::FIELDS
    }

    fn index_of(name: &str) -> Option<usize> {
        R::FIELDS.iter().position(|f| f.name == name)
    }

    /// Update exactly one input
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let index = Self::index_of(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        self.values[index] = value.to_string();
        Ok(())
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        Self::index_of(name).map(|i| self.values[i].as_str())
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Back to the record's defaults
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replace every input with the values of `record`
    pub fn load(&mut self, record: &R) {
        *self = Self::from_record(record);
    }

    /// Parse the inputs into a record
    pub fn record(&self) -> Result<R, FormError> {
        let mut record = R::default();
        for (field, raw) in R::FIELDS.iter().zip(&self.values) {
            record.apply(field.name, raw)?;
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseInput, ExerciseType};

    #[test]
    fn test_new_form_holds_defaults() {
        let form = FormState::<ExerciseInput>::new();
        assert_eq!(form.value("exerciseType"), Some("Running"));
        assert_eq!(form.value("duration"), Some("0"));
        assert_eq!(form.value("distance"), Some("0"));
    }

    #[test]
    fn test_set_field_updates_one_key() {
        let mut form = FormState::<ExerciseInput>::new();
        form.set_field("duration", "45").unwrap();

        assert_eq!(form.value("duration"), Some("45"));
        assert_eq!(form.value("distance"), Some("0"));
        assert_eq!(form.value("exerciseType"), Some("Running"));
    }

    #[test]
    fn test_unknown_field_is_rejected_without_mutation() {
        let mut form = FormState::<ExerciseInput>::new();
        let before = form.values().to_vec();

        let err = form.set_field("pace", "5").unwrap_err();
        assert_eq!(err, FormError::UnknownField("pace".to_string()));
        assert_eq!(form.values(), before.as_slice());
    }

    #[test]
    fn test_record_parses_inputs() {
        let mut form = FormState::<ExerciseInput>::new();
        form.set_field("exerciseType", "Cycling").unwrap();
        form.set_field("duration", "30").unwrap();
        form.set_field("distance", "5.5").unwrap();

        let record = form.record().unwrap();
        assert_eq!(record.exercise_type, ExerciseType::Cycling);
        assert_eq!(record.duration, 30.0);
        assert_eq!(record.distance, 5.5);
    }

    #[test]
    fn test_non_numeric_input_fails_at_record_time() {
        let mut form = FormState::<ExerciseInput>::new();
        form.set_field("duration", "half an hour").unwrap();

        assert_eq!(
            form.record().unwrap_err(),
            FormError::InvalidNumber { field: "duration" }
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = FormState::<ExerciseInput>::new();
        form.set_field("duration", "12").unwrap();
        form.reset();

        assert_eq!(form.record().unwrap(), ExerciseInput::default());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("calories", ""), Ok(0.0));
        assert_eq!(parse_number("calories", " 12.5 "), Ok(12.5));
        assert_eq!(parse_number("calories", "-3"), Ok(-3.0));
        assert!(parse_number("calories", "NaN").is_err());
        assert!(parse_number("calories", "abc").is_err());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10000.0), "10000");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.0), "0");
    }
}
