//! Form state records.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Current text of each field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl FormValues {
    /// Creates values from the three field texts.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
    }
}

/// Current error message of each field, `None` when the field has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl FormErrors {
    /// Creates an empty error record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the error of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => self.username.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
        }
    }

    /// Stores (or clears, with `None`) the error of a field.
    pub fn set(&mut self, field: Field, error: Option<String>) {
        match field {
            Field::Username => self.username = error,
            Field::Email => self.email = error,
            Field::Password => self.password = error,
        }
    }

    /// Returns whether no field has an error.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }

    /// Returns the fields that have an error, with their messages.
    #[must_use]
    pub fn entries(&self) -> Vec<(Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|msg| (field, msg)))
            .collect()
    }
}

/// Whether each field has been blurred at least once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchedFlags {
    pub username: bool,
    pub email: bool,
    pub password: bool,
}

impl TouchedFlags {
    /// Returns whether a field has been touched.
    #[must_use]
    pub const fn get(&self, field: Field) -> bool {
        match field {
            Field::Username => self.username,
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    /// Marks a field as touched.
    pub fn touch(&mut self, field: Field) {
        match field {
            Field::Username => self.username = true,
            Field::Email => self.email = true,
            Field::Password => self.password = true,
        }
    }

    /// Marks every field as touched.
    pub fn touch_all(&mut self) {
        *self = Self {
            username: true,
            email: true,
            password: true,
        };
    }

    /// Returns whether every field has been touched.
    #[must_use]
    pub const fn all(&self) -> bool {
        self.username && self.email && self.password
    }
}

/// Which view the form shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// The form is displayed.
    #[default]
    Idle,
    /// A valid submission happened and the success panel is displayed.
    Success,
}
