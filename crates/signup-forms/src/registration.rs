//! The registration form: state plus interaction handlers.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::checklist::PasswordChecklist;
use crate::error::Result;
use crate::field::Field;
use crate::messages::Messages;
use crate::rules::RuleTable;
use crate::state::{FormErrors, FormValues, SubmissionStatus, TouchedFlags};

/// A user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    /// The text of a field changed.
    Change {
        /// Field being edited.
        field: Field,
        /// New text.
        value: String,
    },
    /// A field lost focus.
    Blur {
        /// Field that lost focus.
        field: Field,
    },
    /// The submit control was activated.
    Submit,
    /// The success panel's return control was activated.
    Dismiss,
}

impl FormEvent {
    /// Returns the event name without its payload.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Change { .. } => "change",
            Self::Blur { .. } => "blur",
            Self::Submit => "submit",
            Self::Dismiss => "dismiss",
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; these values are ready for the registration backend.
    Accepted(FormValues),
    /// At least one field failed; all errors are now visible.
    Rejected(FormErrors),
}

impl SubmitOutcome {
    /// Returns whether the submission was accepted.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// A registration form instance.
///
/// Owns the field values, stored errors, touched flags and submission status.
/// All mutation goes through the handlers below.
#[derive(Debug)]
pub struct RegistrationForm {
    rules: RuleTable,
    messages: Messages,
    values: FormValues,
    errors: FormErrors,
    touched: TouchedFlags,
    status: SubmissionStatus,
}

impl RegistrationForm {
    /// Creates an empty form with English messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the validation rules cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_messages(Messages::english())
    }

    /// Creates an empty form using the given message catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the validation rules cannot be built.
    pub fn with_messages(messages: Messages) -> Result<Self> {
        let rules = RuleTable::registration(&messages)?;
        Ok(Self::with_rules(rules, messages))
    }

    /// Creates an empty form with a custom rule table.
    #[must_use]
    pub fn with_rules(rules: RuleTable, messages: Messages) -> Self {
        Self {
            rules,
            messages,
            values: FormValues::default(),
            errors: FormErrors::default(),
            touched: TouchedFlags::default(),
            status: SubmissionStatus::Idle,
        }
    }

    /// Returns the current field values.
    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Returns the stored errors, including ones not yet visible.
    #[must_use]
    pub const fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Returns the touched flags.
    #[must_use]
    pub const fn touched(&self) -> &TouchedFlags {
        &self.touched
    }

    /// Returns the submission status.
    #[must_use]
    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Returns the message catalog.
    #[must_use]
    pub const fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Validates a value against the rules of a field.
    #[must_use]
    pub fn validate(&self, field: Field, value: &str) -> Option<String> {
        self.rules.validate(field, value)
    }

    /// Returns whether every current value passes validation.
    ///
    /// Always recomputed from the values, never from stored errors.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Field::ALL
            .into_iter()
            .all(|field| self.validate(field, self.values.get(field)).is_none())
    }

    /// Returns the error to display for a field.
    ///
    /// Stored errors stay hidden until the field has been touched.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.get(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    /// Returns the password checklist for the current password.
    #[must_use]
    pub fn checklist(&self) -> PasswordChecklist {
        PasswordChecklist::from_password(&self.values.password)
    }

    /// Updates a field's text.
    ///
    /// Once the field has been touched its error is recomputed right away.
    pub fn change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        if self.touched.get(field) {
            self.refresh_error(field);
        }
        debug!(%field, touched = self.touched.get(field), "field changed");
    }

    /// Marks a field as touched and recomputes its error.
    pub fn blur(&mut self, field: Field) {
        self.touched.touch(field);
        self.refresh_error(field);
        debug!(%field, has_error = self.errors.get(field).is_some(), "field blurred");
    }

    /// Submits the form.
    ///
    /// A valid form switches to [`SubmissionStatus::Success`]. An invalid one
    /// keeps its status, marks every field as touched and stores every error.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_valid() {
            self.status = SubmissionStatus::Success;
            info!(username = %self.values.username, "registration accepted");
            return SubmitOutcome::Accepted(self.values.clone());
        }

        self.touched.touch_all();
        for field in Field::ALL {
            self.refresh_error(field);
        }
        debug!(
            fields = ?self.errors.entries().iter().map(|(f, _)| *f).collect::<Vec<_>>(),
            "registration rejected"
        );
        SubmitOutcome::Rejected(self.errors.clone())
    }

    /// Leaves the success panel and resets the form to its initial state.
    pub fn dismiss(&mut self) {
        self.values = FormValues::default();
        self.errors = FormErrors::default();
        self.touched = TouchedFlags::default();
        self.status = SubmissionStatus::Idle;
        info!("form reset");
    }

    /// Applies an event.
    ///
    /// While the success panel is shown there are no inputs, so only
    /// [`FormEvent::Dismiss`] has an effect. Returns the outcome of a submit.
    pub fn handle(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        if self.status == SubmissionStatus::Success && event != FormEvent::Dismiss {
            debug!(event = event.kind(), "ignoring event while success panel is shown");
            return None;
        }

        match event {
            FormEvent::Change { field, value } => self.change(field, value),
            FormEvent::Blur { field } => self.blur(field),
            FormEvent::Submit => return Some(self.submit()),
            FormEvent::Dismiss => self.dismiss(),
        }
        None
    }

    fn refresh_error(&mut self, field: Field) {
        let error = self.validate(field, self.values.get(field));
        self.errors.set(field, error);
    }
}
