//! Command-line driver for the registration form.
//!
//! The `signup` binary validates single values, runs one-shot registration
//! checks and replays interaction scripts, printing the rendered HTML.

pub mod error;
pub mod script;

use signup_forms::{Field, FormEvent, FormValues, RegistrationForm, SubmitOutcome};

pub use error::{Result, ScriptError};

/// Types every field the way a user would, then submits.
pub fn fill_and_submit(form: &mut RegistrationForm, values: FormValues) -> SubmitOutcome {
    let events = Field::ALL.into_iter().map(|field| FormEvent::Change {
        field,
        value: values.get(field).to_string(),
    });
    script::replay(form, events);
    form.submit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_and_submit_accepts_valid_values() {
        let mut form = RegistrationForm::new().unwrap();
        let values = FormValues::new("alice", "a@b.com", "Abcdefg1");
        assert_eq!(
            fill_and_submit(&mut form, values.clone()),
            SubmitOutcome::Accepted(values)
        );
    }

    #[test]
    fn test_fill_and_submit_rejects_invalid_values() {
        let mut form = RegistrationForm::new().unwrap();
        let outcome = fill_and_submit(&mut form, FormValues::new("alice", "bad", "Abcdefg1"));
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.entries(), vec![(Field::Email, "invalid email format")]);
            }
            SubmitOutcome::Accepted(_) => panic!("expected rejection"),
        }
    }
}
