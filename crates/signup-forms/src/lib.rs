//! # signup-forms
//!
//! A registration form with inline field validation.
//!
//! This crate provides:
//! - Declarative per-field validation rules (first failing rule wins)
//! - The form state: values, errors, touched flags and submission status
//! - Change/blur/submit/dismiss handlers with touched-gated error display
//! - A live password checklist
//! - HTML rendering of the form and the success panel
//!
//! ## Quick Start
//!
//! ```rust
//! use signup_forms::{Field, RegistrationForm, SubmissionStatus};
//!
//! let mut form = RegistrationForm::new().unwrap();
//!
//! form.change(Field::Username, "al");
//! form.blur(Field::Username);
//! assert_eq!(
//!     form.visible_error(Field::Username),
//!     Some("minimum 3 characters"),
//! );
//!
//! form.change(Field::Username, "alice");
//! form.change(Field::Email, "a@b.com");
//! form.change(Field::Password, "Abcdefg1");
//! assert!(form.is_valid());
//!
//! assert!(form.submit().is_accepted());
//! assert_eq!(form.status(), SubmissionStatus::Success);
//! ```
//!
//! ## Validating single values
//!
//! ```rust
//! use signup_forms::{Field, Messages, RuleTable};
//!
//! let rules = RuleTable::registration(&Messages::english()).unwrap();
//! assert_eq!(rules.validate(Field::Email, "a@b.com"), None);
//! assert_eq!(
//!     rules.validate(Field::Password, "abc12345").as_deref(),
//!     Some("needs one uppercase letter"),
//! );
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use signup_forms::{render_view, RegistrationForm};
//!
//! let form = RegistrationForm::new().unwrap();
//! let html = render_view(&form).unwrap();
//! assert!(html.contains("<form"));
//! ```

mod checklist;
mod error;
mod field;
mod messages;
mod registration;
pub mod render;
pub mod rules;
mod state;
pub mod validation;

pub use checklist::PasswordChecklist;
pub use error::{FormError, Result};
pub use field::Field;
pub use messages::{Locale, Messages};
pub use registration::{FormEvent, RegistrationForm, SubmitOutcome};
pub use render::{render_page, render_view};
pub use rules::RuleTable;
pub use state::{FormErrors, FormValues, SubmissionStatus, TouchedFlags};
