//! Live password hints shown under the password input.
//!
//! The checklist is derived from the current password on every render and has
//! no effect on validity. It lists length, uppercase and digit; the lowercase
//! rule is enforced by validation but has no checklist item.

use crate::messages::Messages;
use crate::rules::PASSWORD_MIN_LENGTH;
use crate::validation::text_length;

/// Which password hints the current value satisfies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordChecklist {
    /// At least [`PASSWORD_MIN_LENGTH`] UTF-16 code units.
    pub min_length: bool,
    /// Contains an ASCII uppercase letter.
    pub has_uppercase: bool,
    /// Contains an ASCII digit.
    pub has_digit: bool,
}

impl PasswordChecklist {
    /// Derives the checklist from a password.
    #[must_use]
    pub fn from_password(password: &str) -> Self {
        Self {
            min_length: text_length(password) >= PASSWORD_MIN_LENGTH,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
        }
    }

    /// Returns the labelled items in display order.
    #[must_use]
    pub fn items<'a>(&self, messages: &'a Messages) -> [(&'a str, bool); 3] {
        [
            (messages.checklist_length.as_str(), self.min_length),
            (messages.checklist_uppercase.as_str(), self.has_uppercase),
            (messages.checklist_digit.as_str(), self.has_digit),
        ]
    }
}
