//! Declarative validation rule tables.
//!
//! A [`RuleTable`] maps each field to an ordered list of validators. The first
//! validator that fails decides the field's error message; later rules are not
//! evaluated.

use std::collections::HashMap;

use crate::error::Result;
use crate::field::Field;
use crate::messages::Messages;
use crate::validation::{
    ContainsValidator, MinLengthValidator, RegexValidator, RequiredValidator, Validator,
};

/// Pattern an email address must match.
///
/// Each part excludes `@` and ECMAScript whitespace (`\s` with U+FEFF added and
/// U+0085 put back).
pub const EMAIL_PATTERN: &str =
    r"^[\x{85}[^\s\x{FEFF}@]]+@[\x{85}[^\s\x{FEFF}@]]+\.[\x{85}[^\s\x{FEFF}@]]+$";

/// Minimum username length, counted after trimming.
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Minimum password length.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Ordered validators per field.
#[derive(Default)]
pub struct RuleTable {
    rules: HashMap<Field, Vec<Box<dyn Validator>>>,
}

impl std::fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for field in Field::ALL {
            if self.rules.contains_key(&field) {
                map.entry(&field, &self.messages_for(field));
            }
        }
        map.finish()
    }
}

impl RuleTable {
    /// Creates an empty table. Fields without rules are always valid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule for a field.
    #[must_use]
    pub fn rule(mut self, field: Field, validator: impl Validator + 'static) -> Self {
        self.rules.entry(field).or_default().push(Box::new(validator));
        self
    }

    /// Builds the registration rules with messages from `messages`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Pattern`](crate::FormError::Pattern) if the email
    /// pattern fails to compile.
    pub fn registration(messages: &Messages) -> Result<Self> {
        Ok(Self::new()
            .rule(
                Field::Username,
                RequiredValidator::new(&messages.username_required),
            )
            .rule(
                Field::Username,
                MinLengthValidator::new(USERNAME_MIN_LENGTH, &messages.username_too_short)
                    .trimmed(),
            )
            .rule(Field::Email, RequiredValidator::new(&messages.email_required))
            .rule(
                Field::Email,
                RegexValidator::new(EMAIL_PATTERN, &messages.email_invalid)?,
            )
            .rule(
                Field::Password,
                RequiredValidator::non_empty(&messages.password_required),
            )
            .rule(
                Field::Password,
                MinLengthValidator::new(PASSWORD_MIN_LENGTH, &messages.password_too_short),
            )
            .rule(
                Field::Password,
                ContainsValidator::lowercase(&messages.password_needs_lowercase),
            )
            .rule(
                Field::Password,
                ContainsValidator::uppercase(&messages.password_needs_uppercase),
            )
            .rule(
                Field::Password,
                ContainsValidator::digit(&messages.password_needs_digit),
            ))
    }

    /// Returns the rules registered for a field, in evaluation order.
    pub fn rules_for(&self, field: Field) -> &[Box<dyn Validator>] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the message of every rule for a field, in evaluation order.
    #[must_use]
    pub fn messages_for(&self, field: Field) -> Vec<&str> {
        self.rules_for(field)
            .iter()
            .map(|rule| rule.message())
            .collect()
    }

    /// Validates a value, returning the message of the first failing rule.
    #[must_use]
    pub fn validate(&self, field: Field, value: &str) -> Option<String> {
        self.rules_for(field)
            .iter()
            .find_map(|rule| rule.validate(value).err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable {
        RuleTable::registration(&Messages::english()).unwrap()
    }

    #[test]
    fn test_username_rules() {
        let t = table();
        assert_eq!(
            t.validate(Field::Username, "").as_deref(),
            Some("username required")
        );
        assert_eq!(
            t.validate(Field::Username, "   ").as_deref(),
            Some("username required")
        );
        assert_eq!(
            t.validate(Field::Username, "ab").as_deref(),
            Some("minimum 3 characters")
        );
        assert_eq!(
            t.validate(Field::Username, " ab ").as_deref(),
            Some("minimum 3 characters")
        );
        assert_eq!(t.validate(Field::Username, "abc"), None);
        assert_eq!(t.validate(Field::Username, "  alice  "), None);
    }

    #[test]
    fn test_username_uses_browser_length_and_whitespace() {
        let t = table();
        assert_eq!(t.validate(Field::Username, "\u{1F600}a"), None);
        assert_eq!(
            t.validate(Field::Username, "\u{feff}").as_deref(),
            Some("username required")
        );
        assert_eq!(
            t.validate(Field::Username, "\u{feff}ab\u{feff}").as_deref(),
            Some("minimum 3 characters")
        );
        assert_eq!(
            t.validate(Field::Username, "\u{85}").as_deref(),
            Some("minimum 3 characters")
        );
    }

    #[test]
    fn test_email_rules() {
        let t = table();
        assert_eq!(
            t.validate(Field::Email, " ").as_deref(),
            Some("email required")
        );
        assert_eq!(
            t.validate(Field::Email, "bad").as_deref(),
            Some("invalid email format")
        );
        assert_eq!(t.validate(Field::Email, "a@b.com"), None);
        for bad in ["a@b", "@b.com", "a@.com", "a b@c.com", "a@b@c.com", " a@b.com"] {
            assert_eq!(
                t.validate(Field::Email, bad).as_deref(),
                Some("invalid email format"),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_email_whitespace_set() {
        let t = table();
        for bad in ["a\u{feff}@b.com", "a@b\u{feff}.com", "a@b.c\u{3000}om"] {
            assert_eq!(
                t.validate(Field::Email, bad).as_deref(),
                Some("invalid email format"),
                "{bad:?} should be rejected"
            );
        }
        assert_eq!(
            t.validate(Field::Email, "\u{feff}").as_deref(),
            Some("email required")
        );
        assert_eq!(t.validate(Field::Email, "a\u{85}@b.com"), None);
    }

    #[test]
    fn test_password_length_counts_surrogate_pairs() {
        let t = table();
        assert_eq!(
            t.validate(Field::Password, "Ab1\u{1F600}\u{1F600}\u{1F600}"),
            None
        );
        assert_eq!(
            t.validate(Field::Password, "Ab1\u{1F600}\u{1F600}").as_deref(),
            Some("minimum 8 characters")
        );
        assert_eq!(t.validate(Field::Password, "Abc1\u{1F600}\u{1F600}"), None);
    }

    #[test]
    fn test_password_rules_in_order() {
        let t = table();
        let cases = [
            ("", Some("password required")),
            ("Ab1", Some("minimum 8 characters")),
            ("ABC12345", Some("needs one lowercase letter")),
            ("abc12345", Some("needs one uppercase letter")),
            ("Abcdefgh", Some("needs one digit")),
            ("Abc12345", None),
            ("Abcdefg1", None),
        ];
        for (value, expected) in cases {
            assert_eq!(
                t.validate(Field::Password, value).as_deref(),
                expected,
                "password {value:?}"
            );
        }
    }

    #[test]
    fn test_whitespace_password_is_not_missing() {
        let t = table();
        assert_eq!(
            t.validate(Field::Password, "        ").as_deref(),
            Some("needs one lowercase letter")
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Short and missing every character class: only the length message.
        assert_eq!(
            table().validate(Field::Password, "!").as_deref(),
            Some("minimum 8 characters")
        );
    }

    #[test]
    fn test_empty_table_accepts_everything() {
        let t = RuleTable::new();
        assert!(t.rules_for(Field::Email).is_empty());
        assert_eq!(t.validate(Field::Email, ""), None);
    }

    #[test]
    fn test_custom_rule_table() {
        let t = RuleTable::new().rule(
            Field::Username,
            MinLengthValidator::new(5, "five or more"),
        );
        assert_eq!(
            t.validate(Field::Username, "abcd").as_deref(),
            Some("five or more")
        );
        assert_eq!(t.rules_for(Field::Username).len(), 1);
    }

    #[test]
    fn test_messages_for_lists_rules_in_order() {
        let t = table();
        assert_eq!(
            t.messages_for(Field::Username),
            vec!["username required", "minimum 3 characters"]
        );
        assert_eq!(t.messages_for(Field::Password).len(), 5);
        assert!(RuleTable::new().messages_for(Field::Email).is_empty());
    }

    #[test]
    fn test_debug_shows_rule_messages() {
        let t = RuleTable::new().rule(Field::Email, RequiredValidator::new("email required"));
        assert_eq!(format!("{t:?}"), r#"{Email: ["email required"]}"#);
    }

    #[test]
    fn test_thai_messages() {
        let t = RuleTable::registration(&Messages::thai()).unwrap();
        assert_eq!(
            t.validate(Field::Email, "").as_deref(),
            Some("กรุณากรอกอีเมล")
        );
    }
}
