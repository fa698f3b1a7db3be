//! Field validators.
//!
//! Each validator is a single predicate paired with the message reported when
//! the predicate fails. Validators are combined into ordered per-field lists by
//! [`RuleTable`](crate::rules::RuleTable).
//!
//! Lengths are counted in UTF-16 code units and whitespace follows the
//! ECMAScript set, so results agree with browser-side checks of the same form.

use regex::Regex;

/// ECMAScript whitespace: Unicode `White_Space` plus U+FEFF, minus U+0085.
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strips leading and trailing whitespace as defined by [`is_whitespace`].
#[must_use]
pub fn trim(value: &str) -> &str {
    value.trim_matches(is_whitespace)
}

/// Length of a value in UTF-16 code units.
#[must_use]
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    trim: bool,
    message: String,
}

impl RequiredValidator {
    /// Creates a validator rejecting empty and whitespace-only values.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            trim: true,
            message: message.into(),
        }
    }

    /// Creates a validator rejecting only the empty string.
    ///
    /// Whitespace counts as content, as it does for passwords.
    pub fn non_empty(message: impl Into<String>) -> Self {
        Self {
            trim: false,
            message: message.into(),
        }
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let value = if self.trim { trim(value) } else { value };
        if value.is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a minimum length in UTF-16 code units.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    trim: bool,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator counting the raw value.
    pub fn new(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            trim: false,
            message: message.into(),
        }
    }

    /// Counts the value after trimming surrounding whitespace.
    #[must_use]
    pub const fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Returns the minimum length.
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let value = if self.trim { trim(value) } else { value };
        if text_length(value) < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not a valid regular expression.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator requiring at least one character that satisfies a predicate.
#[derive(Debug, Clone)]
pub struct ContainsValidator {
    predicate: fn(char) -> bool,
    message: String,
}

impl ContainsValidator {
    /// Creates a validator from a character predicate.
    pub fn new(predicate: fn(char) -> bool, message: impl Into<String>) -> Self {
        Self {
            predicate,
            message: message.into(),
        }
    }

    /// Requires an ASCII lowercase letter.
    pub fn lowercase(message: impl Into<String>) -> Self {
        Self::new(|c| c.is_ascii_lowercase(), message)
    }

    /// Requires an ASCII uppercase letter.
    pub fn uppercase(message: impl Into<String>) -> Self {
        Self::new(|c| c.is_ascii_uppercase(), message)
    }

    /// Requires an ASCII digit.
    pub fn digit(message: impl Into<String>) -> Self {
        Self::new(|c| c.is_ascii_digit(), message)
    }
}

impl Validator for ContainsValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().any(self.predicate) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}
