//! The fields of the registration form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// A field of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The account name.
    Username,
    /// Contact email address.
    Email,
    /// Account password.
    Password,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Self; 3] = [Self::Username, Self::Email, Self::Password];

    /// Returns the field name used in HTML `name`/`id` attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Returns the HTML input type rendered for this field.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Username => "text",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" => Ok(Self::Username),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}
