//! User-visible strings of the registration form.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::field::Field;

/// Language of a [`Messages`] catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Thai.
    Th,
}

impl Locale {
    /// Returns the BCP 47 language tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Th => "th",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "th" => Ok(Self::Th),
            _ => Err(FormError::UnknownLocale(s.to_string())),
        }
    }
}

/// Catalog of every string the form shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Language of this catalog.
    pub locale: Locale,

    pub username_required: String,
    pub username_too_short: String,
    pub email_required: String,
    pub email_invalid: String,
    pub password_required: String,
    pub password_too_short: String,
    pub password_needs_lowercase: String,
    pub password_needs_uppercase: String,
    pub password_needs_digit: String,

    /// Heading above the form and the submit button text.
    pub title: String,
    pub username_label: String,
    pub email_label: String,
    pub password_label: String,
    pub username_placeholder: String,
    pub email_placeholder: String,
    pub password_placeholder: String,

    /// Password checklist items: length, uppercase, digit.
    pub checklist_length: String,
    pub checklist_uppercase: String,
    pub checklist_digit: String,

    pub success_title: String,
    /// Greeting on the success panel, `{username}` is substituted.
    pub welcome: String,
    pub back_to_form: String,
}

impl Messages {
    /// English catalog.
    #[must_use]
    pub fn english() -> Self {
        Self {
            locale: Locale::En,
            username_required: "username required".to_string(),
            username_too_short: "minimum 3 characters".to_string(),
            email_required: "email required".to_string(),
            email_invalid: "invalid email format".to_string(),
            password_required: "password required".to_string(),
            password_too_short: "minimum 8 characters".to_string(),
            password_needs_lowercase: "needs one lowercase letter".to_string(),
            password_needs_uppercase: "needs one uppercase letter".to_string(),
            password_needs_digit: "needs one digit".to_string(),
            title: "Sign up".to_string(),
            username_label: "Username".to_string(),
            email_label: "Email".to_string(),
            password_label: "Password".to_string(),
            username_placeholder: "Enter your username".to_string(),
            email_placeholder: "example@mail.com".to_string(),
            password_placeholder: "••••••••".to_string(),
            checklist_length: "At least 8 characters".to_string(),
            checklist_uppercase: "One uppercase letter".to_string(),
            checklist_digit: "One digit".to_string(),
            success_title: "Registration successful!".to_string(),
            welcome: "Welcome, {username}".to_string(),
            back_to_form: "Back to sign up".to_string(),
        }
    }

    /// Thai catalog.
    #[must_use]
    pub fn thai() -> Self {
        Self {
            locale: Locale::Th,
            username_required: "กรุณากรอกชื่อผู้ใช้".to_string(),
            username_too_short: "ชื่อผู้ใช้ต้องอย่างน้อย 3 ตัวอักษร".to_string(),
            email_required: "กรุณากรอกอีเมล".to_string(),
            email_invalid: "รูปแบบอีเมลไม่ถูกต้อง".to_string(),
            password_required: "กรุณากรอกรหัสผ่าน".to_string(),
            password_too_short: "รหัสผ่านต้องอย่างน้อย 8 ตัวอักษร".to_string(),
            password_needs_lowercase: "ต้องมีตัวอักษรพิมพ์เล็กอย่างน้อย 1 ตัว".to_string(),
            password_needs_uppercase: "ต้องมีตัวอักษรพิมพ์ใหญ่อย่างน้อย 1 ตัว".to_string(),
            password_needs_digit: "ต้องมีตัวเลขอย่างน้อย 1 ตัว".to_string(),
            title: "สมัครสมาชิก".to_string(),
            username_label: "ชื่อผู้ใช้".to_string(),
            email_label: "อีเมล".to_string(),
            password_label: "รหัสผ่าน".to_string(),
            username_placeholder: "กรอกชื่อผู้ใช้ของคุณ".to_string(),
            email_placeholder: "example@mail.com".to_string(),
            password_placeholder: "••••••••".to_string(),
            checklist_length: "อย่างน้อย 8 ตัวอักษร".to_string(),
            checklist_uppercase: "ตัวใหญ่ 1 ตัว".to_string(),
            checklist_digit: "ตัวเลข 1 ตัว".to_string(),
            success_title: "สมัครสมาชิกสำเร็จ!".to_string(),
            welcome: "ยินดีต้อนรับคุณ {username}".to_string(),
            back_to_form: "กลับหน้าสมัครสมาชิก".to_string(),
        }
    }

    /// Returns the catalog for a locale.
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::english(),
            Locale::Th => Self::thai(),
        }
    }

    /// Returns the label of a field.
    #[must_use]
    pub fn label(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username_label,
            Field::Email => &self.email_label,
            Field::Password => &self.password_label,
        }
    }

    /// Returns the placeholder of a field.
    #[must_use]
    pub fn placeholder(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username_placeholder,
            Field::Email => &self.email_placeholder,
            Field::Password => &self.password_placeholder,
        }
    }

    /// Formats the success greeting for a username.
    #[must_use]
    pub fn welcome_for(&self, username: &str) -> String {
        self.welcome.replace("{username}", username)
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("TH".parse::<Locale>().unwrap(), Locale::Th);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(FormError::UnknownLocale(name)) if name == "fr"
        ));
    }

    #[test]
    fn test_for_locale() {
        assert_eq!(Messages::for_locale(Locale::Th).locale, Locale::Th);
        assert_eq!(Messages::default(), Messages::english());
    }

    #[test]
    fn test_field_texts() {
        let messages = Messages::english();
        assert_eq!(messages.label(Field::Email), "Email");
        assert_eq!(messages.placeholder(Field::Email), "example@mail.com");
        assert_eq!(Messages::thai().label(Field::Password), "รหัสผ่าน");
    }

    #[test]
    fn test_welcome_substitution() {
        assert_eq!(Messages::english().welcome_for("alice"), "Welcome, alice");
        assert_eq!(
            Messages::thai().welcome_for("alice"),
            "ยินดีต้อนรับคุณ alice"
        );
    }
}
