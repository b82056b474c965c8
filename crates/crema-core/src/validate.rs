//! Client-side field validation.
//!
//! Malformed input is rejected per field before any network call is made;
//! the server never sees values that fail these checks.

use serde::{Deserialize, Serialize};

/// A validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: String,
    /// User-facing message.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validates an email address.
///
/// Requires a single `@` with a non-empty local part and a domain
/// containing at least one dot.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    let valid = !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.contains(char::is_whitespace);

    if valid {
        Ok(())
    } else {
        Err(FieldError::new("email", "Invalid email format"))
    }
}

/// Validates a password.
///
/// Minimum 8 characters with at least one letter and one digit.
pub fn validate_password(value: &str) -> Result<(), FieldError> {
    if value.chars().count() < 8 {
        return Err(FieldError::new(
            "password",
            "Password must be at least 8 characters",
        ));
    }
    let has_letter = value.chars().any(char::is_alphabetic);
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if has_letter && has_digit {
        Ok(())
    } else {
        Err(FieldError::new(
            "password",
            "Password must contain a letter and a digit",
        ))
    }
}

/// Validates a phone number.
///
/// Accepts an optional leading `+` and 7 to 15 digits; spaces, dashes,
/// dots, and parentheses are tolerated as separators.
pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    let rest = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut digits = 0usize;
    for c in rest.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        } else if !matches!(c, ' ' | '-' | '.' | '(' | ')') {
            return Err(FieldError::new("phone", "Invalid phone number"));
        }
    }

    if (7..=15).contains(&digits) {
        Ok(())
    } else {
        Err(FieldError::new("phone", "Invalid phone number"))
    }
}

/// Validates a postal code.
///
/// Locale-agnostic: 3 to 10 alphanumerics, spaces and dashes tolerated.
pub fn validate_zip(value: &str) -> Result<(), FieldError> {
    let mut alnum = 0usize;
    for c in value.trim().chars() {
        if c.is_ascii_alphanumeric() {
            alnum += 1;
        } else if !matches!(c, ' ' | '-') {
            return Err(FieldError::new("zip", "Invalid postal code"));
        }
    }

    if (3..=10).contains(&alnum) {
        Ok(())
    } else {
        Err(FieldError::new("zip", "Invalid postal code"))
    }
}

/// Validates all registration fields, collecting every failure instead of
/// stopping at the first.
///
/// `phone` and `zip` are optional fields and are only checked when present.
#[must_use]
pub fn validate_registration(
    email: &str,
    password: &str,
    phone: Option<&str>,
    zip: Option<&str>,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Err(e) = validate_email(email) {
        errors.push(e);
    }
    if let Err(e) = validate_password(password) {
        errors.push(e);
    }
    if let Some(phone) = phone {
        if let Err(e) = validate_phone(phone) {
            errors.push(e);
        }
    }
    if let Some(zip) = zip {
        if let Err(e) = validate_zip(zip) {
            errors.push(e);
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_emails_pass() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("  user@example.com  ").is_ok());
        assert!(validate_email("first.last@shop.co.uk").is_ok());
    }

    #[test]
    fn malformed_emails_fail() {
        // Domain without a dot, as in the spec example "foo@bar"
        let err = validate_email("foo@bar").unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.message, "Invalid email format");

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("user@example.com.").is_err());
        assert!(validate_email("two words@example.com").is_err());
    }

    #[test]
    fn password_rules() {
        assert!(validate_password("abcdef12").is_ok());
        assert!(validate_password("short1").is_err());
        assert!(validate_password("lettersonly").is_err());
        assert!(validate_password("12345678").is_err());
    }

    #[test]
    fn phone_rules() {
        assert!(validate_phone("+49 170 1234567").is_ok());
        assert!(validate_phone("(030) 123-45-67").is_ok());
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("call me maybe").is_err());
    }

    #[test]
    fn zip_rules() {
        assert!(validate_zip("10115").is_ok());
        assert!(validate_zip("SW1A 1AA").is_ok());
        assert!(validate_zip("12").is_err());
        assert!(validate_zip("!!!").is_err());
    }

    #[test]
    fn registration_collects_all_failures() {
        let errors = validate_registration("foo@bar", "short", Some("x"), None);
        assert_eq!(errors.len(), 3);
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["email", "password", "phone"]);
    }

    #[test]
    fn registration_accepts_valid_input() {
        let errors = validate_registration(
            "user@example.com",
            "abcdef12",
            Some("+49 170 1234567"),
            Some("10115"),
        );
        assert!(errors.is_empty());
    }
}
