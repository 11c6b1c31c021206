//! Contact and booking forms.
//!
//! Forms validate on submit. After the first failed submit every edit
//! re-validates the edited field, so inline errors disappear as soon as the
//! value becomes acceptable. A successful submit clears the form and hands
//! back the request together with the confirmation text.

pub mod booking;
pub mod contact;
pub mod error;

use once_cell::sync::Lazy;
use regex::Regex;

pub use booking::{BookingField, BookingForm, BookingRequest};
pub use contact::{ContactField, ContactForm, ContactRequest};
pub use error::{FieldErrors, MIN_MESSAGE_CHARS, ValidationError};

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Shape check only: something, an `@`, and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

/// A submitted form, ready to be handed off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation<T> {
    /// Text shown to the visitor.
    pub message: &'static str,
    pub request: T,
}

pub(crate) fn required(value: &str, error: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(())
    }
}

pub(crate) fn check_email(value: &str) -> Result<(), ValidationError> {
    required(value, ValidationError::EmailRequired)?;
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("alex@example.com"));
        assert!(is_valid_email("  a.b+c@mail.co.uk "));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn email_checks_required_before_shape() {
        assert_eq!(check_email("   "), Err(ValidationError::EmailRequired));
        assert_eq!(check_email("nope"), Err(ValidationError::InvalidEmail));
        assert_eq!(check_email("x@y.io"), Ok(()));
    }
}
