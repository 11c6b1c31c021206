use tracing::{debug, info};

use super::error::{FieldErrors, MIN_MESSAGE_CHARS, ValidationError};
use super::{Confirmation, check_email, required};

pub const CONTACT_CONFIRMATION: &str = "Thank you for your message! I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];
}

/// A validated general enquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    errors: FieldErrors<ContactField>,
    attempted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn errors(&self) -> &FieldErrors<ContactField> {
        &self.errors
    }

    pub fn error(&self, field: ContactField) -> Option<ValidationError> {
        self.errors.get(field)
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
        if self.attempted {
            let result = self.check(field);
            self.errors.set(field, result);
        }
    }

    fn check(&self, field: ContactField) -> Result<(), ValidationError> {
        match field {
            ContactField::Name => required(&self.name, ValidationError::NameRequired),
            ContactField::Email => check_email(&self.email),
            ContactField::Message => {
                required(&self.message, ValidationError::MessageRequired)?;
                if self.message.trim().chars().count() < MIN_MESSAGE_CHARS {
                    Err(ValidationError::MessageTooShort)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Validate every field, recording the errors inline.
    pub fn validate(&mut self) -> bool {
        for field in ContactField::ALL {
            let result = self.check(field);
            self.errors.set(field, result);
        }
        self.errors.is_empty()
    }

    /// Submit the form. On success the fields are cleared.
    pub fn submit(&mut self) -> Result<Confirmation<ContactRequest>, FieldErrors<ContactField>> {
        self.attempted = true;
        if !self.validate() {
            debug!(errors = self.errors.len(), "contact form rejected");
            return Err(self.errors.clone());
        }

        let request = ContactRequest {
            name: std::mem::take(&mut self.name).trim().to_string(),
            email: std::mem::take(&mut self.email).trim().to_string(),
            message: std::mem::take(&mut self.message).trim().to_string(),
        };
        *self = Self::default();

        info!(name = %request.name, email = %request.email, "contact message submitted");
        Ok(Confirmation {
            message: CONTACT_CONFIRMATION,
            request,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Sam");
        form.set_field(ContactField::Email, "sam@example.com");
        form.set_field(ContactField::Message, "Can we talk about Kubernetes?");
        form
    }

    #[test]
    fn invalid_submission_reports_each_field() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Email, "not-an-email");
        form.set_field(ContactField::Message, "hey");

        let errors = form.submit().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(ContactField::Name), Some(ValidationError::NameRequired));
        assert_eq!(errors.get(ContactField::Email), Some(ValidationError::InvalidEmail));
        assert_eq!(errors.get(ContactField::Message), Some(ValidationError::MessageTooShort));
        assert_eq!(form.value(ContactField::Message), "hey");
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "   ");
        form.set_field(ContactField::Message, "          ");
        assert!(!form.validate());
        assert_eq!(form.error(ContactField::Name), Some(ValidationError::NameRequired));
        assert_eq!(form.error(ContactField::Email), Some(ValidationError::EmailRequired));
        assert_eq!(form.error(ContactField::Message), Some(ValidationError::MessageRequired));
    }

    #[test]
    fn edits_revalidate_only_after_first_attempt() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Email, "bad");
        assert!(form.errors().is_empty());

        assert!(form.submit().is_err());
        form.set_field(ContactField::Email, "good@example.com");
        assert_eq!(form.error(ContactField::Email), None);
        assert_eq!(form.error(ContactField::Name), Some(ValidationError::NameRequired));
    }

    #[test]
    fn valid_submission_confirms_and_clears() {
        let mut form = filled();
        let confirmation = form.submit().unwrap();
        assert_eq!(confirmation.message, CONTACT_CONFIRMATION);
        assert_eq!(confirmation.request.name, "Sam");

        for field in ContactField::ALL {
            assert_eq!(form.value(field), "");
        }
        assert!(form.errors().is_empty());
    }

    #[test]
    fn message_length_boundary() {
        let mut form = filled();
        form.set_field(ContactField::Message, "123456789");
        assert!(!form.validate());
        form.set_field(ContactField::Message, "1234567890");
        assert!(form.validate());

        // Surrounding whitespace does not count toward the minimum.
        form.set_field(ContactField::Message, "   123456789   ");
        assert!(!form.validate());
        assert_eq!(form.error(ContactField::Message), Some(ValidationError::MessageTooShort));
    }
}
