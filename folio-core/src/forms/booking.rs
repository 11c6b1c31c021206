use folio_model::BookingOptions;
use tracing::{debug, info};

use super::error::{FieldErrors, ValidationError};
use super::{Confirmation, check_email, required};

pub const BOOKING_CONFIRMATION: &str =
    "Booking request received! I'll contact you to confirm the details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    Name,
    Email,
    Purpose,
    PreferredTime,
    AdditionalInfo,
}

impl BookingField {
    pub const ALL: [BookingField; 5] = [
        BookingField::Name,
        BookingField::Email,
        BookingField::Purpose,
        BookingField::PreferredTime,
        BookingField::AdditionalInfo,
    ];
}

/// A validated 1:1 session request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub purpose: String,
    pub preferred_time: String,
    pub additional_info: Option<String>,
}

/// Booking form. Purpose and time must be one of the catalog's options.
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    name: String,
    email: String,
    purpose: Option<String>,
    preferred_time: Option<String>,
    additional_info: String,
    errors: FieldErrors<BookingField>,
    attempted: bool,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: BookingField) -> Option<&str> {
        match field {
            BookingField::Name => Some(&self.name),
            BookingField::Email => Some(&self.email),
            BookingField::Purpose => self.purpose.as_deref(),
            BookingField::PreferredTime => self.preferred_time.as_deref(),
            BookingField::AdditionalInfo => Some(&self.additional_info),
        }
    }

    pub fn errors(&self) -> &FieldErrors<BookingField> {
        &self.errors
    }

    pub fn error(&self, field: BookingField) -> Option<ValidationError> {
        self.errors.get(field)
    }

    /// Set a field. Selecting an empty string clears a choice.
    pub fn set_field(&mut self, field: BookingField, value: impl Into<String>, options: &BookingOptions) {
        let value = value.into();
        let choice = (!value.is_empty()).then(|| value.clone());
        match field {
            BookingField::Name => self.name = value,
            BookingField::Email => self.email = value,
            BookingField::Purpose => self.purpose = choice,
            BookingField::PreferredTime => self.preferred_time = choice,
            BookingField::AdditionalInfo => self.additional_info = value,
        }
        if self.attempted {
            let result = self.check(field, options);
            self.errors.set(field, result);
        }
    }

    fn check(&self, field: BookingField, options: &BookingOptions) -> Result<(), ValidationError> {
        match field {
            BookingField::Name => required(&self.name, ValidationError::NameRequired),
            BookingField::Email => check_email(&self.email),
            BookingField::Purpose => {
                one_of(self.purpose.as_deref(), &options.purposes, ValidationError::PurposeRequired)
            }
            BookingField::PreferredTime => one_of(
                self.preferred_time.as_deref(),
                &options.time_windows,
                ValidationError::PreferredTimeRequired,
            ),
            BookingField::AdditionalInfo => Ok(()),
        }
    }

    pub fn validate(&mut self, options: &BookingOptions) -> bool {
        for field in BookingField::ALL {
            let result = self.check(field, options);
            self.errors.set(field, result);
        }
        self.errors.is_empty()
    }

    pub fn submit(
        &mut self,
        options: &BookingOptions,
    ) -> Result<Confirmation<BookingRequest>, FieldErrors<BookingField>> {
        self.attempted = true;
        if !self.validate(options) {
            debug!(errors = self.errors.len(), "booking form rejected");
            return Err(self.errors.clone());
        }

        let form = std::mem::take(self);
        let additional_info = form.additional_info.trim();
        let request = BookingRequest {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            purpose: form.purpose.unwrap_or_default(),
            preferred_time: form.preferred_time.unwrap_or_default(),
            additional_info: (!additional_info.is_empty()).then(|| additional_info.to_string()),
        };

        info!(
            name = %request.name,
            purpose = %request.purpose,
            time = %request.preferred_time,
            "booking request submitted"
        );
        Ok(Confirmation {
            message: BOOKING_CONFIRMATION,
            request,
        })
    }
}

fn one_of(choice: Option<&str>, options: &[String], error: ValidationError) -> Result<(), ValidationError> {
    match choice {
        Some(choice) if options.iter().any(|option| option == choice) => Ok(()),
        Some(choice) => {
            debug!(choice, "choice is not offered");
            Err(error)
        }
        None => Err(error),
    }
}
