use std::collections::BTreeMap;

use thiserror::Error;

/// Minimum length of a contact message, in characters.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Inline validation failures. The display text is what the form shows
/// under the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Message is required")]
    MessageRequired,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,

    #[error("Please select a purpose")]
    PurposeRequired,

    #[error("Please select a preferred time")]
    PreferredTimeRequired,
}

/// At most one error per field, ordered by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, ValidationError>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: F) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, ValidationError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    pub(crate) fn set(&mut self, field: F, result: Result<(), ValidationError>) {
        match result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(error) => {
                self.errors.insert(field, error);
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }
}
