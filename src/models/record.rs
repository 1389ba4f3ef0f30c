//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use serde::Serialize;
use std::fmt;

/// A contact: a name, its phone numbers in the order they were added, and
/// an optional birthday.
///
/// Records serialize for display and export only. Phones rewritten by
/// `edit_phone` may not pass validation, so a record is not rebuilt from
/// its serialized form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Record {
    /// The name the record is filed under
    name: Name,

    /// Phone numbers; duplicates are kept
    phones: Vec<PhoneNumber>,

    /// Birthday, if one was added
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and leaves the record
    /// unchanged if `phone` is not ten digits.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every phone whose value is exactly `phone`.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the value of every phone matching `old_phone`
    /// (case-insensitively) with `new_phone`.
    ///
    /// `new_phone` is stored as given; it is not validated.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) {
        for phone in self
            .phones
            .iter_mut()
            .filter(|p| p.matches_ignore_case(old_phone))
        {
            phone.overwrite_unchecked(new_phone);
        }
    }

    /// First phone matching `phone` case-insensitively.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.matches_ignore_case(phone))
    }

    /// Validate and set the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` and keeps the previous
    /// birthday if `birthday` is not a real `DD.MM.YYYY` date.
    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
