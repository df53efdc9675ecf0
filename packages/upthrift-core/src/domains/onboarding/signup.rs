//! Sign-up form validation.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

lazy_static! {
    static ref ZIPCODE_REGEX: Regex = Regex::new(r"^\d{5}$").unwrap();

    // Email pattern - RFC 5322 simplified
    static ref EMAIL_REGEX: Regex = Regex::new(
        r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$"
    ).unwrap();

    // US phone numbers, optional +1 prefix
    static ref PHONE_REGEX: Regex = Regex::new(
        r"^(?:\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})$"
    ).unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpField {
    Name,
    Zipcode,
    Email,
    Phone,
}

/// Raw input of the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub zipcode: String,
    pub email: String,
    pub phone: String,
}

/// Per-field validation errors. A field with `None` is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignUpErrors {
    pub name: Option<FieldError>,
    pub zipcode: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
}

impl SignUpErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.zipcode.is_none() && self.email.is_none() && self.phone.is_none()
    }

    pub fn get(&self, field: SignUpField) -> Option<FieldError> {
        match field {
            SignUpField::Name => self.name,
            SignUpField::Zipcode => self.zipcode,
            SignUpField::Email => self.email,
            SignUpField::Phone => self.phone,
        }
    }

    pub fn clear(&mut self, field: SignUpField) {
        match field {
            SignUpField::Name => self.name = None,
            SignUpField::Zipcode => self.zipcode = None,
            SignUpField::Email => self.email = None,
            SignUpField::Phone => self.phone = None,
        }
    }
}

/// A member who completed the sign-up form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub name: String,
    pub zipcode: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserAccount {
    /// First word of the name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }
}

impl SignUpForm {
    /// Store typed input. The zipcode keeps only its first five digits.
    pub fn set(&mut self, field: SignUpField, value: &str) {
        match field {
            SignUpField::Name => self.name = value.to_string(),
            SignUpField::Zipcode => self.zipcode = sanitize_zipcode(value),
            SignUpField::Email => self.email = value.to_string(),
            SignUpField::Phone => self.phone = value.to_string(),
        }
    }

    pub fn validate(&self) -> Result<UserAccount, SignUpErrors> {
        let errors = SignUpErrors {
            name: validate_name(&self.name),
            zipcode: validate_zipcode(&self.zipcode),
            email: optional(&self.email).and_then(|email| {
                (!EMAIL_REGEX.is_match(email)).then_some(FieldError::InvalidEmail)
            }),
            phone: optional(&self.phone).and_then(|phone| {
                (!PHONE_REGEX.is_match(phone)).then_some(FieldError::InvalidPhone)
            }),
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(UserAccount {
            name: self.name.trim().to_string(),
            zipcode: self.zipcode.trim().to_string(),
            email: optional(&self.email).map(str::to_string),
            phone: optional(&self.phone).map(str::to_string),
        })
    }
}

/// Digits only, at most five.
pub fn sanitize_zipcode(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(5).collect()
}

fn validate_name(name: &str) -> Option<FieldError> {
    let name = name.trim();
    if name.is_empty() {
        Some(FieldError::MissingName)
    } else if name.split_whitespace().count() < 2 {
        Some(FieldError::IncompleteName)
    } else {
        None
    }
}

fn validate_zipcode(zipcode: &str) -> Option<FieldError> {
    let zipcode = zipcode.trim();
    if zipcode.is_empty() {
        Some(FieldError::MissingZipcode)
    } else if !ZIPCODE_REGEX.is_match(zipcode) {
        Some(FieldError::InvalidZipcode)
    } else {
        None
    }
}

fn optional(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, zipcode: &str) -> SignUpForm {
        SignUpForm {
            name: name.into(),
            zipcode: zipcode.into(),
            ..SignUpForm::default()
        }
    }

    #[test]
    fn valid_form_produces_account() {
        let account = form("  Jessica Thompson ", "11201").validate().unwrap();

        assert_eq!(account.name, "Jessica Thompson");
        assert_eq!(account.first_name(), "Jessica");
        assert_eq!(account.email, None);
    }

    #[test]
    fn empty_form_reports_both_required_fields() {
        let errors = SignUpForm::default().validate().unwrap_err();

        assert_eq!(errors.name, Some(FieldError::MissingName));
        assert_eq!(errors.zipcode, Some(FieldError::MissingZipcode));
        assert_eq!(
            errors.name.unwrap().to_string(),
            "Please enter your full name"
        );
    }

    #[test]
    fn single_word_name_is_incomplete() {
        let errors = form("Cher", "11201").validate().unwrap_err();
        assert_eq!(errors.name, Some(FieldError::IncompleteName));
        assert_eq!(errors.zipcode, None);
    }

    #[test]
    fn short_zipcode_is_invalid() {
        let errors = form("Jo March", "123").validate().unwrap_err();
        assert_eq!(errors.zipcode, Some(FieldError::InvalidZipcode));
    }

    #[test]
    fn zipcode_input_keeps_five_digits() {
        let mut form = SignUpForm::default();
        form.set(SignUpField::Zipcode, "1a2-3 4567");
        assert_eq!(form.zipcode, "12345");
    }

    #[test]
    fn optional_contacts_are_checked_only_when_present() {
        let mut form = form("Jo March", "02134");
        form.email = "jo@example.com".into();
        form.phone = "(555) 123-4567".into();
        let account = form.validate().unwrap();
        assert_eq!(account.phone.as_deref(), Some("(555) 123-4567"));

        form.email = "jo@".into();
        form.phone = "12".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.email, Some(FieldError::InvalidEmail));
        assert_eq!(errors.phone, Some(FieldError::InvalidPhone));
    }

    #[test]
    fn clearing_a_field_error_leaves_others() {
        let mut errors = SignUpForm::default().validate().unwrap_err();
        errors.clear(SignUpField::Name);

        assert_eq!(errors.get(SignUpField::Name), None);
        assert_eq!(errors.get(SignUpField::Zipcode), Some(FieldError::MissingZipcode));
    }
}
