//! Per-step validation predicates
//!
//! Each step has one pure predicate over the form. Rules are checked in a
//! fixed order and the first violation is returned, so the user always sees
//! a single, stable message for a given form state.

use super::form::RegistrationForm;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// First violated rule for a step, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Organization name is required")]
    OrganizationNameMissing,
    #[error("Select an organization type")]
    RequestorTypeMissing,
    #[error("Contact person is required")]
    ContactPersonMissing,
    #[error("Email is required")]
    EmailMissing,
    #[error("Phone number is required")]
    PhoneMissing,
    #[error("Password is required")]
    PasswordMissing,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Enter a valid email address")]
    EmailMalformed,
    #[error("Address is required")]
    AddressMissing,
    #[error("City is required")]
    CityMissing,
    #[error("State is required")]
    StateMissing,
    #[error("Postal code is required")]
    PincodeMissing,
    #[error("Pick a location for the organization")]
    LocationMissing,
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Step 1: organization name, type, contact person
pub fn validate_organization(form: &RegistrationForm) -> Result<(), ValidationError> {
    let org = &form.organization;
    if is_blank(&org.name) {
        return Err(ValidationError::OrganizationNameMissing);
    }
    if org.requestor_type.is_none() {
        return Err(ValidationError::RequestorTypeMissing);
    }
    if is_blank(&org.contact_person) {
        return Err(ValidationError::ContactPersonMissing);
    }
    Ok(())
}

/// Step 2: credentials.
///
/// The rule order is part of the contract: non-empty checks, then the
/// password match, then the length floor, then the email shape. A short
/// matching password therefore reports the length violation even when the
/// email is also malformed.
pub fn validate_account(form: &RegistrationForm) -> Result<(), ValidationError> {
    let account = &form.account;
    if is_blank(&account.email) {
        return Err(ValidationError::EmailMissing);
    }
    if is_blank(&account.phone) {
        return Err(ValidationError::PhoneMissing);
    }
    if account.password.is_empty() {
        return Err(ValidationError::PasswordMissing);
    }
    if account.password != account.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if account.password.chars().count() < 8 {
        return Err(ValidationError::PasswordTooShort);
    }
    // The raw field value is what the payload submits, so the shape check
    // runs on it untrimmed; padded input is malformed, not normalized.
    if !email_regex().is_match(&account.email) {
        return Err(ValidationError::EmailMalformed);
    }
    Ok(())
}

/// Step 3: address fields and the joint coordinate check. A location is only
/// valid once both latitude and longitude are set, which the form guarantees
/// by assigning them as one `Coordinate`.
pub fn validate_location(form: &RegistrationForm) -> Result<(), ValidationError> {
    let location = &form.location;
    if is_blank(&location.address) {
        return Err(ValidationError::AddressMissing);
    }
    if is_blank(&location.city) {
        return Err(ValidationError::CityMissing);
    }
    if is_blank(&location.state) {
        return Err(ValidationError::StateMissing);
    }
    if is_blank(&location.pincode) {
        return Err(ValidationError::PincodeMissing);
    }
    if location.coordinate.is_none() {
        return Err(ValidationError::LocationMissing);
    }
    Ok(())
}
