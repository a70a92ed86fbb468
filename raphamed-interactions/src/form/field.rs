/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Field-level validation rules.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s\-+()]{10,}$").unwrap());

pub const MIN_MESSAGE_CHARS: usize = 10;
pub const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Name,
    Email,
    Phone,
    MultiLine,
}

impl FieldKind {
    /// The `type` attribute for single-line inputs.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            FieldKind::Text | FieldKind::Name | FieldKind::MultiLine => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn is_phone(&self) -> bool {
        self.kind == FieldKind::Phone || self.name == "phone"
    }

    fn is_name(&self) -> bool {
        self.kind == FieldKind::Name || self.name == "name"
    }

    /// Checks `raw` against every rule that applies to this field. When more
    /// than one rule fails, the most specific (last checked) message wins.
    pub fn validate(&self, raw: &str) -> Result<(), String> {
        let value = raw.trim();
        let mut error = None;

        if self.required && value.is_empty() {
            error = Some(format!("{} is required", self.label));
        }
        if value.is_empty() {
            return error.map_or(Ok(()), Err);
        }
        if self.kind == FieldKind::Email && !EMAIL_RE.is_match(value) {
            error = Some("Please enter a valid email address".to_string());
        }
        if self.is_phone() && !PHONE_RE.is_match(value) {
            error = Some("Please enter a valid phone number".to_string());
        }
        if self.kind == FieldKind::MultiLine && value.chars().count() < MIN_MESSAGE_CHARS {
            error = Some(format!(
                "Message must be at least {MIN_MESSAGE_CHARS} characters"
            ));
        }
        if self.is_name() && value.chars().count() < MIN_NAME_CHARS {
            error = Some(format!("Name must be at least {MIN_NAME_CHARS} characters"));
        }
        error.map_or(Ok(()), Err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidation {
    pub value: String,
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl Default for FieldValidation {
    fn default() -> Self {
        Self {
            value: String::new(),
            is_valid: true,
            error_message: None,
        }
    }
}

/// One input of a form together with its latest validation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub spec: FieldSpec,
    validation: FieldValidation,
}

impl FieldState {
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            validation: FieldValidation::default(),
        }
    }

    pub fn value(&self) -> &str {
        &self.validation.value
    }

    pub fn validation(&self) -> &FieldValidation {
        &self.validation
    }

    pub fn is_invalid(&self) -> bool {
        !self.validation.is_valid
    }

    pub fn error(&self) -> Option<&str> {
        self.validation.error_message.as_deref()
    }

    /// Stores an edit and drops any error shown for the previous value. The
    /// field is checked again on the next blur or submit.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.validation.value = value.into();
        self.clear_error();
    }

    pub fn validate(&mut self) -> bool {
        match self.spec.validate(&self.validation.value) {
            Ok(()) => self.clear_error(),
            Err(message) => {
                self.validation.is_valid = false;
                self.validation.error_message = Some(message);
            }
        }
        self.validation.is_valid
    }

    pub fn clear_error(&mut self) {
        self.validation.is_valid = true;
        self.validation.error_message = None;
    }

    pub fn reset(&mut self) {
        self.validation = FieldValidation::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldSpec = FieldSpec::new("name", "Full Name", FieldKind::Name).required();
    const EMAIL: FieldSpec = FieldSpec::new("email", "Email", FieldKind::Email).required();
    const PHONE: FieldSpec = FieldSpec::new("phone", "Phone", FieldKind::Phone);
    const MESSAGE: FieldSpec =
        FieldSpec::new("message", "Message", FieldKind::MultiLine).required();
    const COMPANY: FieldSpec = FieldSpec::new("company", "Company", FieldKind::Text);

    #[test]
    fn required_field_rejects_blank_and_accepts_any_text() {
        let err = COMPANY.required().validate("   ").unwrap_err();
        assert_eq!(err, "Company is required");
        assert!(COMPANY.required().validate("x").is_ok());
    }

    #[test]
    fn optional_blank_field_passes_every_rule() {
        assert!(PHONE.validate("").is_ok());
        assert!(COMPANY.validate("  ").is_ok());
    }

    #[test]
    fn email_needs_a_domain_with_tld() {
        assert!(EMAIL.validate("a@b").is_err());
        assert!(EMAIL.validate("a@b.c").is_err());
        assert!(EMAIL.validate("a@b.com").is_ok());
        assert!(EMAIL.validate(" first.last@clinic.example.ca ").is_ok());
        assert!(EMAIL.validate("no spaces@x.com").is_err());
    }

    #[test]
    fn phone_accepts_common_punctuation() {
        assert!(PHONE.validate("+1 (416) 555-0199").is_ok());
        assert!(PHONE.validate("555-0199").is_err());
        assert!(PHONE.validate("416.555.0199").is_err());
        // Named "phone" even without the phone kind.
        let named = FieldSpec::new("phone", "Phone", FieldKind::Text);
        assert!(named.validate("12345").is_err());
    }

    #[test]
    fn message_and_name_minimum_lengths_use_trimmed_value() {
        assert!(MESSAGE.validate("  too short ").is_err());
        assert!(MESSAGE.validate("Need 500 boxes of gloves").is_ok());
        assert_eq!(
            NAME.validate(" J ").unwrap_err(),
            "Name must be at least 2 characters"
        );
        assert!(NAME.validate("Jo").is_ok());
    }

    #[test]
    fn edits_are_not_validated_until_blur() {
        let mut field = FieldState::new(EMAIL);
        field.edit("a@b");
        assert!(field.validation().is_valid);
        assert!(!field.validate());
        assert_eq!(field.error(), Some("Please enter a valid email address"));
    }

    #[test]
    fn edit_clears_an_existing_error() {
        let mut field = FieldState::new(EMAIL);
        field.edit("a@b");
        assert!(!field.validate());

        // still not a valid address, but the user is mid-edit
        field.edit("a@bc");
        assert!(field.validation().is_valid);
        assert_eq!(field.error(), None);
        assert_eq!(field.value(), "a@bc");

        assert!(!field.validate());
        assert!(field.is_invalid());
    }
}
