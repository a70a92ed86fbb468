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

use std::collections::BTreeMap;

use serde::Serialize;

use super::field::{FieldKind, FieldSpec, FieldState};
use crate::clock::Scheduled;
use crate::error::SubmitError;

/// How long the success banner stays up.
pub const SUCCESS_BANNER_MS: f64 = 6_000.0;

pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";
pub const BUSY_SUBMIT_LABEL: &str = "Sending...";

pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors above before submitting";
pub const SUCCESS_MESSAGE: &str = "✓ Thank you! Your message has been sent successfully.";
pub const FAILURE_MESSAGE: &str =
    "✗ Sorry, there was an error. Please try again or email us directly.";

/// Inputs of the RaphaMed contact section, in tab order.
pub const CONTACT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Full Name", FieldKind::Name).required(),
    FieldSpec::new("email", "Email", FieldKind::Email).required(),
    FieldSpec::new("phone", "Phone", FieldKind::Phone),
    FieldSpec::new("company", "Clinic / Company", FieldKind::Text),
    FieldSpec::new("message", "Message", FieldKind::MultiLine).required(),
];

/// Flat `field name -> value` mapping handed to the submission endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload(pub BTreeMap<String, String>);

impl FormPayload {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn to_json(&self) -> Result<String, SubmitError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Submitted,
    SubmissionFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

/// Inline message shown under the submit button.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    /// `None` keeps the banner until dismissed or replaced.
    pub expires_at: Option<f64>,
}

/// Why [`ContactForm::begin_submit`] did not hand out a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Validation failed; focus should move to this field.
    Invalid { first_invalid: &'static str },
    /// A submission is already in flight.
    InFlight,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FieldState>,
    phase: FormPhase,
    banner: Option<Banner>,
    submit_label: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(CONTACT_FIELDS.iter().copied())
    }
}

impl ContactForm {
    pub fn new(fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        Self {
            fields: fields.into_iter().map(FieldState::new).collect(),
            phase: FormPhase::Editing,
            banner: None,
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
        }
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|f| f.spec.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map_or("", FieldState::value)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Label for the submit control in the current phase.
    pub fn submit_label(&self) -> &str {
        if self.is_submitting() {
            BUSY_SUBMIT_LABEL
        } else {
            &self.submit_label
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting()
    }

    pub fn input(&mut self, name: &str, value: impl Into<String>) {
        let Some(field) = self.field_mut(name) else {
            log::warn!("input for unknown field `{name}`");
            return;
        };
        field.edit(value);
        if matches!(self.phase, FormPhase::Submitted | FormPhase::SubmissionFailed) {
            self.phase = FormPhase::Editing;
        }
    }

    /// Validates one field when it loses focus. Returns whether it is valid.
    pub fn blur(&mut self, name: &str) -> bool {
        self.field_mut(name).map_or(true, FieldState::validate)
    }

    /// Validates every field and, when all pass, moves to `Submitting` and
    /// returns the payload to send. Exactly one caller gets a payload until
    /// [`ContactForm::complete_submit`] runs.
    pub fn begin_submit(&mut self, now: f64) -> Result<FormPayload, SubmitBlocked> {
        if self.is_submitting() {
            log::debug!("contact form already submitting");
            return Err(SubmitBlocked::InFlight);
        }

        // Every field is validated so each one shows its own error.
        let mut first_invalid = None;
        for field in &mut self.fields {
            if !field.validate() && first_invalid.is_none() {
                first_invalid = Some(field.spec.name);
            }
        }
        if let Some(first_invalid) = first_invalid {
            self.phase = FormPhase::Editing;
            self.show_banner(BannerKind::Error, INVALID_FORM_MESSAGE, now);
            return Err(SubmitBlocked::Invalid { first_invalid });
        }

        self.phase = FormPhase::Submitting;
        self.banner = None;
        Ok(self.payload())
    }

    /// Settles an in-flight submission. The submit control is usable again
    /// whatever `result` is.
    pub fn complete_submit(&mut self, result: Result<(), SubmitError>, now: f64) {
        if !self.is_submitting() {
            log::warn!("submission completed while not submitting");
        }
        match result {
            Ok(()) => {
                log::info!("contact form submitted");
                self.fields.iter_mut().for_each(FieldState::reset);
                self.phase = FormPhase::Submitted;
                self.show_banner(BannerKind::Success, SUCCESS_MESSAGE, now);
            }
            Err(err) => {
                log::error!("Form submission error: {err}");
                self.phase = FormPhase::SubmissionFailed;
                self.show_banner(BannerKind::Error, FAILURE_MESSAGE, now);
            }
        }
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    pub fn payload(&self) -> FormPayload {
        FormPayload(
            self.fields
                .iter()
                .map(|f| (f.spec.name.to_string(), f.value().to_string()))
                .collect(),
        )
    }

    fn show_banner(&mut self, kind: BannerKind, message: &str, now: f64) {
        self.banner = Some(Banner {
            kind,
            message: message.to_string(),
            expires_at: (kind == BannerKind::Success).then_some(now + SUCCESS_BANNER_MS),
        });
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields.iter_mut().find(|f| f.spec.name == name)
    }
}

impl Scheduled for ContactForm {
    fn next_deadline(&self) -> Option<f64> {
        self.banner.as_ref().and_then(|b| b.expires_at)
    }

    fn tick(&mut self, now: f64) {
        if self
            .banner
            .as_ref()
            .and_then(|b| b.expires_at)
            .is_some_and(|at| now >= at)
        {
            self.banner = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::run_until;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.input("name", "Dr. James L.");
        form.input("email", "james@clinic.ca");
        form.input("phone", "+1 416 555 0199");
        form.input("message", "We need 40 cases of nitrile gloves.");
        form
    }

    #[test]
    fn invalid_submit_flags_every_field_and_points_at_the_first() {
        let mut form = ContactForm::default();
        form.input("email", "a@b");
        let blocked = form.begin_submit(0.0).unwrap_err();
        assert_eq!(
            blocked,
            SubmitBlocked::Invalid {
                first_invalid: "name"
            }
        );
        assert!(form.field("name").unwrap().is_invalid());
        assert!(form.field("email").unwrap().is_invalid());
        assert!(form.field("message").unwrap().is_invalid());
        assert!(!form.field("phone").unwrap().is_invalid());
        assert_eq!(form.banner().unwrap().message, INVALID_FORM_MESSAGE);
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn valid_submit_hands_out_one_payload() {
        let mut form = filled();
        let payload = form.begin_submit(0.0).unwrap();
        assert_eq!(payload.get("email"), Some("james@clinic.ca"));
        assert_eq!(payload.get("company"), Some(""));
        assert_eq!(form.submit_label(), BUSY_SUBMIT_LABEL);
        assert!(!form.submit_enabled());

        assert_eq!(form.begin_submit(10.0), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn success_clears_fields_and_banner_expires() {
        let mut form = filled();
        form.begin_submit(0.0).unwrap();
        form.complete_submit(Ok(()), 1_500.0);

        assert_eq!(form.phase(), FormPhase::Submitted);
        assert!(form.fields().iter().all(|f| f.value().is_empty() && !f.is_invalid()));
        assert_eq!(form.submit_label(), DEFAULT_SUBMIT_LABEL);
        assert_eq!(form.banner().unwrap().kind, BannerKind::Success);

        run_until(&mut form, 1_500.0, 7_499.0);
        assert!(form.banner().is_some());
        run_until(&mut form, 7_499.0, 7_500.0);
        assert!(form.banner().is_none());
    }

    #[test]
    fn failure_keeps_values_and_restores_button() {
        let mut form = filled().with_submit_label("Request Information");
        form.begin_submit(0.0).unwrap();
        form.complete_submit(Err(SubmitError::Rejected { status: 503 }), 800.0);

        assert_eq!(form.phase(), FormPhase::SubmissionFailed);
        assert_eq!(form.value("name"), "Dr. James L.");
        assert_eq!(form.submit_label(), "Request Information");
        assert!(form.submit_enabled());
        let banner = form.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.expires_at, None);

        form.input("message", "We need 45 cases of nitrile gloves.");
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.begin_submit(900.0).is_ok(), "retry allowed");
    }

    #[test]
    fn email_blur_round_trip() {
        let mut form = ContactForm::default();
        form.input("email", "a@b");
        assert!(!form.blur("email"));
        assert!(!form.field("email").unwrap().validation().is_valid);
        form.input("email", "a@b.");
        assert_eq!(form.field("email").unwrap().error(), None);
        form.input("email", "a@b.com");
        assert!(form.blur("email"));
        assert!(form.field("email").unwrap().validation().is_valid);
    }

    #[test]
    fn payload_serializes_as_flat_object() {
        let form = filled();
        let json = form.payload().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Dr. James L.");
        assert!(value.as_object().unwrap().values().all(|v| v.is_string()));
    }
}
