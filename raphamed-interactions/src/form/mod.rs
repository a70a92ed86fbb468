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

//! Contact form: per-field validation, a single in-flight submission and the
//! result banner.
//!
//! ```text
//! Editing ─submit─▶ Validating ─invalid─▶ Editing
//!                        └─valid─▶ Submitting ─ok──▶ Submitted ─edit─▶ Editing
//!                                       └─err─▶ SubmissionFailed ─edit─▶ Editing
//! ```

mod contact;
mod field;
mod submit;

pub use contact::{
    Banner, BannerKind, ContactForm, FormPayload, FormPhase, SubmitBlocked, BUSY_SUBMIT_LABEL,
    CONTACT_FIELDS, DEFAULT_SUBMIT_LABEL, FAILURE_MESSAGE, INVALID_FORM_MESSAGE,
    SUCCESS_BANNER_MS, SUCCESS_MESSAGE,
};
pub use field::{FieldKind, FieldSpec, FieldState, FieldValidation};
pub use submit::{submit_form, FormHandle, FormSubmitter, SubmitOutcome};
