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

use thiserror::Error;

/// Failure of the contact-form submission collaborator.
///
/// All variants are recoverable: the form keeps its values and the user may
/// retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("endpoint rejected the submission with status {status}")]
    Rejected { status: u16 },
    #[error("could not encode submission: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Encode(err.to_string())
    }
}

/// Failure to bring up the map widget. Logged and the widget is skipped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("maps library is not loaded")]
    LibraryMissing,
    #[error("no element with id `{0}`")]
    HostMissing(String),
    #[error("maps library failed to construct `{0}`")]
    Construct(&'static str),
}
