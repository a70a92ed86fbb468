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

//! Contact-form submitters and the signal-backed form handle.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use raphamed_interactions::form::{FormHandle, FormPayload, FormSubmitter};
use raphamed_interactions::{ContactForm, SubmitError};

use crate::constants::{CONTACT_FORM_ENDPOINT, SIMULATE_SUBMIT_FAILURE};

/// Latency of the simulated submitter.
pub const SIMULATED_LATENCY_MS: u32 = 1_500;

/// POSTs the payload as JSON and treats any 2xx as success.
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl FormSubmitter for HttpSubmitter {
    fn submit(&self, payload: FormPayload) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let request = self.client.post(&self.endpoint).json(&payload);
        let endpoint = self.endpoint.clone();
        async move {
            let response = request
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;
            let status = response.status();
            if status.is_success() {
                log::info!("contact request accepted by {endpoint}");
                Ok(())
            } else {
                Err(SubmitError::Rejected {
                    status: status.as_u16(),
                })
            }
        }
        .boxed_local()
    }
}

/// Stand-in used when no endpoint is configured: waits, logs the payload and
/// resolves.
pub struct SimulatedSubmitter {
    pub latency_ms: u32,
    pub fail: bool,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            latency_ms: SIMULATED_LATENCY_MS,
            fail: false,
        }
    }
}

impl FormSubmitter for SimulatedSubmitter {
    fn submit(&self, payload: FormPayload) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let latency_ms = self.latency_ms;
        let fail = self.fail;
        async move {
            let body = payload.to_json()?;
            TimeoutFuture::new(latency_ms).await;
            if fail {
                return Err(SubmitError::Network("simulated failure".to_string()));
            }
            log::info!("simulated contact request: {body}");
            Ok(())
        }
        .boxed_local()
    }
}

/// The submitter selected at build time.
pub fn configured() -> Box<dyn FormSubmitter> {
    match CONTACT_FORM_ENDPOINT {
        Some(endpoint) if !endpoint.trim().is_empty() => Box::new(HttpSubmitter::new(endpoint)),
        _ => Box::new(SimulatedSubmitter {
            fail: *SIMULATE_SUBMIT_FAILURE,
            ..SimulatedSubmitter::default()
        }),
    }
}

/// A [`ContactForm`] held in a signal. Each access is a short `try_update`, so
/// nothing is borrowed across an `.await`, and a disposed signal reads as a
/// vanished form.
#[derive(Clone, Copy)]
pub struct SignalForm(pub RwSignal<ContactForm>);

impl FormHandle for SignalForm {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
