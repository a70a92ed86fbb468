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

//! The asynchronous half of a contact-form submission.

use std::cell::RefCell;

use futures::future::LocalBoxFuture;

use super::contact::{ContactForm, FormPayload, SubmitBlocked};
use crate::error::SubmitError;

/// The endpoint that receives contact requests. Its address, auth and
/// encoding belong to the implementation.
pub trait FormSubmitter {
    fn submit(&self, payload: FormPayload) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Shared access to a [`ContactForm`] that may be borrowed only briefly,
/// never across an `.await`.
pub trait FormHandle {
    /// Runs `f` against the form. `None` when the form no longer exists.
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormHandle for RefCell<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked(SubmitBlocked),
    Sent,
    Failed(SubmitError),
}

/// Validates, sends once and settles the form.
///
/// The form is released while the submitter runs, so a second call during
/// that time sees `Submitting` and returns [`SubmitBlocked::InFlight`]
/// without reaching the submitter. `None` means the form disappeared.
pub async fn submit_form<H, S, C>(form: &H, submitter: &S, now: C) -> Option<SubmitOutcome>
where
    H: FormHandle,
    S: FormSubmitter + ?Sized,
    C: Fn() -> f64,
{
    let payload = match form.with_form(|f| f.begin_submit(now()))? {
        Ok(payload) => payload,
        Err(blocked) => return Some(SubmitOutcome::Blocked(blocked)),
    };

    let result = submitter.submit(payload).await;

    let settled = form.with_form(|f| f.complete_submit(result.clone(), now()));
    if settled.is_none() {
        log::warn!("contact form went away before its submission settled");
    }
    Some(match result {
        Ok(()) => SubmitOutcome::Sent,
        Err(err) => SubmitOutcome::Failed(err),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::FutureExt;

    use super::*;
    use crate::form::contact::{FormPhase, DEFAULT_SUBMIT_LABEL};

    /// Resolves each submission with whatever is sent through `gate`.
    struct GatedSubmitter {
        calls: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<Result<(), SubmitError>>>>,
    }

    impl GatedSubmitter {
        fn new() -> (Self, oneshot::Sender<Result<(), SubmitError>>) {
            let (tx, rx) = oneshot::channel();
            (
                Self {
                    calls: Cell::new(0),
                    gate: RefCell::new(Some(rx)),
                },
                tx,
            )
        }
    }

    impl FormSubmitter for GatedSubmitter {
        fn submit(
            &self,
            _payload: FormPayload,
        ) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            async move {
                match gate {
                    Some(rx) => rx
                        .await
                        .unwrap_or_else(|_| Err(SubmitError::Network("gate dropped".into()))),
                    None => Ok(()),
                }
            }
            .boxed_local()
        }
    }

    fn filled_form() -> RefCell<ContactForm> {
        let mut form = ContactForm::default();
        form.input("name", "Sarah M.");
        form.input("email", "sarah@example.com");
        form.input("message", "Please send a wholesale price list.");
        RefCell::new(form)
    }

    #[test]
    fn resubmitting_while_in_flight_does_not_call_submitter() {
        let form = filled_form();
        let (submitter, gate) = GatedSubmitter::new();
        let mut gate = Some(gate);

        let (first, second, ()) = block_on(async {
            futures::join!(
                submit_form(&form, &submitter, || 0.0),
                submit_form(&form, &submitter, || 5.0),
                async {
                    if let Some(gate) = gate.take() {
                        let _ = gate.send(Ok(()));
                    }
                }
            )
        });

        assert_eq!(first, Some(SubmitOutcome::Sent));
        assert_eq!(second, Some(SubmitOutcome::Blocked(SubmitBlocked::InFlight)));
        assert_eq!(submitter.calls.get(), 1);
        assert_eq!(form.borrow().phase(), FormPhase::Submitted);
    }

    #[test]
    fn rejected_submission_restores_button_and_keeps_values() {
        let form = filled_form();
        let (submitter, gate) = GatedSubmitter::new();
        gate.send(Err(SubmitError::Network("offline".into()))).unwrap();

        let outcome = block_on(submit_form(&form, &submitter, || 0.0));

        assert_eq!(
            outcome,
            Some(SubmitOutcome::Failed(SubmitError::Network("offline".into())))
        );
        let form = form.borrow();
        assert_eq!(form.submit_label(), DEFAULT_SUBMIT_LABEL);
        assert!(form.submit_enabled());
        assert_eq!(form.value("email"), "sarah@example.com");
        assert_eq!(form.value("message"), "Please send a wholesale price list.");
    }

    #[test]
    fn invalid_form_never_reaches_submitter() {
        let form = RefCell::new(ContactForm::default());
        let (submitter, _gate) = GatedSubmitter::new();
        let outcome = block_on(submit_form(&form, &submitter, || 0.0));
        assert!(matches!(
            outcome,
            Some(SubmitOutcome::Blocked(SubmitBlocked::Invalid { .. }))
        ));
        assert_eq!(submitter.calls.get(), 0);
    }
}
