//! Async driver for the form.
//!
//! `FormController` owns the [`FormState`], runs the effects returned by
//! [`update`], and publishes every change on a `watch` channel so renderers
//! can follow the loading flag while a request is in flight.

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use hashgen_types::hash::HashResult;

use super::state::{update, Effect, FormEvent, FormState};
use crate::client::HashClient;
use crate::validate::is_alphanumeric;

/// How a call to [`FormController::submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; no request was made.
    Skipped,
    Succeeded(HashResult),
    /// The request failed; carries the message now shown in the form.
    Failed(String),
    /// A later submission took over before this one resolved.
    Superseded,
    /// The controller was torn down.
    Cancelled,
}

pub struct FormController<C> {
    client: C,
    state: watch::Sender<FormState>,
    cancel: CancellationToken,
}

impl<C: HashClient> FormController<C> {
    pub fn new(client: C) -> Self {
        Self::with_cancellation(client, CancellationToken::new())
    }

    /// Build a controller whose in-flight requests stop when `cancel` fires.
    pub fn with_cancellation(client: C, cancel: CancellationToken) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self {
            client,
            state,
            cancel,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Feed a keystroke. Returns whether the new value was accepted.
    pub fn input_changed(&self, raw: impl Into<String>) -> bool {
        let raw = raw.into();
        let accepted = is_alphanumeric(&raw);
        self.dispatch(FormEvent::InputChanged(raw));
        accepted
    }

    /// Submit the current input and wait for the outcome.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.cancel.is_cancelled() {
            return SubmitOutcome::Cancelled;
        }

        let (generation, input) = match self.dispatch(FormEvent::Submit).0 {
            Effect::None => return SubmitOutcome::Skipped,
            Effect::IssueRequest { generation, input } => (generation, input),
        };

        tracing::debug!(generation, input_len = input.len(), "submitting hash request");

        let outcome = tokio::select! {
            _ = self.cancel.cancelled() => None,
            outcome = self.client.generate_hash(&input) => Some(outcome),
        };

        let Some(outcome) = outcome else {
            tracing::debug!(generation, "hash request torn down");
            self.dispatch(FormEvent::Cancelled { generation });
            return SubmitOutcome::Cancelled;
        };

        let summary = match &outcome {
            Ok(result) => SubmitOutcome::Succeeded(result.clone()),
            Err(err) => {
                tracing::warn!(generation, error = %err, "hash request failed");
                SubmitOutcome::Failed(err.user_message())
            }
        };

        let (_, applied) = self.dispatch(FormEvent::Resolved {
            generation,
            outcome,
        });
        if applied {
            summary
        } else {
            tracing::debug!(generation, "discarding superseded hash response");
            SubmitOutcome::Superseded
        }
    }

    /// Tear the form down: abort any in-flight request and refuse new ones.
    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    /// Apply `event`, notifying subscribers only when the state changed.
    fn dispatch(&self, event: FormEvent) -> (Effect, bool) {
        let mut effect = Effect::None;
        let changed = self.state.send_if_modified(|state| {
            let before = state.clone();
            effect = update(state, event);
            *state != before
        });
        (effect, changed)
    }
}
