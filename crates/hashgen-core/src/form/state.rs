//! Form state and its pure update/render functions.
//!
//! `update` is the only way state changes. It returns an [`Effect`] telling
//! the driver whether a network request must be issued; the driver feeds
//! the request's outcome back in as [`FormEvent::Resolved`].

use hashgen_types::error::RequestError;
use hashgen_types::hash::HashResult;

use crate::validate::is_alphanumeric;

/// Error shown when submitting with blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a value.";

/// Submit control label while idle.
pub const SUBMIT_LABEL: &str = "Generate";

/// Submit control label while a request is in flight.
pub const SUBMITTING_LABEL: &str = "Generating...";

/// Everything the form shows, plus the submission counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    input: String,
    loading: bool,
    error: String,
    result: Option<HashResult>,
    /// Bumped on every submission that reaches the network.
    generation: u64,
}

impl FormState {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn trimmed_input(&self) -> &str {
        self.input.trim()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current error message; empty when no error is active.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn result(&self) -> Option<&HashResult> {
        self.result.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True when `generation` is the submission currently in flight.
    fn owns(&self, generation: u64) -> bool {
        self.loading && self.generation == generation
    }
}

/// Inputs to [`update`].
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// The user edited the text field; carries the full new value.
    InputChanged(String),
    /// The user pressed the submit control.
    Submit,
    /// A request issued for `generation` finished.
    Resolved {
        generation: u64,
        outcome: Result<HashResult, RequestError>,
    },
    /// The request issued for `generation` was torn down before finishing.
    Cancelled { generation: u64 },
}

/// Side effect requested by [`update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    IssueRequest { generation: u64, input: String },
}

/// Apply `event` to `state`.
pub fn update(state: &mut FormState, event: FormEvent) -> Effect {
    match event {
        FormEvent::InputChanged(raw) => {
            if is_alphanumeric(&raw) {
                state.input = raw;
                state.error.clear();
            }
            Effect::None
        }

        FormEvent::Submit => {
            let trimmed = state.trimmed_input().to_string();
            if trimmed.is_empty() {
                state.error = EMPTY_INPUT_MESSAGE.to_string();
                return Effect::None;
            }

            state.generation += 1;
            state.loading = true;
            state.error.clear();
            state.result = None;

            Effect::IssueRequest {
                generation: state.generation,
                input: trimmed,
            }
        }

        FormEvent::Resolved {
            generation,
            outcome,
        } => {
            if !state.owns(generation) {
                return Effect::None;
            }
            state.loading = false;
            match outcome {
                Ok(result) => state.result = Some(result),
                Err(err) => state.error = err.user_message(),
            }
            Effect::None
        }

        FormEvent::Cancelled { generation } => {
            if state.owns(generation) {
                state.loading = false;
            }
            Effect::None
        }
    }
}

/// What a renderer needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<'a> {
    pub input: &'a str,
    pub input_disabled: bool,
    pub submit_disabled: bool,
    pub button_label: &'static str,
    pub error: Option<&'a str>,
    pub result: Option<&'a HashResult>,
}

/// Derive the view for `state`.
pub fn render(state: &FormState) -> FormView<'_> {
    FormView {
        input: state.input(),
        input_disabled: state.loading,
        submit_disabled: state.loading || state.trimmed_input().is_empty(),
        button_label: if state.loading {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        },
        error: (!state.error.is_empty()).then_some(state.error.as_str()),
        result: state.result(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashgen_types::error::GENERIC_FAILURE_MESSAGE;

    fn typed(value: &str) -> FormState {
        let mut state = FormState::default();
        update(&mut state, FormEvent::InputChanged(value.to_string()));
        state
    }

    fn sample_result() -> HashResult {
        HashResult {
            input: "abc123".to_string(),
            hash: "Z9f3Ab21Qk".to_string(),
        }
    }

    /// Submit and return the issued generation.
    fn submit(state: &mut FormState) -> u64 {
        match update(state, FormEvent::Submit) {
            Effect::IssueRequest { generation, .. } => generation,
            Effect::None => panic!("expected a request to be issued"),
        }
    }

    #[test]
    fn test_input_change_rejects_non_alphanumeric() {
        let mut state = typed("abc");
        for raw in ["abc-", "ab c", "abc!", " abc", "abc\t", "ü"] {
            let before = state.clone();
            let effect = update(&mut state, FormEvent::InputChanged(raw.to_string()));
            assert_eq!(effect, Effect::None);
            assert_eq!(state, before, "{raw:?} must not change state");
        }
        assert_eq!(state.input(), "abc");
    }

    #[test]
    fn test_rejected_input_keeps_error() {
        let mut state = FormState::default();
        update(&mut state, FormEvent::Submit);
        update(&mut state, FormEvent::InputChanged("a b".to_string()));
        assert_eq!(state.error(), EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn test_input_change_accepts_alphanumeric_and_clears_error() {
        for raw in ["", "a", "abc123", "ABC", "007"] {
            let mut state = FormState::default();
            update(&mut state, FormEvent::Submit);
            assert_eq!(state.error(), EMPTY_INPUT_MESSAGE);

            update(&mut state, FormEvent::InputChanged(raw.to_string()));
            assert_eq!(state.input(), raw);
            assert_eq!(state.error(), "");
        }
    }

    #[test]
    fn test_submit_empty_sets_error_without_request() {
        let mut state = FormState::default();
        assert_eq!(update(&mut state, FormEvent::Submit), Effect::None);
        assert_eq!(state.error(), EMPTY_INPUT_MESSAGE);
        assert!(!state.is_loading());
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn test_submit_whitespace_only_sets_error() {
        // Whitespace never gets past the allow-list, so the field stays empty.
        let mut state = typed("   ");
        assert_eq!(state.input(), "");
        assert_eq!(update(&mut state, FormEvent::Submit), Effect::None);
        assert_eq!(state.error(), EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn test_submit_issues_request_and_clears_previous_outcome() {
        let mut state = typed("abc123");
        let first = submit(&mut state);
        update(
            &mut state,
            FormEvent::Resolved {
                generation: first,
                outcome: Ok(sample_result()),
            },
        );
        assert!(state.result().is_some());

        let effect = update(&mut state, FormEvent::Submit);
        assert_eq!(
            effect,
            Effect::IssueRequest {
                generation: first + 1,
                input: "abc123".to_string(),
            }
        );
        assert!(state.is_loading());
        assert!(state.result().is_none());
        assert_eq!(state.error(), "");
    }

    #[test]
    fn test_resolved_success_stores_result() {
        let mut state = typed("abc123");
        let generation = submit(&mut state);
        update(
            &mut state,
            FormEvent::Resolved {
                generation,
                outcome: Ok(sample_result()),
            },
        );
        assert_eq!(state.result(), Some(&sample_result()));
        assert_eq!(state.error(), "");
        assert!(!state.is_loading());
    }

    #[test]
    fn test_resolved_rejection_uses_server_message() {
        let mut state = typed("abc123");
        let generation = submit(&mut state);
        update(
            &mut state,
            FormEvent::Resolved {
                generation,
                outcome: Err(RequestError::rejected(
                    500,
                    Some("service unavailable".to_string()),
                )),
            },
        );
        assert_eq!(state.error(), "service unavailable");
        assert!(state.result().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_resolved_transport_failure_uses_generic_message() {
        let mut state = typed("abc123");
        let generation = submit(&mut state);
        update(
            &mut state,
            FormEvent::Resolved {
                generation,
                outcome: Err(RequestError::Transport("connection refused".to_string())),
            },
        );
        assert_eq!(state.error(), GENERIC_FAILURE_MESSAGE);
        assert!(state.result().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_resolution_is_ignored() {
        let mut state = typed("abc123");
        let first = submit(&mut state);
        let second = submit(&mut state);

        let before = state.clone();
        update(
            &mut state,
            FormEvent::Resolved {
                generation: first,
                outcome: Ok(sample_result()),
            },
        );
        assert_eq!(state, before);
        assert!(state.is_loading());

        update(
            &mut state,
            FormEvent::Resolved {
                generation: second,
                outcome: Err(RequestError::rejected(500, None)),
            },
        );
        assert!(!state.is_loading());
        assert_eq!(state.error(), "Failed to generate hash");
    }

    #[test]
    fn test_cancelled_clears_loading_only_for_current_generation() {
        let mut state = typed("abc123");
        let first = submit(&mut state);
        let second = submit(&mut state);

        update(&mut state, FormEvent::Cancelled { generation: first });
        assert!(state.is_loading());

        update(&mut state, FormEvent::Cancelled { generation: second });
        assert!(!state.is_loading());
        assert!(state.result().is_none());
        assert_eq!(state.error(), "");

        // A late answer for the torn-down request changes nothing.
        let before = state.clone();
        update(
            &mut state,
            FormEvent::Resolved {
                generation: second,
                outcome: Ok(sample_result()),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_render_idle_empty() {
        let state = FormState::default();
        let view = render(&state);
        assert!(view.submit_disabled);
        assert!(!view.input_disabled);
        assert_eq!(view.button_label, "Generate");
        assert!(view.error.is_none());
        assert!(view.result.is_none());
    }

    #[test]
    fn test_render_loading_disables_controls() {
        let mut state = typed("abc123");
        assert!(!render(&state).submit_disabled);

        submit(&mut state);
        let view = render(&state);
        assert!(view.submit_disabled);
        assert!(view.input_disabled);
        assert_eq!(view.button_label, "Generating...");
    }

    #[test]
    fn test_render_exposes_error_and_result() {
        let mut state = FormState::default();
        update(&mut state, FormEvent::Submit);
        assert_eq!(render(&state).error, Some(EMPTY_INPUT_MESSAGE));

        let mut state = typed("abc123");
        let generation = submit(&mut state);
        update(
            &mut state,
            FormEvent::Resolved {
                generation,
                outcome: Ok(sample_result()),
            },
        );
        let view = render(&state);
        assert_eq!(view.result.map(|r| r.hash.as_str()), Some("Z9f3Ab21Qk"));
        assert_eq!(view.input, "abc123");
    }
}
