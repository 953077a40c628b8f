//! The hash input form.
//!
//! - `state`: `FormState` with the pure `update`/`render` pair
//! - `controller`: `FormController`, which runs `update`'s effects against a
//!   `HashClient`

pub mod controller;
pub mod state;

pub use controller::{FormController, SubmitOutcome};
pub use state::{
    render, update, Effect, FormEvent, FormState, FormView, EMPTY_INPUT_MESSAGE, SUBMITTING_LABEL,
    SUBMIT_LABEL,
};
