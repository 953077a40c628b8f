//! `hashgen generate`: one keystroke batch plus one submit.
//!
//! Input left blank after trimming goes through the form as-is and fails
//! with the form's "Please enter a value." message. Any other input with
//! characters outside the allow-list is refused before submitting, since
//! the form would silently keep an empty field.

use std::io;

use anyhow::bail;

use hashgen_core::form::{render, FormController, SubmitOutcome};
use hashgen_types::config::ClientConfig;

use super::build_client;
use super::render::{spawn_loading_spinner, view_json, write_view};

pub async fn run(
    config: &ClientConfig,
    endpoint: Option<String>,
    input: &str,
    json: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let controller = FormController::new(build_client(config, endpoint)?);

    if !controller.input_changed(input) && !input.trim().is_empty() {
        bail!("'{input}' contains characters other than letters and digits");
    }

    let spinner = (!json && !quiet).then(|| spawn_loading_spinner(controller.subscribe()));
    let outcome = controller.submit().await;
    let state = controller.state();
    drop(controller);
    if let Some(spinner) = spinner {
        let _ = spinner.await;
    }

    let view = render(&state);
    if json {
        println!("{}", serde_json::to_string_pretty(&view_json(&view))?);
    } else if !quiet && view.result.is_some() {
        // Errors surface through the returned anyhow error.
        write_view(&mut io::stdout(), &view)?;
    }

    match outcome {
        SubmitOutcome::Succeeded(_) => Ok(()),
        SubmitOutcome::Skipped | SubmitOutcome::Failed(_) => {
            bail!("{}", state.error())
        }
        SubmitOutcome::Superseded | SubmitOutcome::Cancelled => {
            bail!("request did not complete")
        }
    }
}
