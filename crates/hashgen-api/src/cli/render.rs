//! Terminal rendering of the form view.
//!
//! Styled output goes through any `Write` so the interactive form can print
//! through rustyline's `SharedWriter` without corrupting the prompt.

use std::io::{self, Write};
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use hashgen_core::form::{render, FormState, FormView};

/// Print the title block shown above the form.
pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Hash Generator").bold())?;
    writeln!(
        out,
        "  {}",
        style("Enter an alphanumeric string to generate a unique 10-character hash.").dim()
    )?;
    writeln!(
        out,
        "  {}",
        style("Press Enter to submit, Ctrl+D to exit.").dim()
    )?;
    writeln!(out)
}

/// Print a dimmed hint line unless `quiet` is set.
pub fn write_hint(
    out: &mut impl Write,
    quiet: bool,
    hint: impl std::fmt::Display,
) -> io::Result<()> {
    if quiet {
        return Ok(());
    }
    writeln!(out, "  {hint}")
}

/// Print the error and result slots of `view`.
pub fn write_view(out: &mut impl Write, view: &FormView<'_>) -> io::Result<()> {
    if let Some(error) = view.error {
        writeln!(out, "  {} {}", style("✗").red().bold(), style(error).red())?;
    }

    if let Some(result) = view.result {
        writeln!(out)?;
        writeln!(out, "  {}", style("Generated Hash").dim())?;
        writeln!(out, "  {}", style(&result.hash).green().bold())?;
        writeln!(out, "  Input: {}", style(&result.input).cyan())?;
        writeln!(out)?;
    }

    Ok(())
}

/// JSON form of the same slots, one object per outcome.
pub fn view_json(view: &FormView<'_>) -> serde_json::Value {
    match (view.result, view.error) {
        (Some(result), _) => serde_json::json!({
            "input": result.input,
            "hash": result.hash,
        }),
        (None, Some(error)) => serde_json::json!({ "error": error }),
        (None, None) => serde_json::json!({}),
    }
}

/// Show a spinner for as long as the watched state reports loading.
///
/// The task ends once the controller (the watch sender) is dropped.
pub fn spawn_loading_spinner(mut rx: watch::Receiver<FormState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut spinner: Option<ProgressBar> = None;
        loop {
            let (loading, label) = {
                let state = rx.borrow_and_update();
                (state.is_loading(), render(&state).button_label)
            };

            match (loading, spinner.take()) {
                (true, None) => spinner = Some(new_spinner(label)),
                (true, Some(active)) => spinner = Some(active),
                (false, Some(active)) => active.finish_and_clear(),
                (false, None) => {}
            }

            if rx.changed().await.is_err() {
                break;
            }
        }
        if let Some(active) = spinner {
            active.finish_and_clear();
        }
    })
}

fn new_spinner(label: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message(label.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
