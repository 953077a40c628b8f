//! `hashgen form`: the interactive form loop.
//!
//! Each line is fed to the controller as an input change and then submitted.
//! While a request is in flight the input is disabled: typed lines are
//! dropped, and Ctrl+C or Ctrl+D tears the form down. `--quiet` hides the
//! banner and hints; results and errors are always shown.

use std::io::Write;

use console::style;
use rustyline_async::SharedWriter;

use hashgen_core::client::HashClient;
use hashgen_core::form::{render, FormController, SubmitOutcome, SUBMITTING_LABEL};
use hashgen_types::config::ClientConfig;

use super::build_client;
use super::input::{FormInput, InputEvent};
use super::render::{view_json, write_banner, write_hint, write_view};

pub async fn run(
    config: &ClientConfig,
    endpoint: Option<String>,
    json: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let client = build_client(config, endpoint)?;
    let controller = FormController::new(client);

    let prompt = format!("  {} ", style("Input >").green().bold());
    let (mut input, mut writer) = FormInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    if !json && !quiet {
        write_banner(&mut writer)?;
    }

    loop {
        match input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                write_hint(&mut writer, quiet, style("Press Ctrl+D to exit.").dim())?;
            }
            InputEvent::Line(line) => {
                if !controller.input_changed(line) {
                    write_hint(
                        &mut writer,
                        quiet,
                        style("Only letters and digits are accepted.").yellow(),
                    )?;
                    continue;
                }

                let outcome =
                    submit_with_teardown(&controller, &mut input, &mut writer, quiet).await?;
                let state = controller.state();
                let view = render(&state);
                if json {
                    writeln!(writer, "{}", view_json(&view))?;
                } else {
                    write_view(&mut writer, &view)?;
                }

                if outcome == SubmitOutcome::Cancelled {
                    write_hint(&mut writer, quiet, style("Request cancelled.").dim())?;
                    break;
                }
            }
        }
    }

    tracing::debug!("form closed");
    input.flush();
    Ok(())
}

/// Submit, keeping the terminal responsive so Ctrl+C/Ctrl+D can tear the
/// in-flight request down.
async fn submit_with_teardown<C: HashClient>(
    controller: &FormController<C>,
    input: &mut FormInput,
    writer: &mut SharedWriter,
    quiet: bool,
) -> anyhow::Result<SubmitOutcome> {
    if !render(&controller.state()).submit_disabled {
        write_hint(writer, quiet, style(SUBMITTING_LABEL).cyan())?;
    }

    let submit = controller.submit();
    tokio::pin!(submit);

    loop {
        tokio::select! {
            outcome = &mut submit => return Ok(outcome),
            event = input.read_line() => match event {
                InputEvent::Interrupted | InputEvent::Eof => controller.teardown(),
                InputEvent::Line(_) => {
                    write_hint(writer, quiet, style("Input is disabled while generating.").dim())?;
                }
            },
        }
    }
}
