use std::process::ExitCode;
use std::sync::mpsc;

use submitter_core::{update, FormState, FormViewModel, Msg, SelectedFile, StatusKind};
use submitter_engine::SubmitSettings;

use crate::cli::Cli;
use crate::effects::EffectRunner;
use crate::ui::Renderer;

pub fn run(cli: Cli) -> ExitCode {
    submit_logging::initialize(cli.log.destination());

    let mut settings = SubmitSettings::default();
    if let Some(endpoint) = cli.endpoint {
        settings.endpoint = endpoint;
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone(), settings);
    let mut renderer = Renderer::new();

    // The CLI invocation is the form submission.
    let file = SelectedFile {
        path: cli.resume.display().to_string(),
        media_type: cli.media_type,
    };
    for msg in [
        Msg::EmailChanged(cli.email),
        Msg::FileChanged(Some(file)),
        Msg::SubmitClicked,
    ] {
        let _ = msg_tx.send(msg);
    }

    let mut state = FormState::new();
    while let Ok(msg) = msg_rx.recv() {
        let (next, effects) = update(state, msg);
        state = next;
        runner.run(effects);

        let view = state.view();
        if state.consume_dirty() {
            renderer.render(&view);
        }
        if let Some(code) = exit_code_for(&view) {
            return code;
        }
    }

    // Every sender dropped without an outcome; treat as failure.
    log::error!("message channel closed before the submission settled");
    ExitCode::FAILURE
}

/// The submission is over once the submit control is back and the bar is
/// gone; the status line then carries the outcome.
fn exit_code_for(view: &FormViewModel) -> Option<ExitCode> {
    if !view.submit_enabled || view.bar_visible {
        return None;
    }
    let status = view.status.as_ref()?;
    match status.kind {
        StatusKind::Success => Some(ExitCode::SUCCESS),
        StatusKind::Error => Some(ExitCode::FAILURE),
        StatusKind::Loading => None,
    }
}
