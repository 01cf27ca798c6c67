use crate::{validate, Effect, FormState, Msg, Phase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::EmailChanged(text) => {
            state.set_email(text);
            Vec::new()
        }
        Msg::FileChanged(file) => {
            state.set_file(file);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Disabled submit control is the mutual exclusion: at most one
            // submission in flight.
            if !state.can_submit() {
                return (state, Vec::new());
            }
            match validate(state.email(), state.file()) {
                Ok(input) => {
                    state.begin_submission();
                    vec![
                        Effect::StartTicker,
                        Effect::BeginSubmission {
                            email: input.email,
                            file: input.file,
                        },
                    ]
                }
                Err(err) => {
                    state.show_validation_error(err.to_string());
                    Vec::new()
                }
            }
        }
        Msg::Tick { step } => {
            if state.phase() != Phase::Running {
                return (state, Vec::new());
            }
            if !state.at_hold() {
                state.advance_percent(step);
                Vec::new()
            } else if state.is_settled() {
                state.finalize();
                vec![Effect::StopTicker, Effect::ScheduleFinalizeHold]
            } else {
                // Hold below 100 until the call settles; the ticker keeps
                // running.
                Vec::new()
            }
        }
        Msg::SubmissionSettled { ok, message } => {
            // First settlement wins; the tick observes it.
            state.record_settlement(ok, message);
            Vec::new()
        }
        Msg::FinalizeHoldElapsed => {
            if state.phase() == Phase::Finalizing {
                state.complete();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
