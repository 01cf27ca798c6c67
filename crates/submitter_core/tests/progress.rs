use std::sync::Once;

use submitter_core::{
    update, Effect, FormState, Msg, SelectedFile, StatusKind, HOLD_PERCENT,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(submit_logging::initialize_for_tests);
}

fn running_state() -> FormState {
    let state = FormState::new();
    let (state, _) = update(state, Msg::EmailChanged("a@b.co".to_string()));
    let (state, _) = update(
        state,
        Msg::FileChanged(Some(SelectedFile {
            path: "resume.pdf".to_string(),
            media_type: None,
        })),
    );
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 2);
    state
}

#[test]
fn percent_is_monotonic_while_running() {
    init_logging();
    let mut state = running_state();
    let mut last = 0;
    for step in [1, 4, 2, 3, 1, 4, 4, 2] {
        let (next, effects) = update(state, Msg::Tick { step });
        assert!(effects.is_empty());
        let percent = next.view().percent;
        assert!(percent >= last, "{percent} < {last}");
        last = percent;
        state = next;
    }
    assert_eq!(last, 21);
}

#[test]
fn bar_holds_below_100_until_settlement() {
    init_logging();
    let mut state = running_state();
    for _ in 0..60 {
        let (next, effects) = update(state, Msg::Tick { step: 4 });
        assert!(effects.is_empty(), "no finalize without settlement");
        assert!(next.view().percent < 100);
        state = next;
    }
    // Advancing stopped at the hold point; the ticker itself keeps running.
    assert_eq!(state.view().percent, HOLD_PERCENT);
    assert!(state.view().bar_visible);
}

#[test]
fn settlement_at_hold_snaps_to_100_and_schedules_hold() {
    init_logging();
    let mut state = running_state();
    for _ in 0..30 {
        let (next, _) = update(state, Msg::Tick { step: 4 });
        state = next;
    }
    assert_eq!(state.view().percent, HOLD_PERCENT);

    let (state, effects) = update(
        state,
        Msg::SubmissionSettled {
            ok: true,
            message: "Check inbox".to_string(),
        },
    );
    assert!(effects.is_empty(), "settlement alone changes no UI");

    let (state, effects) = update(state, Msg::Tick { step: 2 });
    assert_eq!(
        effects,
        vec![Effect::StopTicker, Effect::ScheduleFinalizeHold]
    );
    assert_eq!(state.view().percent, 100);
    assert!(state.view().bar_visible, "bar stays up through the hold");

    // Ticks after finalization are no-ops.
    let before = state.clone();
    let (state, effects) = update(state, Msg::Tick { step: 4 });
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn early_settlement_still_waits_for_the_animation() {
    init_logging();
    let state = running_state();
    // Fast response: the call settles while the bar is barely moving.
    let (state, _) = update(
        state,
        Msg::SubmissionSettled {
            ok: true,
            message: "quick".to_string(),
        },
    );
    let (state, effects) = update(state, Msg::Tick { step: 3 });
    assert!(effects.is_empty());
    assert_eq!(state.view().percent, 3);

    // Only once the bar catches up does finalization trigger.
    let mut state = state;
    loop {
        let (next, effects) = update(state, Msg::Tick { step: 4 });
        state = next;
        if !effects.is_empty() {
            assert_eq!(
                effects,
                vec![Effect::StopTicker, Effect::ScheduleFinalizeHold]
            );
            break;
        }
    }
    assert_eq!(state.view().percent, 100);
}

#[test]
fn duplicate_settlement_is_ignored() {
    init_logging();
    let state = running_state();
    let (state, _) = update(
        state,
        Msg::SubmissionSettled {
            ok: true,
            message: "first".to_string(),
        },
    );
    let (mut state, _) = update(
        state,
        Msg::SubmissionSettled {
            ok: false,
            message: "second".to_string(),
        },
    );

    for _ in 0..40 {
        let (next, _) = update(state, Msg::Tick { step: 4 });
        state = next;
    }
    let (state, _) = update(state, Msg::FinalizeHoldElapsed);
    let status = state.view().status.expect("status line");
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(status.text, "first");
}

#[test]
fn failed_settlement_surfaces_error_and_restores_controls() {
    init_logging();
    let (mut state, _) = update(
        running_state(),
        Msg::SubmissionSettled {
            ok: false,
            message: "Server error.".to_string(),
        },
    );
    for _ in 0..40 {
        let (next, _) = update(state, Msg::Tick { step: 4 });
        state = next;
    }
    let (state, _) = update(state, Msg::FinalizeHoldElapsed);
    let view = state.view();

    let status = view.status.expect("status line");
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.text, "Server error.");
    assert!(!view.bar_visible);
    assert!(view.submit_enabled);
}

#[test]
fn hold_elapsed_is_idempotent() {
    init_logging();
    let (mut state, _) = update(
        running_state(),
        Msg::SubmissionSettled {
            ok: true,
            message: "once".to_string(),
        },
    );
    for _ in 0..40 {
        let (next, _) = update(state, Msg::Tick { step: 4 });
        state = next;
    }
    let (state, _) = update(state, Msg::FinalizeHoldElapsed);
    let before = state.clone();
    let (state, effects) = update(state, Msg::FinalizeHoldElapsed);
    assert!(effects.is_empty());
    assert_eq!(state, before);
}
