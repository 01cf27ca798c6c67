//! Submitter core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    FormState, Phase, SelectedFile, FINALIZE_HOLD_MS, HOLD_PERCENT, LOADING_MESSAGE,
    MAX_TICK_STEP, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE, TICK_INTERVAL_MS,
};
pub use update::update;
pub use validate::{validate, SubmissionInput, ValidationError};
pub use view_model::{FormViewModel, StatusKind, StatusLine};
