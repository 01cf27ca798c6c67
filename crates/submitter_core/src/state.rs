use crate::view_model::{FormViewModel, StatusKind, StatusLine};

/// Percent at which the animation stops advancing until the call settles.
pub const HOLD_PERCENT: u8 = 95;
/// Fixed animation tick interval driven by the shell.
pub const TICK_INTERVAL_MS: u64 = 120;
/// Display hold after the bar reaches 100%, before the outcome appears.
pub const FINALIZE_HOLD_MS: u64 = 400;
/// Upper bound for the randomized per-tick increment.
pub const MAX_TICK_STEP: u8 = 4;

pub const SUBMIT_LABEL_IDLE: &str = "Analyze Resume";
pub const SUBMIT_LABEL_BUSY: &str = "Analyzing\u{2026}";
pub const LOADING_MESSAGE: &str = "Analyzing your resume. Please wait\u{2026}";

/// File selected in the host UI: a path plus the media type the picker
/// declared, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: String,
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    Finalizing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Settlement {
    ok: bool,
    message: String,
}

/// Single owner of the whole submission lifecycle: form inputs, progress
/// animation, settlement, and the view the shell renders. All transitions
/// go through the methods below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    email_input: String,
    file: Option<SelectedFile>,
    phase: Phase,
    percent: u8,
    settlement: Option<Settlement>,
    submit_enabled: bool,
    bar_visible: bool,
    status: Option<StatusLine>,
    dirty: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            email_input: String::new(),
            file: None,
            phase: Phase::Idle,
            percent: 0,
            settlement: None,
            submit_enabled: true,
            bar_visible: false,
            status: None,
            dirty: false,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> FormViewModel {
        FormViewModel {
            status: self.status.clone(),
            bar_visible: self.bar_visible,
            percent: self.percent,
            submit_enabled: self.submit_enabled,
            submit_label: if self.submit_enabled {
                SUBMIT_LABEL_IDLE
            } else {
                SUBMIT_LABEL_BUSY
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_email(&mut self, text: String) {
        self.email_input = text.trim().to_string();
    }

    pub(crate) fn set_file(&mut self, file: Option<SelectedFile>) {
        self.file = file;
    }

    pub(crate) fn email(&self) -> &str {
        &self.email_input
    }

    pub(crate) fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn can_submit(&self) -> bool {
        self.submit_enabled
    }

    /// Resets all per-submission progress state and enters `Running`.
    /// A previous `Finalizing` phase ends here, implicitly.
    pub(crate) fn begin_submission(&mut self) {
        self.phase = Phase::Running;
        self.percent = 0;
        self.settlement = None;
        self.submit_enabled = false;
        self.bar_visible = true;
        self.status = Some(StatusLine {
            kind: StatusKind::Loading,
            text: LOADING_MESSAGE.to_string(),
        });
        self.dirty = true;
    }

    /// Advances the bar, never past the hold point. Percent is monotonic
    /// until the next `begin_submission`.
    pub(crate) fn advance_percent(&mut self, step: u8) {
        let next = self.percent.saturating_add(step).min(HOLD_PERCENT);
        if next != self.percent {
            self.percent = next;
            self.dirty = true;
        }
    }

    pub(crate) fn at_hold(&self) -> bool {
        self.percent >= HOLD_PERCENT
    }

    /// Records the one settlement per submission; later calls are ignored.
    pub(crate) fn record_settlement(&mut self, ok: bool, message: String) -> bool {
        if self.settlement.is_some() {
            return false;
        }
        self.settlement = Some(Settlement { ok, message });
        true
    }

    pub(crate) fn is_settled(&self) -> bool {
        self.settlement.is_some()
    }

    /// Snaps the bar to 100% and enters `Finalizing`.
    pub(crate) fn finalize(&mut self) {
        self.phase = Phase::Finalizing;
        self.percent = 100;
        self.dirty = true;
    }

    /// Consumes the settlement: shows the outcome line, hides the bar, and
    /// restores the submit control.
    pub(crate) fn complete(&mut self) {
        let Some(settlement) = self.settlement.take() else {
            return;
        };
        self.status = Some(StatusLine {
            kind: if settlement.ok {
                StatusKind::Success
            } else {
                StatusKind::Error
            },
            text: settlement.message,
        });
        self.bar_visible = false;
        self.submit_enabled = true;
        self.dirty = true;
    }

    pub(crate) fn show_validation_error(&mut self, text: String) {
        self.status = Some(StatusLine {
            kind: StatusKind::Error,
            text,
        });
        self.dirty = true;
    }
}
