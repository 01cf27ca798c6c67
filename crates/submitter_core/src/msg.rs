use crate::SelectedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the email input box (already trimmed by the shell).
    EmailChanged(String),
    /// User picked (or cleared) the resume file.
    FileChanged(Option<SelectedFile>),
    /// User activated the submit control.
    SubmitClicked,
    /// Periodic animation tick; `step` is the percent increment chosen
    /// by the shell (small and randomized so the bar feels organic).
    Tick { step: u8 },
    /// The network call settled: success, HTTP error, or transport failure.
    /// Exactly one of these is meaningful per submission; duplicates are
    /// ignored.
    SubmissionSettled { ok: bool, message: String },
    /// The short post-100% display hold elapsed.
    FinalizeHoldElapsed,
    /// Fallback for placeholder wiring.
    NoOp,
}
