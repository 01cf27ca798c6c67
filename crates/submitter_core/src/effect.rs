use crate::SelectedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start the periodic animation ticker.
    StartTicker,
    /// Stop the ticker; emitted once finalization begins so no timer leaks.
    StopTicker,
    /// Read, encode, and POST the resume. Emitted at most once per
    /// submission.
    BeginSubmission { email: String, file: SelectedFile },
    /// Arrange for `Msg::FinalizeHoldElapsed` after the fixed display hold.
    ScheduleFinalizeHold,
}
