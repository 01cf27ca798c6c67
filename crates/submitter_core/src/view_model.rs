#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Success,
    Error,
}

impl StatusKind {
    /// Stable tag for the host UI (the CSS-class equivalent).
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Loading => "loading",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewModel {
    pub status: Option<StatusLine>,
    pub bar_visible: bool,
    pub percent: u8,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub dirty: bool,
}
