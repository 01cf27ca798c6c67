use thiserror::Error;

/// Shown when the server accepted the upload but sent no `message` field.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success! Check your inbox.";
/// Shown when the server rejected the upload but sent no `error` field.
pub const DEFAULT_SERVER_ERROR_MESSAGE: &str = "Server error.";
/// Shown for transport failures and unparseable replies.
pub const TECHNICAL_ERROR_MESSAGE: &str = "A technical error occurred. Please try again.";
/// Shown when the selected file could not be read.
pub const FILE_READ_ERROR_MESSAGE: &str = "Failed to read the file.";

/// Base64 payload plus the media type to declare in the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedResume {
    pub content_base64: String,
    pub media_type: String,
}

/// The single per-submission result, whichever path produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOutcome {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Settled(SubmissionOutcome),
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}
