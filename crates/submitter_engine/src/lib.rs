//! Submitter engine: file encoding, the remote call, and settlement.
mod encode;
mod engine;
mod submit;
mod types;

pub use encode::{media_type_for_path, read_and_encode, FALLBACK_MEDIA_TYPE};
pub use engine::EngineHandle;
pub use submit::{
    settle, ReqwestSubmitter, ServerReply, SubmissionRequest, SubmitSettings, Submitter,
    DEFAULT_ENDPOINT,
};
pub use types::{
    EncodeError, EncodedResume, EngineEvent, SubmissionOutcome, SubmitError,
    DEFAULT_SERVER_ERROR_MESSAGE, DEFAULT_SUCCESS_MESSAGE, FILE_READ_ERROR_MESSAGE,
    TECHNICAL_ERROR_MESSAGE,
};
