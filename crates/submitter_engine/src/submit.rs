use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::{
    SubmissionOutcome, SubmitError, DEFAULT_SERVER_ERROR_MESSAGE, DEFAULT_SUCCESS_MESSAGE,
    TECHNICAL_ERROR_MESSAGE,
};

/// Production analysis endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://4i8fsa5psa.execute-api.us-east-1.amazonaws.com/Stage";

#[derive(Debug, Clone)]
pub struct SubmitSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Wire body of the one POST per submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub email: String,
    pub resume_content_base64: String,
    pub resume_file_type: String,
}

/// A reply the server actually sent, success status or not. Transport and
/// parse failures never get this far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerReply {
    pub ok: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ReplyBody {
    message: Option<String>,
    error: Option<String>,
}

#[async_trait::async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, request: &SubmissionRequest) -> Result<ServerReply, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSubmitter {
    settings: SubmitSettings,
}

impl ReqwestSubmitter {
    pub fn new(settings: SubmitSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SubmitError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Submitter for ReqwestSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> Result<ServerReply, SubmitError> {
        let client = self.build_client()?;

        let response = client
            .post(&self.settings.endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let ok = response.status().is_success();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let body: ReplyBody = serde_json::from_slice(&bytes)
            .map_err(|err| SubmitError::MalformedReply(err.to_string()))?;

        Ok(ServerReply {
            ok,
            message: body.message,
            error: body.error,
        })
    }
}

/// Folds the settled call into the single outcome shown to the user:
/// `message` (or the canned success string) on success status, `error` (or
/// the canned server-error string) otherwise, and the canned technical
/// message for anything that never produced a parseable reply.
pub fn settle(result: Result<ServerReply, SubmitError>) -> SubmissionOutcome {
    match result {
        Ok(reply) if reply.ok => SubmissionOutcome {
            ok: true,
            message: reply
                .message
                .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
        },
        Ok(reply) => SubmissionOutcome {
            ok: false,
            message: reply
                .error
                .unwrap_or_else(|| DEFAULT_SERVER_ERROR_MESSAGE.to_string()),
        },
        Err(err) => {
            log::warn!("submission failed: {err}");
            SubmissionOutcome {
                ok: false,
                message: TECHNICAL_ERROR_MESSAGE.to_string(),
            }
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::Timeout;
    }
    SubmitError::Network(err.to_string())
}
