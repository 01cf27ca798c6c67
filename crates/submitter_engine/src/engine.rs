use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::encode::read_and_encode;
use crate::submit::{settle, ReqwestSubmitter, SubmissionRequest, SubmitSettings, Submitter};
use crate::types::{EngineEvent, SubmissionOutcome, FILE_READ_ERROR_MESSAGE};

enum EngineCommand {
    Submit {
        email: String,
        path: PathBuf,
        media_type: Option<String>,
    },
}

/// Runs the read/encode/POST chain on a dedicated runtime thread and hands
/// settlements back over a channel the shell polls.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(settings: SubmitSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let submitter = Arc::new(ReqwestSubmitter::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let submitter = submitter.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(submitter.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn submit(
        &self,
        email: impl Into<String>,
        path: impl Into<PathBuf>,
        media_type: Option<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            email: email.into(),
            path: path.into(),
            media_type,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    submitter: &dyn Submitter,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            email,
            path,
            media_type,
        } => {
            let encoded = match read_and_encode(&path, media_type.as_deref()).await {
                Ok(encoded) => encoded,
                Err(err) => {
                    log::warn!("{err}");
                    let _ = event_tx.send(EngineEvent::Settled(SubmissionOutcome {
                        ok: false,
                        message: FILE_READ_ERROR_MESSAGE.to_string(),
                    }));
                    return;
                }
            };
            let request = SubmissionRequest {
                email,
                resume_content_base64: encoded.content_base64,
                resume_file_type: encoded.media_type,
            };
            let outcome = settle(submitter.submit(&request).await);
            let _ = event_tx.send(EngineEvent::Settled(outcome));
        }
    }
}
