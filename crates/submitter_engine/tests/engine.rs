use std::time::Duration;

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use submitter_engine::{
    EngineEvent, EngineHandle, SubmitSettings, FILE_READ_ERROR_MESSAGE,
};

async fn wait_for_settlement(engine: &EngineHandle) -> submitter_engine::SubmissionOutcome {
    for _ in 0..200 {
        if let Some(EngineEvent::Settled(outcome)) = engine.try_recv() {
            return outcome;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    panic!("engine never settled");
}

#[tokio::test]
async fn engine_settles_a_successful_submission_end_to_end() {
    submit_logging::initialize_for_tests();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Check inbox"})))
        .mount(&server)
        .await;

    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("resume.pdf");
    std::fs::write(&path, b"%PDF-1.4 fixture").unwrap();

    let engine = EngineHandle::new(SubmitSettings {
        endpoint: server.uri(),
        ..SubmitSettings::default()
    });
    engine.submit("a@b.co", &path, None);

    let outcome = wait_for_settlement(&engine).await;
    assert!(outcome.ok);
    assert_eq!(outcome.message, "Check inbox");
}

#[tokio::test]
async fn unreadable_file_settles_without_touching_the_network() {
    submit_logging::initialize_for_tests();
    // Endpoint that would fail loudly if the engine got that far.
    let engine = EngineHandle::new(SubmitSettings {
        endpoint: "http://127.0.0.1:1".to_string(),
        ..SubmitSettings::default()
    });
    engine.submit("a@b.co", "/definitely/not/a/resume.pdf", None);

    let outcome = wait_for_settlement(&engine).await;
    assert!(!outcome.ok);
    assert_eq!(outcome.message, FILE_READ_ERROR_MESSAGE);
}
