mod classification_job;

use relevance_classifier::backends::ApiConfig;
use relevance_classifier::logging::LoggingConfig;
use relevance_classifier::{ClassificationJob, JobConfig, PromptTemplate};
use std::io::Write;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub fn write_input_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

pub fn output_file() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().unwrap()
}

/// A job config pointed at a wiremock server, with logging disabled and a
/// fixed credential so no environment is consulted.
pub fn mock_job_config(
    server: &MockServer,
    input: &std::path::Path,
    output: &std::path::Path,
) -> JobConfig {
    JobConfig::new(input, output)
        .with_api_config(
            ApiConfig::new()
                .with_base_url(server.uri())
                .with_api_key("test-key"),
        )
        .with_logging_config(LoggingConfig::new().logging_enabled(false))
}

pub fn chat_response(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "id": "cmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    }))
}

pub fn api_error_response() -> ResponseTemplate {
    ResponseTemplate::new(500).set_body_json(serde_json::json!({
        "error": {
            "message": "upstream failure",
            "type": "server_error",
            "param": null,
            "code": null
        }
    }))
}

/// Responds based on the article text inside the rendered prompt, so each
/// fixture row gets a deterministic completion.
pub struct ScriptedResponder;

impl wiremock::Respond for ScriptedResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: serde_json::Value = serde_json::from_slice(&request.body).expect("json body");
        let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();

        if prompt.contains("bridge collapse") {
            api_error_response()
        } else if prompt.contains("budget") {
            chat_response("Yes, this is squarely a policy topic.")
        } else if prompt.contains("cricket") {
            chat_response("the answer is nO")
        } else if prompt.contains("galaxy") {
            chat_response("That is outside my scope.")
        } else {
            chat_response("YES")
        }
    }
}

pub async fn mount_scripted(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ScriptedResponder)
        .mount(server)
        .await;
}
