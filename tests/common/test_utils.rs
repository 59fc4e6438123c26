use qa_relay::{
    config::RelayConfig,
    relay::{self, Relay},
    surface::SurfaceClient,
};
use serde_json::json;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

pub const ASK_PATH: &str = "/ask";

/// Endpoint on a port nothing listens on
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1/ask";

/// Relay configuration pointing at a wiremock server
pub fn relay_config_for(server: &MockServer) -> RelayConfig {
    RelayConfig::new(format!("{}{}", server.uri(), ASK_PATH))
}

/// Mount a backend reply for one specific question
pub async fn mount_answer(server: &MockServer, question: &str, answer: &str) {
    Mock::given(method("POST"))
        .and(path(ASK_PATH))
        .and(body_json(json!({ "question": question })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": answer })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount an arbitrary response template for one specific question
pub async fn mount_response(server: &MockServer, question: &str, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(ASK_PATH))
        .and(body_json(json!({ "question": question })))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

/// Start a relay listener and connect a surface client to it
pub fn connect_surface(relay_handle: Relay) -> (SurfaceClient, JoinHandle<()>) {
    let (sender, listener) = relay::channel(relay_handle, 16);
    (SurfaceClient::new(sender), listener)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
relay:
  endpoint_url: "http://127.0.0.1:8001/ask"
  timeout_millis: 30000

server:
  host: "127.0.0.1"
  port: 8787
  logs:
    level: "debug"
"#;

/// Configuration without a timeout, relying on defaults elsewhere
pub const MINIMAL_CONFIG_YAML: &str = r#"
relay:
  endpoint_url: "https://qa.example.com/ask"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
relay:
  endpoint_url: "not a url"
server:
  port: "not-a-number"
"#;
