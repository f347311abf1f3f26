use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::Value;

use docmind::AppState;
use docmind::config::AppConfig;
use docmind::model::Folder;
use docmind::server::build_router;
use docmind::workspace::{Workspace, WorkspaceStore};

fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig::load_from_args(["docmind"]).expect("Failed to load config"))
}

fn server_for(store: WorkspaceStore) -> TestServer {
    let state = AppState::new(store, test_config());
    let app = build_router(state).expect("Failed to build router");
    TestServer::new(app).expect("Failed to start test server")
}

fn sample_server() -> (TestServer, WorkspaceStore) {
    let store = WorkspaceStore::sample().expect("sample workspace is valid");
    (server_for(store.clone()), store)
}

#[tokio::test]
async fn test_health() {
    let (server, _) = sample_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["name"], "DocMind");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["startedAt"].is_string());
}

#[tokio::test]
async fn test_index_renders_full_page() {
    let (server, _) = sample_server();

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("What is 2PC?"));
    assert!(html.contains("8 files in 3 folders"));
    assert_eq!(html.matches(r#"aria-current="true""#).count(), 1);
    assert_eq!(html.matches(r#"data-role="source""#).count(), 2);
}

#[tokio::test]
async fn test_sessions_and_messages() {
    let (server, _) = sample_server();

    let sessions: Value = server.get("/api/sessions").await.json();
    let sessions = sessions.as_array().expect("sessions array");
    assert_eq!(sessions.len(), 5);
    assert_eq!(sessions[0]["isActive"], true);

    let messages: Value = server.get("/api/sessions/1/messages").await.json();
    let messages = messages.as_array().expect("messages array");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "user");
    assert_eq!(messages[1]["role"], "assistant");
    assert_eq!(messages[1]["sources"][0]["fileType"], "PDF");
    assert_eq!(messages[1]["retrievalMeta"]["documentCount"], 2);

    // Known session without a transcript
    let empty: Value = server.get("/api/sessions/2/messages").await.json();
    assert_eq!(empty, Value::Array(vec![]));

    let missing = server
        .get("/api/sessions/nope/messages")
        .expect_failure()
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);
    let body: Value = missing.json();
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_knowledge_base_listing() {
    let (server, _) = sample_server();

    let body: Value = server.get("/api/knowledge-base").await.json();
    assert_eq!(body["totals"]["folders"], 3);
    assert_eq!(body["totals"]["files"], 8);
    assert_eq!(body["totals"]["chunks"], 327);
    assert_eq!(body["folders"][0]["fileCount"], 4);
    assert_eq!(body["folders"][1]["files"][2]["status"], "PROCESSING");
}

#[tokio::test]
async fn test_toggle_folder_round_trip() {
    let (server, store) = sample_server();

    let fragment = server.get("/api/knowledge-base/tree").await.text();
    assert_eq!(fragment.matches(r#"data-role="file-row""#).count(), 7);

    let collapsed = server
        .post("/api/knowledge-base/folders/f1/toggle")
        .await;
    collapsed.assert_status_ok();
    let html = collapsed.text();
    assert!(html.contains(r#"id="kb-tree""#));
    assert_eq!(html.matches(r#"data-role="file-row""#).count(), 3);
    assert!(!store.tree().folder("f1").expect("f1 exists").is_expanded);

    // The JSON view reflects the shared state
    let body: Value = server.get("/api/knowledge-base").await.json();
    assert_eq!(body["folders"][0]["isExpanded"], false);

    let restored = server
        .post("/api/knowledge-base/folders/f1/toggle")
        .await
        .text();
    assert_eq!(restored, fragment);
}

#[tokio::test]
async fn test_toggle_unknown_folder_is_not_found() {
    let (server, store) = sample_server();
    let before = store.snapshot();

    let response = server
        .post("/api/knowledge-base/folders/missing/toggle")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn test_chat_submit_is_inert() {
    let (server, store) = sample_server();
    let before = store.snapshot();

    let response = server
        .post("/api/chat")
        .form(&[("session_id", "1"), ("message", "Explain Paxos")])
        .await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(store.snapshot(), before);
}

#[tokio::test]
async fn test_seed_file_workspace() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let seed = dir.path().join("seed.yaml");
    std::fs::write(
        &seed,
        r#"
profile:
  productName: "Lumen"
sessions:
  - id: "x"
    title: "Reading list"
    timestamp: "Today"
    isActive: true
folders:
  - id: "p"
    name: "Papers"
    fileCount: 1
    isExpanded: false
    files:
      - id: "d"
        filename: "raft.pdf"
        fileType: PDF
        size: "1.0 MB"
        chunks: 12
        status: READY
"#,
    )
    .expect("Failed to write seed");

    let workspace = Workspace::load(&seed).expect("Failed to load seed");
    let server = server_for(WorkspaceStore::new(workspace).expect("valid seed"));

    let html = server.get("/").await.text();
    assert!(html.contains("Lumen"));
    assert!(html.contains("Reading list"));
    assert!(html.contains("1 file in 1 folder"));
    assert_eq!(html.matches(r#"data-role="file-row""#).count(), 0);

    let empty: Value = server.get("/api/sessions/x/messages").await.json();
    assert_eq!(empty, Value::Array(vec![]));
}

#[tokio::test]
async fn test_cors_allows_frontend_origin() {
    let (server, _) = sample_server();

    let response = server
        .get("/api/sessions")
        .add_header("origin", "http://localhost:3000")
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header("access-control-allow-origin"),
        "http://localhost:3000"
    );
}

/// `hx-post` target rendered for the folder header with `folder_id`.
fn rendered_toggle_url(html: &str, folder_id: &str) -> String {
    let marker = format!(r#"data-folder-id="{folder_id}""#);
    let header = &html[html.find(&marker).expect("folder row rendered")..];
    let start = header.find(r#"hx-post=""#).expect("toggle button rendered") + r#"hx-post=""#.len();
    let end = start + header[start..].find('"').expect("closing quote");
    header[start..end].to_string()
}

#[tokio::test]
async fn test_toggle_folder_with_reserved_characters_in_id() {
    let folders = ["papers/2024", "q?x", "50%", "lecture notes"]
        .iter()
        .map(|id| Folder {
            id: (*id).to_string(),
            name: (*id).to_string(),
            file_count: 0,
            is_expanded: false,
            files: vec![],
            folders: vec![],
        })
        .collect();
    let store = WorkspaceStore::new(Workspace {
        folders,
        ..Workspace::default()
    })
    .expect("valid workspace");
    let server = server_for(store.clone());

    let fragment = server.get("/api/knowledge-base/tree").await.text();
    for id in ["papers/2024", "q?x", "50%", "lecture notes"] {
        let url = rendered_toggle_url(&fragment, id);
        let response = server.post(&url).await;
        response.assert_status_ok();
        assert!(
            store.tree().folder(id).expect("folder exists").is_expanded,
            "folder {id} toggled via {url}"
        );
    }
}

#[tokio::test]
async fn test_chat_body_over_limit_is_rejected() {
    let mut config = AppConfig::load_from_args(["docmind"]).expect("Failed to load config");
    config.resilience.body_limit_bytes = 64;
    let state = AppState::new(
        WorkspaceStore::sample().expect("sample workspace is valid"),
        Arc::new(config),
    );
    let server = TestServer::new(build_router(state).expect("Failed to build router"))
        .expect("Failed to start test server");

    let small = server
        .post("/api/chat")
        .form(&[("session_id", "1"), ("message", "hi")])
        .await;
    small.assert_status(StatusCode::NO_CONTENT);

    let long_message = "x".repeat(1024);
    let large = server
        .post("/api/chat")
        .form(&[("session_id", "1"), ("message", long_message.as_str())])
        .expect_failure()
        .await;
    large.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}
