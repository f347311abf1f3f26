use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Form, Path, Request, State},
    http::{HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::{debug, info};

use crate::AppState;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::knowledge::TreeTotals;
use crate::model::{ChatMessage, ChatSession, Folder};
use crate::ui::{render_page, render_tree};
use crate::workspace::{Workspace, WorkspaceStore};

/// Load the workspace named by the config, or the built-in sample.
pub fn load_workspace(config: &AppConfig) -> anyhow::Result<WorkspaceStore> {
    let workspace = match &config.workspace.seed_file {
        Some(path) => {
            info!(name: "workspace.seed", path = %path, "Loading workspace seed");
            Workspace::load(path)?
        }
        None => {
            info!(name: "workspace.seed", "Using built-in sample workspace");
            crate::workspace::sample_workspace()
        }
    };
    Ok(WorkspaceStore::new(workspace)?)
}

/// Build the router with all routes and middleware.
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let config = Arc::clone(&state.config);

    let origin = config
        .cors
        .frontend_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("invalid CORS origin: {}", config.cors.frontend_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    // A disabled timeout keeps the layer but makes it unreachable, so the
    // router type does not depend on the setting.
    let timeout_duration = if config.resilience.timeout_disabled {
        Duration::from_secs(365 * 24 * 60 * 60) // 1 year
    } else {
        Duration::from_secs(config.resilience.timeout_secs)
    };

    let app = Router::new()
        // HTML pages and fragments
        .route("/", get(index_handler))
        .route("/api/knowledge-base/tree", get(tree_fragment_handler))
        .route(
            "/api/knowledge-base/folders/{id}/toggle",
            post(toggle_folder_handler),
        )
        // JSON API
        .route("/health", get(health_handler))
        .route("/api/workspace", get(api_workspace))
        .route("/api/sessions", get(api_sessions))
        .route("/api/sessions/{id}/messages", get(api_session_messages))
        .route("/api/knowledge-base", get(api_knowledge_base))
        .route("/api/chat", post(api_chat))
        // Static assets
        .nest_service("/static", ServeDir::new(&config.workspace.static_dir))
        .layer(DefaultBodyLimit::max(config.resilience.body_limit_bytes));

    let app = with_request_timeout(app, timeout_duration)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Answer `408` for requests that outlive `duration`.
fn with_request_timeout<S>(router: Router<S>, duration: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(axum::middleware::from_fn(
        move |req: Request, next: Next| async move {
            match tokio::time::timeout(duration, next.run(req)).await {
                Ok(res) => res,
                Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
            }
        },
    ))
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let workspace = load_workspace(&config)?;
    let state = AppState::new(workspace, Arc::clone(&config));
    let app = build_router(state)?;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        name: "server.started",
        address = %addr,
        app = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        "Server started"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!(name: "server.stopped", app = %config.app.name, "Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Full workspace page.
async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.workspace))
}

/// GET /api/knowledge-base/tree - Tree fragment.
async fn tree_fragment_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_tree(&state.workspace.tree()))
}

/// POST /api/knowledge-base/folders/:id/toggle - Flip a folder and re-render the tree.
async fn toggle_folder_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    state.workspace.toggle_folder(&id)?;
    Ok(Html(render_tree(&state.workspace.tree())))
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Liveness response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: String,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        name: state.config.app.name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at,
    })
}

/// GET /api/workspace - Whole dataset, including current expansion flags.
async fn api_workspace(State(state): State<AppState>) -> Json<Workspace> {
    Json(state.workspace.snapshot())
}

/// GET /api/sessions
async fn api_sessions(State(state): State<AppState>) -> Json<Vec<ChatSession>> {
    Json(state.workspace.sessions().to_vec())
}

/// GET /api/sessions/:id/messages - Transcript; empty for sessions without one.
async fn api_session_messages(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    if state.workspace.session(&id).is_none() {
        return Err(ApiError::NotFound(format!("unknown session: {id}")));
    }
    let messages = state
        .workspace
        .conversation(&id)
        .map(|c| c.messages.clone())
        .unwrap_or_default();
    Ok(Json(messages))
}

/// Knowledge-base listing.
#[derive(Debug, Serialize)]
pub struct KnowledgeBaseResponse {
    pub folders: Vec<Folder>,
    pub totals: TreeTotals,
}

/// GET /api/knowledge-base
async fn api_knowledge_base(State(state): State<AppState>) -> Json<KnowledgeBaseResponse> {
    let tree = state.workspace.tree();
    Json(KnowledgeBaseResponse {
        folders: tree.to_folders(),
        totals: tree.totals(),
    })
}

/// Fields posted by the chat input form.
#[derive(Debug, Deserialize)]
pub struct ChatSubmission {
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub message: String,
}

/// POST /api/chat - Accepts a submission and does nothing with it.
async fn api_chat(Form(submission): Form<ChatSubmission>) -> StatusCode {
    debug!(
        name: "chat.submit_ignored",
        session = %submission.session_id,
        length = submission.message.len(),
        "Chat submission received; no handler attached"
    );
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_request_timeout_answers_408() {
        let router = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "done"
            }),
        );
        let server =
            TestServer::new(with_request_timeout(router, Duration::from_millis(20))).unwrap();

        let response = server.get("/slow").expect_failure().await;
        response.assert_status(StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn test_fast_request_passes_timeout() {
        let router = Router::new().route("/fast", get(|| async { "done" }));
        let server = TestServer::new(with_request_timeout(router, Duration::from_secs(5))).unwrap();

        let response = server.get("/fast").await;
        response.assert_status_ok();
        response.assert_text("done");
    }
}
