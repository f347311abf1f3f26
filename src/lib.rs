//! DocMind research workspace
//!
//! Server-rendered presentation layer for a document research assistant:
//! a three-column page with chat sessions, the active conversation and a
//! knowledge-base tree, plus the JSON and HTML-fragment routes behind it.
//!
//! # Architecture
//!
//! - **Server**: Axum router serving the page, fragments and JSON views
//! - **UI**: Leptos SSR components, HTMX for folder toggles
//! - **Workspace**: Loaded dataset with server-side expansion state
//!
//! # Modules
//!
//! - [`model`]: Sessions, messages, documents and folders
//! - [`knowledge`]: Folder tree flattening and totals
//! - [`workspace`]: Dataset loading and the shared store
//! - [`ui`]: Page and fragment rendering

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_pass_by_value)]

pub mod config;
pub mod error;
pub mod knowledge;
pub mod model;
pub mod server;
pub mod telemetry;
pub mod ui;
pub mod workspace;

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::workspace::WorkspaceStore;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Loaded dataset and folder expansion state.
    pub workspace: WorkspaceStore,
    /// Global Configuration
    pub config: Arc<AppConfig>,
    /// Reported by `/health`.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    #[must_use]
    pub fn new(workspace: WorkspaceStore, config: Arc<AppConfig>) -> Self {
        Self {
            workspace,
            config,
            started_at: Utc::now(),
        }
    }
}
