//! UI components and layouts.
//!
//! This module provides Leptos SSR components for rendering the workspace
//! page, following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Page model and composition
//! - [`navbar`]: Top navigation bar
//! - [`components`]: Reusable ShadCN-style UI components
//! - [`chat`]: Session sidebar and conversation column
//! - [`knowledge`]: Knowledge-base sidebar and folder tree

pub mod app;
pub mod chat;
pub mod components;
pub mod knowledge;
pub mod navbar;

use leptos::prelude::*;
use leptos::reactive::owner::Owner;

use crate::knowledge::KnowledgeTree;
use crate::workspace::WorkspaceStore;
use app::{App, PageModel};
use knowledge::KnowledgeTreeView;

/// Render the full page for the current workspace state.
#[must_use]
pub fn render_page(store: &WorkspaceStore) -> String {
    let page = PageModel::from_store(store);
    let html = Owner::new().with(|| view! { <App page=page /> }.to_html());
    format!("<!DOCTYPE html>{html}")
}

/// Render the `#kb-tree` fragment swapped in after a folder toggle.
#[must_use]
pub fn render_tree(tree: &KnowledgeTree) -> String {
    let rows = tree.rows();
    Owner::new().with(|| view! { <KnowledgeTreeView rows=rows /> }.to_html())
}
