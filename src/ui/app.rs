//! Page composition: navbar over three columns.

use leptos::prelude::*;

use crate::knowledge::{TreeRow, TreeTotals};
use crate::model::{ChatMessage, ChatSession, active_session_index};
use crate::ui::chat::{ConversationView, SessionList};
use crate::ui::knowledge::KnowledgeBasePanel;
use crate::ui::navbar::Navbar;
use crate::workspace::{Profile, WorkspaceStore};

/// Everything the page needs, detached from the store's lock.
#[derive(Debug, Clone)]
pub struct PageModel {
    pub profile: Profile,
    pub sessions: Vec<ChatSession>,
    pub active: Option<usize>,
    pub title: String,
    pub subtitle: String,
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
    pub rows: Vec<TreeRow>,
    pub totals: TreeTotals,
}

impl PageModel {
    pub fn from_store(store: &WorkspaceStore) -> Self {
        let sessions = store.sessions().to_vec();
        let active = active_session_index(&sessions);
        let active_session = active.map(|idx| &sessions[idx]);
        let conversation = active_session.and_then(|s| store.conversation(&s.id));

        let title = active_session.map_or_else(|| "New conversation".to_string(), |s| s.title.clone());
        let session_id = active_session.map(|s| s.id.clone()).unwrap_or_default();
        let subtitle = conversation
            .and_then(|c| c.subtitle.clone())
            .unwrap_or_else(|| "Ask anything about your documents".to_string());
        let messages = conversation.map(|c| c.messages.clone()).unwrap_or_default();

        let tree = store.tree();

        Self {
            profile: store.profile().clone(),
            sessions,
            active,
            title,
            subtitle,
            session_id,
            messages,
            rows: tree.rows(),
            totals: tree.totals(),
        }
    }

    /// Line under the chat input, e.g. `gemini-2.5-flash · 8 documents · 327 chunks`.
    #[must_use]
    pub fn footer(&self) -> String {
        format!(
            "{} · {} documents · {} chunks",
            self.profile.model_label, self.totals.files, self.totals.chunks
        )
    }
}

/// Main application component.
///
/// Renders the complete document (without the doctype).
#[component]
pub fn App(page: PageModel) -> impl IntoView {
    let footer = page.footer();
    let PageModel {
        profile,
        sessions,
        active,
        title,
        subtitle,
        session_id,
        messages,
        rows,
        totals,
    } = page;
    let product_initial = profile.product_initial();
    let document_title = format!("{} - Research Assistant", profile.product_name);

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Chat with your course notes and papers"/>

                <title>{document_title}</title>

                // Local assets only (no CDN)
                <script src="/static/vendor/htmx-2.0.8.min.js"></script>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>

            <body class="min-h-screen bg-page-bg text-text-primary antialiased">
                <Navbar
                    product_name=profile.product_name
                    product_initial=product_initial.clone()
                    model_label=profile.model_label
                    user_initials=profile.user_initials.clone()
                    document_count=totals.files
                />

                <main id="app" class="flex gap-4 px-7 pb-5 h-screen box-border pt-[72px]">
                    <SessionList sessions=sessions active=active />
                    <ConversationView
                        title=title
                        subtitle=subtitle
                        session_id=session_id
                        messages=messages
                        user_initials=profile.user_initials
                        assistant_initial=product_initial
                        footer=footer
                    />
                    <KnowledgeBasePanel rows=rows totals=totals />
                </main>
            </body>
        </html>
    }
}
