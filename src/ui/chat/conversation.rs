//! Conversation column.

use leptos::prelude::*;

use super::{ChatInputArea, MessageBlock};
use crate::model::ChatMessage;
use crate::ui::components::{Panel, PanelHeader};

/// Transcript of the active session plus the input bar.
///
/// Messages render top to bottom in input order; with no messages an
/// empty state replaces the log.
#[component]
pub fn ConversationView(
    title: String,
    subtitle: String,
    session_id: String,
    messages: Vec<ChatMessage>,
    user_initials: String,
    assistant_initial: String,
    footer: String,
) -> impl IntoView {
    let body = if messages.is_empty() {
        view! {
            <div class="flex-1 flex items-center justify-center px-6 py-5" data-role="empty-conversation">
                <p class="text-sm text-text-muted">"Ask a question about your documents to get started."</p>
            </div>
        }
        .into_any()
    } else {
        let blocks = messages
            .into_iter()
            .map(|message| {
                view! {
                    <MessageBlock
                        message=message
                        user_initials=user_initials.clone()
                        assistant_initial=assistant_initial.clone()
                    />
                }
            })
            .collect_view();

        view! {
            <div
                class="flex-1 overflow-y-auto custom-scrollbar px-6 py-5 flex flex-col gap-5"
                role="log"
                aria-live="polite"
            >
                {blocks}
            </div>
        }
        .into_any()
    };

    view! {
        <Panel label="Chat conversation">
            <PanelHeader title=title subtitle=subtitle class="px-6 pb-3 border-b border-border-light" />
            {body}
            <ChatInputArea session_id=session_id footer=footer />
        </Panel>
    }
}
