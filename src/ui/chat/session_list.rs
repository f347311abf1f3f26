//! Session sidebar.

use leptos::prelude::*;

use crate::model::ChatSession;
use crate::ui::components::{Button, ButtonSize, ButtonVariant, ChatIcon, Panel, PanelHeader};

/// Ordered list of chat sessions with one highlighted.
///
/// `active` is the index chosen by
/// [`active_session_index`](crate::model::active_session_index); every
/// other session renders inactive regardless of its flag.
#[component]
pub fn SessionList(sessions: Vec<ChatSession>, active: Option<usize>) -> impl IntoView {
    let items = sessions
        .into_iter()
        .enumerate()
        .map(|(idx, session)| {
            let is_active = active == Some(idx);
            view! { <SessionItem session=session active=is_active /> }
        })
        .collect_view();

    view! {
        <Panel label="Chat sessions" width="w-[260px]">
            <PanelHeader
                title="Chats".to_string()
                subtitle="Your conversations".to_string()
                class="pt-8"
            />

            <div class="px-3">
                <Button variant=ButtonVariant::Subtle size=ButtonSize::Block label="Start a new chat" class="text-[13px]">
                    <span class="text-base font-light text-text-quaternary">"+"</span>
                    "New Chat"
                </Button>
            </div>

            <ul class="mt-3 flex flex-1 flex-col gap-1 overflow-y-auto px-3 pb-4" role="list">
                {items}
            </ul>
        </Panel>
    }
}

#[component]
fn SessionItem(session: ChatSession, active: bool) -> impl IntoView {
    let (button_classes, icon_classes, title_classes, time_classes) = if active {
        (
            "bg-primary",
            "bg-active-session-icon text-white/90",
            "text-white",
            "text-active-session-sub",
        )
    } else {
        (
            "hover:bg-surface",
            "bg-surface text-text-tertiary",
            "text-text-primary",
            "text-text-quaternary",
        )
    };

    let button_classes =
        format!("flex w-full items-center gap-3 rounded-[10px] px-3 py-2.5 text-left {button_classes}");
    let icon_classes =
        format!("flex h-7 w-7 shrink-0 items-center justify-center rounded-full {icon_classes}");
    let title_classes = format!("truncate text-[13px] font-medium {title_classes}");
    let time_classes = format!("text-[11px] {time_classes}");

    view! {
        <li role="listitem">
            <button
                type="button"
                class=button_classes
                aria-current=active.then_some("true")
                data-role="session"
                data-session-id=session.id
                data-active=active.to_string()
            >
                <span class=icon_classes>
                    <ChatIcon class="h-3.5 w-3.5" />
                </span>
                <span class="flex min-w-0 flex-col">
                    <span class=title_classes>
                        {session.title}
                    </span>
                    <span class=time_classes>{session.timestamp}</span>
                </span>
            </button>
        </li>
    }
}
