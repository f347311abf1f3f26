//! Message blocks with citations and retrieval metadata.

use leptos::prelude::*;

use crate::model::{ChatMessage, MessageRole, RetrievalMeta, Source};
use crate::ui::components::{Avatar, Badge, Tone, TypeBadge};

/// A single transcript entry.
#[component]
pub fn MessageBlock(
    message: ChatMessage,
    /// Initials for user messages.
    user_initials: String,
    /// Initial for assistant messages.
    assistant_initial: String,
) -> impl IntoView {
    match message.role {
        MessageRole::User => view! {
            <div class="flex items-center justify-end gap-3" data-role="message" data-message-role="user">
                <div class="px-5 py-2.5 rounded-[20px] text-[15px] text-white bg-primary max-w-[80%]">
                    {message.content}
                </div>
                <Avatar initials=user_initials />
            </div>
        }
        .into_any(),
        MessageRole::Assistant => {
            let paragraphs = message
                .paragraphs()
                .map(|p| view! { <p class="m-0">{p.to_string()}</p> })
                .collect_view();
            let sources = message.citations().to_vec();
            let retrieval = message.retrieval().cloned();

            view! {
                <article class="flex items-start gap-3" data-role="message" data-message-role="assistant">
                    <Avatar
                        initials=assistant_initial
                        class="mt-0.5 bg-gradient-to-br from-primary to-primary-dark text-white font-bold"
                    />
                    <div class="flex flex-col gap-4 text-[14.5px] tracking-tight leading-[22px] max-w-[90%] text-text-secondary">
                        {paragraphs}
                        {(!sources.is_empty()).then(|| view! { <SourcesCard sources=sources /> })}
                        {retrieval.map(|meta| view! { <RetrievalBadge meta=meta /> })}
                    </div>
                </article>
            }
            .into_any()
        }
    }
}

/// Citation list rendered beneath an assistant answer, in input order.
#[component]
pub fn SourcesCard(sources: Vec<Source>) -> impl IntoView {
    let last = sources.len().saturating_sub(1);
    let rows = sources
        .into_iter()
        .enumerate()
        .map(|(idx, source)| {
            let border = if idx < last { "border-b border-border-light" } else { "" };
            let classes = format!("flex items-center gap-3 px-5 py-2.5 {border}");
            view! {
                <li
                    class=classes
                    data-role="source"
                    data-source-id=source.id
                >
                    <TypeBadge file_type=source.file_type size="w-[22px] h-[22px] min-w-[22px]" />
                    <span class="text-xs flex-1 truncate font-[450] text-text-secondary">
                        {source.filename}
                    </span>
                    <span class="text-[9.5px] px-2 py-0.5 rounded font-mono bg-input-bg text-text-muted">
                        {source.location}
                    </span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="rounded-xl overflow-hidden border border-border-medium" data-role="sources">
            <div class="px-5 py-2 bg-input-bg border-b border-border-light">
                <span class="text-[10.5px] font-semibold tracking-wider text-text-muted">"SOURCES"</span>
            </div>
            <ul class="list-none m-0 p-0">{rows}</ul>
        </div>
    }
}

#[component]
fn RetrievalBadge(meta: RetrievalMeta) -> impl IntoView {
    let summary = meta.summary();

    view! {
        <div class="flex items-center gap-2" data-role="retrieval">
            <Badge tone=Tone::Blue class="text-[10px] font-medium px-2.5 py-1">
                {meta.tool_name}
            </Badge>
            <span class="text-[11px] text-text-muted">{summary}</span>
        </div>
    }
}
