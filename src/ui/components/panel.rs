//! Rounded column container with a title header.

use leptos::prelude::*;

/// Column container used by the sidebars and the conversation.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Panel label="Knowledge base" width="w-[340px]">
///         <PanelHeader title="Knowledge Base".to_string() subtitle="8 files in 3 folders".to_string() />
///     </Panel>
/// }
/// ```
#[component]
pub fn Panel(
    /// Accessible label of the region.
    label: &'static str,
    /// Width classes; empty lets the panel grow.
    #[prop(default = "flex-1 min-w-0")]
    width: &'static str,
    /// Element id.
    #[prop(default = "")]
    id: &'static str,
    /// Panel content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "{width} shrink-0 h-full flex flex-col overflow-hidden rounded-[18px] bg-card-bg card-shadow"
    );
    let id = (!id.is_empty()).then_some(id);

    view! {
        <section class=classes aria-label=label id=id>
            {children()}
        </section>
    }
}

/// Panel title with a muted subtitle line.
#[component]
pub fn PanelHeader(
    title: String,
    subtitle: String,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("px-5 pt-6 pb-2 {class}");

    view! {
        <header class=classes>
            <h2 class="text-xl font-semibold tracking-tight text-text-primary">{title}</h2>
            <p class="mt-0.5 text-[12.5px] text-text-tertiary">{subtitle}</p>
        </header>
    }
}
