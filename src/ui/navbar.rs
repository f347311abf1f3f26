//! Top navigation bar.

use leptos::prelude::*;

use crate::ui::components::Avatar;

/// Static navigation links; the first is the current page.
const NAV_LINKS: [(&str, &str); 4] = [
    ("Chat", "/"),
    ("Documents", "/#knowledge-base"),
    ("Evaluation", "#"),
    ("Settings", "#"),
];

/// Branding, static links, document pill, model badge and user avatar.
#[component]
pub fn Navbar(
    product_name: String,
    product_initial: String,
    model_label: String,
    user_initials: String,
    document_count: usize,
) -> impl IntoView {
    let links = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(idx, &(label, href))| {
            let current = idx == 0;
            let classes = if current {
                "text-xs font-medium text-nav-text"
            } else {
                "text-xs text-nav-text-dim hover:text-nav-text"
            };
            view! {
                <a href=href class=classes aria-current=current.then_some("page") data-role="nav-link">
                    {label}
                </a>
            }
        })
        .collect_view();
    let docs = format!("{document_count} docs");

    view! {
        <nav
            class="fixed top-0 left-0 w-full h-11 z-50 flex items-center px-6 bg-nav-bg"
            aria-label="Main navigation"
        >
            <a href="/" class="flex items-center gap-2.5">
                <span class="w-[30px] h-[30px] rounded-[7px] flex items-center justify-center bg-gradient-to-br from-primary to-primary-dark">
                    <span class="text-white text-sm font-bold leading-none">{product_initial}</span>
                </span>
                <span class="text-[15px] font-semibold tracking-tight text-nav-text">{product_name}</span>
            </a>

            <div class="flex items-center gap-6 ml-10">{links}</div>

            <div class="flex-1"></div>

            <div class="flex items-center gap-3">
                <div class="h-[22px] px-3 rounded-full flex items-center gap-2 bg-white/10 border border-white/[0.08]">
                    <span class="w-1.5 h-1.5 rounded-full bg-status-green" aria-hidden="true"></span>
                    <span class="text-[11px] font-medium text-white/80" data-role="doc-count">{docs}</span>
                </div>

                <div class="h-[22px] px-3 rounded-full flex items-center bg-primary/15">
                    <span class="text-[11px] font-medium font-mono text-blue-accent" data-role="model-badge">
                        {model_label}
                    </span>
                </div>

                <button type="button" class="border-none cursor-pointer bg-transparent p-0" aria-label="User menu">
                    <Avatar initials=user_initials size="w-[26px] h-[26px]" class="bg-white/15 text-white/80" />
                </button>
            </div>
        </nav>
    }
}
