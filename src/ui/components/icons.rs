//! Inline stroke icons used by the chat input, sessions and folder rows.

use leptos::prelude::*;

const ICON_SIZE: &str = "h-4 w-4";

/// Stroke-style SVG wrapper shared by all icons.
#[component]
fn StrokeIcon(class: &'static str, children: Children) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=classes
        >
            {children()}
        </svg>
    }
}

/// Send/arrow-up icon.
#[component]
pub fn SendIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            <line x1="12" y1="19" x2="12" y2="5" />
            <polyline points="5 12 12 5 19 12" />
        </StrokeIcon>
    }
}

/// Paperclip/attach icon.
#[component]
pub fn PaperclipIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            <path d="m21.44 11.05-9.19 9.19a6 6 0 0 1-8.49-8.49l8.57-8.57A4 4 0 1 1 18 8.84l-8.59 8.57a2 2 0 0 1-2.83-2.83l8.49-8.48" />
        </StrokeIcon>
    }
}

/// Camera/image icon.
#[component]
pub fn CameraIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            <path d="M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" />
            <circle cx="12" cy="13" r="3" />
        </StrokeIcon>
    }
}

/// Folder icon, drawn open when expanded.
#[component]
pub fn FolderIcon(
    open: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            {if open {
                view! {
                    <path d="m6 14 1.5-2.9A2 2 0 0 1 9.24 10H20a2 2 0 0 1 1.94 2.5l-1.54 6a2 2 0 0 1-1.95 1.5H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h3.9a2 2 0 0 1 1.69.9l.81 1.2a2 2 0 0 0 1.67.9H18a2 2 0 0 1 2 2v2" />
                }.into_any()
            } else {
                view! {
                    <path d="M20 20a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-7.9a2 2 0 0 1-1.69-.9L9.6 3.9A2 2 0 0 0 7.93 3H4a2 2 0 0 0-2 2v13a2 2 0 0 0 2 2Z" />
                }.into_any()
            }}
        </StrokeIcon>
    }
}

/// Chat bubble icon.
#[component]
pub fn ChatIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <StrokeIcon class=class>
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        </StrokeIcon>
    }
}
