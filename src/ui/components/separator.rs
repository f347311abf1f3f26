//! Separator component for visual division.

use leptos::prelude::*;

/// Horizontal separator line.
#[component]
pub fn Separator(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("border-t border-border-light {class}");

    view! {
        <hr class=classes />
    }
}
