//! Initials avatar.

use leptos::prelude::*;

/// Round avatar showing initials.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar initials="JD".to_string() />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Initials to display.
    initials: String,
    /// Size class (e.g., "h-7 w-7").
    #[prop(default = "w-7 h-7 min-w-7")]
    size: &'static str,
    /// Background and text classes.
    #[prop(default = "bg-gradient-to-br from-[#E8E8ED] to-[#D1D1D6] text-text-tertiary")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!(
        "rounded-full flex items-center justify-center text-[10px] font-semibold {size} {class}"
    );

    view! {
        <span class=classes aria-hidden="true">
            {initials}
        </span>
    }
}
