//! Button component with variants and sizes.

use leptos::prelude::*;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled accent button.
    #[default]
    Primary,
    /// Muted surface button.
    Subtle,
    /// Transparent icon button.
    Ghost,
    /// Dashed drop-zone button.
    Dashed,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-white",
            Self::Subtle => "bg-surface text-text-secondary",
            Self::Ghost => "bg-transparent border-none p-0 text-text-muted",
            Self::Dashed => "bg-transparent border-[1.5px] border-dashed border-border-dashed",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Content-sized button.
    #[default]
    Auto,
    /// Round icon button.
    Icon,
    /// Full-width button.
    Block,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Auto => "",
            Self::Icon => "w-8 h-8 rounded-full",
            Self::Block => "w-full rounded-[10px] py-2",
        }
    }
}

/// ShadCN-style button component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Subtle size=ButtonSize::Block label="Start a new chat">
///         "New Chat"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    /// Button variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size.
    #[prop(default = ButtonSize::Auto)]
    size: ButtonSize,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Accessible label.
    #[prop(default = "")]
    label: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-1.5 cursor-pointer font-medium";

    let classes = format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    );
    let aria_label = (!label.is_empty()).then_some(label);

    view! {
        <button type=button_type class=classes aria-label=aria_label>
            {children()}
        </button>
    }
}
