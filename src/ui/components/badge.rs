//! Badge components for file types and processing status.

use leptos::prelude::*;

use crate::model::{DocumentStatus, FileType};

/// Colour family of a badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    Red,
    Blue,
    Orange,
    Green,
    #[default]
    Neutral,
}

impl Tone {
    /// Get CSS classes for this tone.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Red => "bg-status-red/[0.08] text-status-red",
            Self::Blue => "bg-primary/[0.07] text-primary",
            Self::Orange => "bg-status-orange/10 text-status-orange",
            Self::Green => "bg-status-green/10 text-status-green",
            Self::Neutral => "bg-input-bg text-text-muted",
        }
    }

    /// Stable name exposed as `data-tone`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Neutral => "neutral",
        }
    }
}

impl From<FileType> for Tone {
    fn from(file_type: FileType) -> Self {
        match file_type {
            FileType::Pdf => Self::Red,
            FileType::Md => Self::Blue,
            FileType::Txt => Self::Orange,
        }
    }
}

impl From<DocumentStatus> for Tone {
    fn from(status: DocumentStatus) -> Self {
        match status {
            DocumentStatus::Ready => Self::Green,
            DocumentStatus::Processing => Self::Orange,
            DocumentStatus::Pending => Self::Neutral,
            DocumentStatus::Failed => Self::Red,
        }
    }
}

/// Rounded pill label.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge tone=Tone::Blue>"Knowledge Base"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    /// Colour family.
    #[prop(default = Tone::Neutral)]
    tone: Tone,
    /// Value of the `data-role` hook.
    #[prop(default = "badge")]
    data_role: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center rounded-full px-2 py-0.5 font-semibold {} {}",
        tone.classes(),
        class
    );

    view! {
        <span class=classes data-role=data_role data-tone=tone.name()>
            {children()}
        </span>
    }
}

/// Square tile naming a file type (`PDF`, `MD`, `TXT`).
#[component]
pub fn TypeBadge(
    file_type: FileType,
    /// Size classes of the tile.
    #[prop(default = "w-6 h-6 min-w-6")]
    size: &'static str,
) -> impl IntoView {
    let tone = Tone::from(file_type);
    let classes = format!(
        "{size} rounded-[5px] flex items-center justify-center {}",
        tone.classes()
    );

    view! {
        <span class=classes data-role="type-badge" data-tone=tone.name()>
            <span class="text-[8.5px] font-bold">{file_type.as_str()}</span>
        </span>
    }
}

/// Processing status pill.
#[component]
pub fn StatusPill(status: DocumentStatus) -> impl IntoView {
    view! {
        <Badge tone=Tone::from(status) data_role="status-pill" class="text-[9px] whitespace-nowrap">
            {status.as_str()}
        </Badge>
    }
}
