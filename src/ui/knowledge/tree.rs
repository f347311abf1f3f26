//! Folder tree fragment.
//!
//! The tree is rendered as a flat list of rows with `aria-level`, so a
//! folder toggle can swap the whole fragment in one HTMX request.

use leptos::prelude::*;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use super::panel::plural;
use crate::knowledge::{FolderRow, TreeRow};
use crate::model::DocumentFile;
use crate::ui::components::{FolderIcon, Separator, StatusPill, TypeBadge};

/// Element id targeted by folder toggles.
pub const TREE_ELEMENT_ID: &str = "kb-tree";

/// Indentation per nesting level, in pixels.
const INDENT_PX: usize = 24;

/// Toggle route for a folder; the id is encoded as a single path segment.
fn toggle_url(folder_id: &str) -> String {
    format!(
        "/api/knowledge-base/folders/{}/toggle",
        utf8_percent_encode(folder_id, NON_ALPHANUMERIC)
    )
}

fn indent(depth: usize) -> String {
    format!("padding-left: {}px", depth * INDENT_PX)
}

/// Visible rows of the knowledge tree.
#[component]
pub fn KnowledgeTreeView(rows: Vec<TreeRow>) -> impl IntoView {
    let rows = rows
        .into_iter()
        .map(|row| match row {
            TreeRow::Folder {
                folder,
                depth,
                separated,
            } => view! { <FolderHeader folder=folder depth=depth separated=separated /> }.into_any(),
            TreeRow::File { file, folder_id, depth } => {
                view! { <FileRow file=file folder_id=folder_id depth=depth /> }.into_any()
            }
        })
        .collect_view();

    view! {
        <div
            id=TREE_ELEMENT_ID
            class="flex-1 overflow-y-auto custom-scrollbar px-5 pb-3"
            role="tree"
            aria-label="Knowledge base folders"
        >
            {rows}
        </div>
    }
}

#[component]
fn FolderHeader(folder: FolderRow, depth: usize, separated: bool) -> impl IntoView {
    let FolderRow {
        id,
        name,
        file_count,
        is_expanded,
    } = folder;
    let label = format!("{name} folder, {}", plural(file_count, "file", "files"));
    let url = toggle_url(&id);
    let target = format!("#{TREE_ELEMENT_ID}");
    let chevron = if is_expanded { "▾" } else { "▸" };
    let level = (depth + 1).to_string();
    let style = indent(depth);

    view! {
        {separated.then(|| view! { <Separator class="my-2" /> })}
        <div
            role="treeitem"
            attr:aria-level=level
            aria-expanded=is_expanded.to_string()
            data-role="folder-row"
            data-folder-id=id
            data-expanded=is_expanded.to_string()
            style=style
        >
            <button
                type="button"
                class="w-full flex items-center gap-2 py-2 cursor-pointer bg-transparent border-none text-left"
                aria-label=label
                hx-post=url
                hx-target=target
                hx-swap="outerHTML"
            >
                <FolderIcon open=is_expanded class="h-[17px] w-[17px] text-text-muted" />
                <span class="text-[13px] font-medium flex-1 text-text-primary">{name}</span>
                <span
                    class="text-[11px] min-w-[22px] h-[18px] rounded-full flex items-center justify-center bg-input-bg text-text-muted"
                    data-role="folder-count"
                >
                    {file_count.to_string()}
                </span>
                <span class="text-[11px] text-text-placeholder" aria-hidden="true" data-role="chevron">
                    {chevron}
                </span>
            </button>
        </div>
    }
}

#[component]
fn FileRow(file: DocumentFile, folder_id: String, depth: usize) -> impl IntoView {
    let meta = format!("{} · {} chunks", file.size, file.chunks);
    let level = (depth + 1).to_string();
    let style = indent(depth);

    view! {
        <div
            class="flex items-center gap-2.5 py-1.5 cursor-pointer"
            role="treeitem"
            attr:aria-level=level
            data-role="file-row"
            data-file-id=file.id
            data-folder-id=folder_id
            style=style
        >
            <TypeBadge file_type=file.file_type />
            <span class="flex flex-col min-w-0 flex-1">
                <span class="text-xs truncate font-[450] text-text-primary">{file.filename}</span>
                <span class="text-[10.5px] text-text-muted">{meta}</span>
            </span>
            <StatusPill status=file.status />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_url_encodes_reserved_characters() {
        assert_eq!(toggle_url("f1"), "/api/knowledge-base/folders/f1/toggle");
        assert_eq!(
            toggle_url("papers/2024"),
            "/api/knowledge-base/folders/papers%2F2024/toggle"
        );
        assert_eq!(toggle_url("q?x"), "/api/knowledge-base/folders/q%3Fx/toggle");
        assert_eq!(toggle_url("50%"), "/api/knowledge-base/folders/50%25/toggle");
        assert_eq!(toggle_url("a b"), "/api/knowledge-base/folders/a%20b/toggle");
    }
}
