//! Knowledge-base sidebar.

use leptos::prelude::*;

use super::KnowledgeTreeView;
use crate::knowledge::{TreeRow, TreeTotals};
use crate::ui::components::{Button, ButtonSize, ButtonVariant, Panel, PanelHeader};

pub(super) fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Right-hand column with the folder tree.
///
/// The search input and the upload zone are placeholders with no
/// behaviour attached.
#[component]
pub fn KnowledgeBasePanel(rows: Vec<TreeRow>, totals: TreeTotals) -> impl IntoView {
    let subtitle = format!(
        "{} in {}",
        plural(totals.files, "file", "files"),
        plural(totals.folders, "folder", "folders")
    );

    view! {
        <Panel label="Knowledge base" width="w-[340px]" id="knowledge-base">
            <PanelHeader title="Knowledge Base".to_string() subtitle=subtitle />

            <div class="px-3 pt-1 pb-3">
                <label for="kb-search" class="sr-only">"Search files and folders"</label>
                <input
                    id="kb-search"
                    type="search"
                    placeholder="Search files and folders..."
                    autocomplete="off"
                    class="w-full h-[34px] rounded-[10px] px-4 text-[12.5px] bg-input-bg border-none outline-none text-text-primary placeholder:text-text-placeholder"
                />
            </div>

            <KnowledgeTreeView rows=rows />

            <div class="px-3 pb-5 pt-2">
                <Button variant=ButtonVariant::Dashed size=ButtonSize::Block label="Upload documents" class="h-10 rounded-xl">
                    <span class="text-xs text-text-muted">
                        <span class="font-medium text-primary">"Drop files"</span>
                        " or click to upload"
                    </span>
                </Button>
            </div>
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::plural;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "file", "files"), "1 file");
        assert_eq!(plural(8, "file", "files"), "8 files");
        assert_eq!(plural(0, "folder", "folders"), "0 folders");
    }
}
