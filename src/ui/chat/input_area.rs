//! Chat input bar.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonSize, ButtonVariant, CameraIcon, PaperclipIcon, SendIcon};

/// Follow-up input with a submission that performs no work.
///
/// The form posts to `/api/chat`, which acknowledges with `204` and
/// changes nothing; `hx-swap="none"` leaves the page untouched.
#[component]
pub fn ChatInputArea(
    /// Session the form belongs to.
    session_id: String,
    /// Footer line under the input.
    footer: String,
) -> impl IntoView {
    view! {
        <div class="px-6 pb-4 pt-2">
            <form
                class="h-[42px] rounded-full flex items-center px-5 gap-2 bg-input-bg"
                hx-post="/api/chat"
                hx-trigger="submit"
                hx-swap="none"
                aria-label="Chat input"
            >
                <input type="hidden" name="session_id" value=session_id />
                <label for="chat-input" class="sr-only">"Ask a follow-up"</label>
                <input
                    id="chat-input"
                    name="message"
                    type="text"
                    placeholder="Ask a follow-up..."
                    autocomplete="off"
                    class="flex-1 text-sm bg-transparent border-none outline-none text-text-primary placeholder:text-text-placeholder"
                />
                <Button variant=ButtonVariant::Ghost label="Attach file">
                    <PaperclipIcon />
                </Button>
                <Button variant=ButtonVariant::Ghost label="Upload image">
                    <CameraIcon />
                </Button>
                <Button button_type="submit" size=ButtonSize::Icon label="Send message">
                    <SendIcon />
                </Button>
            </form>

            <p class="text-center text-[10.5px] mt-2 mb-0 text-text-placeholder" data-role="chat-footer">
                {footer}
            </p>
        </div>
    }
}
