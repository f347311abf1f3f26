//! Chat-specific UI components.
//!
//! The session sidebar, the conversation column and its inert input bar.

mod conversation;
mod input_area;
mod message;
mod session_list;

pub use conversation::ConversationView;
pub use input_area::ChatInputArea;
pub use message::{MessageBlock, SourcesCard};
pub use session_list::SessionList;
