//! u101 Chat: вопрос к сервису ответов и лента сообщений
//!
//! Structure:
//! - api.rs: API function for `/api/query`
//! - state.rs: ChatState, чистый контейнер состояния вида
//! - view.rs: ChatView component

mod api;
pub mod state;
mod view;

pub use state::{ChatState, Message, Sender};
pub use view::ChatView;
