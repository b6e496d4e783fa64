//! u102 Content: запуск скрапинга и добавление текста в базу знаний
//!
//! Structure:
//! - api.rs: API functions for `/web/` and `/web/contentRag`
//! - state.rs: ContentState и вкладки
//! - view.rs: ContentView component

mod api;
pub mod state;
mod view;

pub use state::{scrape_outcome, ContentState, ContentTab, ValidationError};
pub use view::ContentView;
