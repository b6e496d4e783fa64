pub mod request;
pub mod response;

pub use request::QueryRequest;
pub use response::QueryResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct ChatQuery;

impl UseCaseMetadata for ChatQuery {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "chat_query"
    }

    fn display_name() -> &'static str {
        "Chat"
    }

    fn route_path() -> &'static str {
        "/chat"
    }

    fn description() -> &'static str {
        "Вопрос к сервису ответов по сохранённому контенту"
    }
}
