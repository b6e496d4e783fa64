pub mod request;
pub mod response;

pub use request::SaveContentRequest;
pub use response::{BlogPost, ScrapeResponse, SubPageContent};

use crate::usecases::common::UseCaseMetadata;

pub struct ContentManagement;

impl UseCaseMetadata for ContentManagement {
    fn usecase_index() -> &'static str {
        "u102"
    }

    fn usecase_name() -> &'static str {
        "content_management"
    }

    fn display_name() -> &'static str {
        "Add Content"
    }

    fn route_path() -> &'static str {
        "/addContent"
    }

    fn description() -> &'static str {
        "Запуск веб-скрапинга и добавление текста в базу знаний"
    }
}
