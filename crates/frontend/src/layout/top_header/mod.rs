//! TopHeader component - постоянная навигационная панель.
//!
//! Ссылки строятся из метаданных UseCase, активная ссылка получает
//! `aria-current="page"` от `leptos_router`.

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_chat_query::ChatQuery;
use contracts::usecases::u102_content_management::ContentManagement;
use leptos::prelude::*;
use leptos_router::components::A;

/// Пара (путь, подпись) для ссылки навигации
fn nav_entry<U: UseCaseMetadata>() -> (&'static str, &'static str) {
    (U::route_path(), U::display_name())
}

pub fn nav_entries() -> Vec<(&'static str, &'static str)> {
    vec![nav_entry::<ChatQuery>(), nav_entry::<ContentManagement>()]
}

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <nav class="app-nav">
            {nav_entries()
                .into_iter()
                .map(|(href, label)| view! { <A href=href>{label}</A> })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_entries() {
        assert_eq!(
            nav_entries(),
            vec![("/chat", "Chat"), ("/addContent", "Add Content")]
        );
    }
}
