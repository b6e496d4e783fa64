/// Метаданные UseCase для идентификации и отображения в навигации
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u101")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "chat_query")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI (например, "Chat")
    fn display_name() -> &'static str;

    /// Путь маршрута во фронтенде
    fn route_path() -> &'static str;

    /// Описание UseCase
    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u101_chat_query"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
