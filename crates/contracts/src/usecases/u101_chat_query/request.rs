use serde::{Deserialize, Serialize};

/// Запрос к эндпоинту `/api/query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Идентификатор пользователя (в клиенте фиксированный)
    pub user_id: i64,

    /// Текст вопроса как его ввёл пользователь
    pub query: String,
}

impl QueryRequest {
    pub fn new(user_id: i64, query: impl Into<String>) -> Self {
        Self {
            user_id,
            query: query.into(),
        }
    }
}
