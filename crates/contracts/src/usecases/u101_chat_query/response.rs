use serde::{Deserialize, Serialize};

/// Ответ эндпоинта `/api/query`.
///
/// Сервис возвращает также исходный вопрос и найденный контекст;
/// клиенту важен только `answer`, остальные поля необязательны.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answer: Option<String>,

    #[serde(default)]
    pub query: Option<String>,

    #[serde(default)]
    pub context: Option<String>,
}

impl QueryResponse {
    /// Ответ, если он присутствует и не пустой
    pub fn answer_text(&self) -> Option<&str> {
        self.answer.as_deref().filter(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_response() {
        let json = r#"{"query": "Hello", "context": "ctx", "answer": "Hi!"}"#;
        let resp: QueryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.answer_text(), Some("Hi!"));
        assert_eq!(resp.context.as_deref(), Some("ctx"));
    }

    #[test]
    fn test_missing_or_empty_answer() {
        let resp: QueryResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.answer_text(), None);

        let resp: QueryResponse = serde_json::from_str(r#"{"answer": ""}"#).unwrap();
        assert_eq!(resp.answer_text(), None);

        let resp: QueryResponse = serde_json::from_str(r#"{"answer": null}"#).unwrap();
        assert_eq!(resp.answer_text(), None);
    }
}
