use serde::{Deserialize, Serialize};

/// Тело ошибки, которое возвращает сервис: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Пытается разобрать тело ответа как `ErrorBody`.
    /// Пустое поле `error` считается отсутствующим.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .filter(|b| !b.error.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"error": "Text content is required"}"#;
        assert_eq!(
            ErrorBody::parse(body).map(|b| b.error),
            Some("Text content is required".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(ErrorBody::parse(r#"["Query cannot be empty."]"#).is_none());
        assert!(ErrorBody::parse("<html>502</html>").is_none());
        assert!(ErrorBody::parse(r#"{"error": "  "}"#).is_none());
    }
}
