use contracts::shared::ErrorBody;
use thiserror::Error;

/// Маркер, когда сервис не сообщил подробностей
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Ошибки обращения к внешнему сервису
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status}")]
    Http { status: u16, body: String },

    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Подробность для лога: поле `error` из тела ответа, иначе само тело,
    /// иначе общий маркер.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Http { body, .. } => {
                if let Some(parsed) = ErrorBody::parse(body) {
                    parsed.error
                } else if !body.trim().is_empty() {
                    body.clone()
                } else {
                    UNKNOWN_ERROR.to_string()
                }
            }
            _ => UNKNOWN_ERROR.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Serialize(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_from_error_body() {
        let err = ApiError::Http {
            status: 400,
            body: r#"{"error": "Text content is required"}"#.to_string(),
        };
        assert_eq!(err.detail(), "Text content is required");
        assert_eq!(err.to_string(), "HTTP error 400");
    }

    #[test]
    fn test_detail_from_raw_body() {
        let err = ApiError::Http {
            status: 500,
            body: "Internal Server Error".to_string(),
        };
        assert_eq!(err.detail(), "Internal Server Error");
    }

    #[test]
    fn test_detail_unknown() {
        let err = ApiError::Http {
            status: 502,
            body: String::new(),
        };
        assert_eq!(err.detail(), UNKNOWN_ERROR);
        assert_eq!(
            ApiError::Network("connection refused".into()).detail(),
            UNKNOWN_ERROR
        );
    }
}
