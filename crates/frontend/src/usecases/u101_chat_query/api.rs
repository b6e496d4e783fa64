//! Chat - API functions

use crate::shared::config::ApiConfig;
use crate::shared::error::ApiError;
use crate::shared::http::post_json;
use contracts::usecases::u101_chat_query::{QueryRequest, QueryResponse};

/// Отправить вопрос сервису
pub async fn send_query(api: &ApiConfig, user_id: i64, text: &str) -> Result<QueryResponse, ApiError> {
    let request = QueryRequest::new(user_id, text);
    let body = post_json(&api.query_url(), &request).await?;
    Ok(decode_query_response(&body))
}

/// Тело 2xx без ожидаемой формы считается ответом без `answer`
fn decode_query_response(body: &str) -> QueryResponse {
    serde_json::from_str(body).unwrap_or_else(|e| {
        log::warn!("Unexpected query response ({}), treating as empty", e);
        QueryResponse::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_answer() {
        let resp = decode_query_response(r#"{"answer": "Hi!"}"#);
        assert_eq!(resp.answer_text(), Some("Hi!"));
    }

    #[test]
    fn test_decode_non_json_is_empty() {
        assert_eq!(decode_query_response("OK"), QueryResponse::default());
        assert_eq!(decode_query_response(""), QueryResponse::default());
    }
}
