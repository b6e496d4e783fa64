//! Content - API functions

use crate::shared::config::ApiConfig;
use crate::shared::error::ApiError;
use crate::shared::http::{get_text, post_json};
use contracts::usecases::u102_content_management::{SaveContentRequest, ScrapeResponse};

/// Запустить скрапинг. Возвращает сводку ответа для лога.
///
/// Статус задачи не отслеживается: успешный ответ означает только,
/// что сервис принял команду.
pub async fn start_scraping(api: &ApiConfig) -> Result<String, ApiError> {
    let body = get_text(&api.scrape_url()).await?;
    Ok(describe_scrape_response(&body))
}

/// Сохранить текст. Возвращает тело ответа как есть.
pub async fn save_content(api: &ApiConfig, text: &str) -> Result<String, ApiError> {
    let request = SaveContentRequest {
        text: text.to_string(),
    };
    post_json(&api.content_url(), &request).await
}

fn describe_scrape_response(body: &str) -> String {
    match serde_json::from_str::<ScrapeResponse>(body) {
        Ok(parsed) => parsed.summary(),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_parsed_response() {
        let body = r#"{"blogs": [{"title": "A"}], "text_format": "abc"}"#;
        assert_eq!(describe_scrape_response(body), "1 post(s), 3 chars of text");
    }

    #[test]
    fn test_describe_raw_response() {
        assert_eq!(describe_scrape_response("started"), "started");
    }
}
