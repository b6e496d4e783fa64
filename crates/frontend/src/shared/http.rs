//! Thin wrappers over `gloo_net` that turn every outcome into `ApiError`.

use crate::shared::error::ApiError;
use gloo_net::http::{Request, Response};
use serde::Serialize;

/// POST a JSON body, return the response text of a 2xx reply
pub async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<String, ApiError> {
    log::debug!("POST {}", url);
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)?
        .send()
        .await?;
    read_body(response).await
}

/// GET without payload, return the response text of a 2xx reply
pub async fn get_text(url: &str) -> Result<String, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url).send().await?;
    read_body(response).await
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await.map_err(ApiError::from);
    finish_response(ok, status, body)
}

/// Итог запроса по статусу и результату чтения тела.
///
/// У 2xx ошибка чтения тела — сетевая ошибка. У остальных тело нужно только
/// как подробность для лога, поэтому его потеря не важна.
fn finish_response(
    ok: bool,
    status: u16,
    body: Result<String, ApiError>,
) -> Result<String, ApiError> {
    if !ok {
        return Err(ApiError::Http {
            status,
            body: body.unwrap_or_default(),
        });
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_returned() {
        assert_eq!(
            finish_response(true, 200, Ok(r#"{"answer": "Hi!"}"#.to_string())),
            Ok(r#"{"answer": "Hi!"}"#.to_string())
        );
    }

    #[test]
    fn test_unreadable_success_body_is_network_error() {
        let result = finish_response(
            true,
            200,
            Err(ApiError::Network("connection reset".to_string())),
        );
        assert_eq!(
            result,
            Err(ApiError::Network("connection reset".to_string()))
        );
    }

    #[test]
    fn test_error_status_keeps_body() {
        assert_eq!(
            finish_response(false, 400, Ok(r#"{"error": "bad"}"#.to_string())),
            Err(ApiError::Http {
                status: 400,
                body: r#"{"error": "bad"}"#.to_string(),
            })
        );
    }

    #[test]
    fn test_error_status_with_unreadable_body() {
        assert_eq!(
            finish_response(false, 502, Err(ApiError::Network("reset".to_string()))),
            Err(ApiError::Http {
                status: 502,
                body: String::new(),
            })
        );
    }
}
