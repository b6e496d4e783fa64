use serde::{Deserialize, Serialize};

/// Тело запроса `POST /web/contentRag`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveContentRequest {
    pub text: String,
}
