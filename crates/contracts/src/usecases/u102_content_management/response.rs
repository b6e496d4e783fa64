use serde::{Deserialize, Serialize};

/// Ответ `GET /web/`: собранные посты и их текстовое представление.
///
/// Клиент только логирует сводку, поэтому все поля мягкие.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub blogs: Vec<BlogPost>,

    #[serde(default)]
    pub text_format: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub sub_page_content: SubPageContent,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubPageContent {
    #[serde(default)]
    pub headings: Vec<String>,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub list_items: Vec<String>,
}

impl ScrapeResponse {
    /// Короткая сводка для лога
    pub fn summary(&self) -> String {
        let chars = self.text_format.as_deref().map(str::len).unwrap_or(0);
        format!("{} post(s), {} chars of text", self.blogs.len(), chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_response_lenient() {
        let json = r#"{
            "blogs": [
                {"title": "Post", "link": "https://blog/x", "sub_page_content": {"headings": ["H"]}},
                {}
            ],
            "text_format": "=== Blog Posts ==="
        }"#;
        let resp: ScrapeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.blogs.len(), 2);
        assert_eq!(resp.blogs[0].sub_page_content.headings, vec!["H".to_string()]);
        assert!(resp.blogs[1].title.is_empty());
        assert_eq!(resp.summary(), "2 post(s), 18 chars of text");
    }

    #[test]
    fn test_empty_object() {
        let resp: ScrapeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, ScrapeResponse::default());
        assert_eq!(resp.summary(), "0 post(s), 0 chars of text");
    }
}
