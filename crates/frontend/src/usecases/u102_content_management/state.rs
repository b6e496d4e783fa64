use crate::shared::error::ApiError;
use thiserror::Error;

pub const SCRAPING_STARTED_TEXT: &str = "Web Scraping Started! 🚀";

/// Вкладки вида контента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentTab {
    #[default]
    WebScraping,
    AddContent,
}

impl ContentTab {
    pub const ALL: [ContentTab; 2] = [ContentTab::WebScraping, ContentTab::AddContent];

    /// Ключ вкладки для `TabList`
    pub fn key(self) -> &'static str {
        match self {
            ContentTab::WebScraping => "webScraping",
            ContentTab::AddContent => "addContent",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentTab::WebScraping => "Web Scraping",
            ContentTab::AddContent => "Add Content",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter content before saving!")]
    EmptyContent,
}

/// Состояние вида контента, живёт пока смонтирован вид.
///
/// `saved` содержит только то, что сервис подтвердил; список только растёт.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentState {
    active_tab: ContentTab,
    draft: String,
    saved: Vec<String>,
}

impl ContentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> ContentTab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: ContentTab) {
        self.active_tab = tab;
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    pub fn saved(&self) -> &[String] {
        &self.saved
    }

    /// Text to submit, or a validation error for blank drafts
    pub fn begin_save(&self) -> Result<String, ValidationError> {
        if self.draft.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }
        Ok(self.draft.clone())
    }

    /// Apply the service reply to a submitted save.
    ///
    /// Only a 2xx reply lists the text; a failure is logged and leaves the
    /// list and the draft untouched. Returns whether the text was listed.
    pub fn apply_save_result(
        &mut self,
        text: String,
        result: &Result<String, ApiError>,
    ) -> bool {
        match result {
            Ok(body) => {
                log::info!("Content Saved Response: {}", body);
                self.confirm_saved(text);
                true
            }
            Err(e) => {
                log::error!("Error Saving Content: {} ({})", e.detail(), e);
                false
            }
        }
    }

    /// Record a save the service accepted
    pub fn confirm_saved(&mut self, text: String) {
        // Черновик мог измениться, пока шёл запрос
        if self.draft == text {
            self.draft.clear();
        }
        self.saved.push(text);
    }
}

/// Alert to show for a scraping reply, `None` on failure.
///
/// Успех и ошибка логируются; задача скрапинга дальше не отслеживается.
pub fn scrape_outcome(result: &Result<String, ApiError>) -> Option<&'static str> {
    match result {
        Ok(summary) => {
            log::info!("Web Scraping Response: {}", summary);
            Some(SCRAPING_STARTED_TEXT)
        }
        Err(e) => {
            log::error!("Web Scraping Error: {} ({})", e.detail(), e);
            None
        }
    }
}
