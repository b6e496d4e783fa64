use crate::shared::error::ApiError;
use contracts::usecases::u101_chat_query::QueryResponse;

pub const NO_RESPONSE_TEXT: &str = "No response from bot";
pub const FETCH_ERROR_TEXT: &str = "❌ Error: Failed to fetch response.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// Сообщение ленты. Создаётся один раз и больше не меняется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Позиция в ленте, начиная с 1
    pub id: u64,
    pub text: String,
    pub sender: Sender,
}

/// Состояние чата, живёт пока смонтирован вид.
///
/// Каждый `begin_send` должен завершаться ровно одним `complete`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatState {
    messages: Vec<Message>,
    in_flight: usize,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// True while at least one request is unresolved
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Start a send of `input`.
    ///
    /// Returns the text to send, or `None` when the input is blank; in that
    /// case nothing changes and no request must be made. The caller clears
    /// its input buffer on `Some`.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() {
            return None;
        }
        let text = input.to_string();
        self.push(text.clone(), Sender::User);
        self.in_flight += 1;
        Some(text)
    }

    /// Resolve one pending send with exactly one bot message
    pub fn complete(&mut self, result: Result<QueryResponse, ApiError>) {
        let text = match result {
            Ok(response) => response
                .answer_text()
                .unwrap_or(NO_RESPONSE_TEXT)
                .to_string(),
            Err(e) => {
                log::warn!("Chat query failed: {}", e);
                FETCH_ERROR_TEXT.to_string()
            }
        };
        self.push(text, Sender::Bot);
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn push(&mut self, text: String, sender: Sender) {
        let id = self.messages.len() as u64 + 1;
        self.messages.push(Message { id, text, sender });
    }
}
