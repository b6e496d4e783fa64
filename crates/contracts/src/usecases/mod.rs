pub mod common;
pub mod u101_chat_query;
pub mod u102_content_management;
