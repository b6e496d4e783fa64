pub mod api_utils;
pub mod config;
pub mod error;
pub mod http;
pub mod icons;
pub mod notify;
