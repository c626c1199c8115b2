use std::env;

use crate::constants::{agent, scrape, server};

/// Process-wide configuration, read once from the environment at startup
/// and passed by reference into request handlers via `AppState`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,

    /// Profile page to scrape; overridable for tests and mirrors
    pub profile_url: String,

    /// Completion API credential. Absence disables the chat route but
    /// never prevents startup.
    pub openai_api_key: Option<String>,

    /// Optional custom API base (local models, proxies)
    pub openai_base_url: Option<String>,

    /// Chat model identifier
    pub model: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| server::DEFAULT_BIND_ADDR.to_string()),
            profile_url: env::var("CAPITOLTRADES_URL").unwrap_or_else(|_| scrape::PROFILE_URL.to_string()),
            openai_api_key: non_empty_env("OPENAI_API_KEY"),
            openai_base_url: non_empty_env("OPENAI_BASE_URL"),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| agent::DEFAULT_MODEL.to_string()),
        }
    }
}

/// Treats unset and blank variables the same way
fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
