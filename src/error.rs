//! Custom error types for the scrape and chat paths
//!
//! Provides structured, typed errors instead of generic Box<dyn Error>.
//! Handlers branch on these variants to pick fallback data; none of them
//! is ever allowed to surface as an unhandled 5xx page.

use thiserror::Error;

/// Failures while fetching or shaping the CapitolTrades page
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The page structure changed and no <table> element exists.
    /// The display text is shown to the user verbatim.
    #[error("Could not find trade table on CapitolTrades.")]
    TableMissing,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Failures while relaying a chat message to the completion API
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("OpenAI API key is missing. Set OPENAI_API_KEY in your .env.")]
    MissingApiKey,

    #[error("Error connecting to OpenAI: {0}")]
    Upstream(#[from] async_openai::error::OpenAIError),
}
