//! Stock Agent - Congressional trade dashboard with an LLM chat agent
//!
//! This library provides the core functionality: scraping a CapitolTrades
//! profile page into typed stats and trade records, serving session-gated
//! dashboard/report views, and relaying chat messages to the completion API.

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod llm;
pub mod scrape;
pub mod views;

// Re-export commonly used types
pub use api::{build_router, run_server, AppState};
pub use config::AppConfig;
pub use llm::LlmClient;
pub use scrape::stats::ProfileStats;
pub use scrape::trades::TradeRecord;
pub use scrape::ScrapeClient;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod views_tests;
