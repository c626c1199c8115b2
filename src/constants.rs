//! Application-wide constants and magic values
//!
//! This module centralizes all hardcoded values so the scrape target,
//! credentials and agent persona live in one place.

use std::time::Duration;

/// Scrape target constants
pub mod scrape {
    use super::*;

    /// CapitolTrades profile page for Nancy Pelosi (politician id P000197)
    pub const PROFILE_URL: &str = "https://www.capitoltrades.com/politicians/P000197";

    /// Identifying User-Agent sent with every outbound fetch
    pub const USER_AGENT: &str = "StockAgent/1.0";

    /// Hard cap on the outbound profile fetch
    pub const FETCH_TIMEOUT: Duration = Duration::from_secs(20);

    /// Substituted whenever a labeled stat fails to match on the page
    pub const SENTINEL: &str = "—";

    /// Fallbacks used when the page yields no heading / subheading
    pub const DEFAULT_NAME: &str = "Nancy Pelosi";
    pub const DEFAULT_SUBTITLE: &str = "Democrat / House / California";

    /// A trade table row must have at least this many cells to count
    pub const TRADE_ROW_MIN_COLS: usize = 6;
}

/// Authentication constants (single fixed account)
pub mod auth {
    pub const LOGIN_EMAIL: &str = "admin@pennocksystems.com";
    pub const LOGIN_PASSWORD: &str = "BluePanda2025";

    /// Session key holding the logged-in user's email
    pub const SESSION_USER_KEY: &str = "user_email";

    /// Session key holding queued flash messages
    pub const SESSION_FLASH_KEY: &str = "flash";
}

/// Agent chat constants
pub mod agent {
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

    pub const SYSTEM_PROMPT: &str = "You are TickerBot 📈, a helpful assistant that educates users \
        on stock market trends, reports, and financial concepts. \
        You are not a financial advisor and should remind users to \
        consult professionals before trading.";
}

/// Server constants
pub mod server {
    pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

    /// Idle session lifetime in minutes
    pub const SESSION_IDLE_MINUTES: i64 = 60;
}
