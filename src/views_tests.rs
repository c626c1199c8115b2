//! Unit tests for HTML rendering helpers.

#[cfg(test)]
mod views_tests {
    use crate::scrape::stats::ProfileStats;
    use crate::scrape::trades::TradeRecord;
    use crate::views::*;

    #[test]
    fn test_escape_html_special_characters() {
        assert_eq!(
            escape_html(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("it's"), "it&#39;s");
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_login_page_shows_error_when_present() {
        let page = login_page(Some("Invalid credentials. Try again."), &[]);
        assert!(page.contains("Invalid credentials. Try again."));

        let page = login_page(None, &[]);
        assert!(!page.contains("Invalid credentials"));
    }

    #[test]
    fn test_login_page_renders_flash_messages() {
        let page = login_page(None, &["Please log in first.".to_string()]);
        assert!(page.contains("Please log in first."));
    }

    #[test]
    fn test_dashboard_page_escapes_scraped_values() {
        let mut stats = ProfileStats::fallback();
        stats.name = "<b>Nancy</b>".to_string();
        stats.trades = "42".to_string();

        let page = dashboard_page("admin@pennocksystems.com", &stats, &[]);
        assert!(page.contains("&lt;b&gt;Nancy&lt;/b&gt;"));
        assert!(!page.contains("<b>Nancy</b>"));
        assert!(page.contains("42"));
    }

    #[test]
    fn test_dashboard_page_renders_sentinels() {
        let stats = ProfileStats::fallback();
        let page = dashboard_page("admin@pennocksystems.com", &stats, &[]);
        assert!(page.contains("Nancy Pelosi"));
        assert!(page.contains("Democrat / House / California"));
        assert!(page.contains("—"));
    }

    #[test]
    fn test_reports_page_with_and_without_trades() {
        let trades = vec![TradeRecord {
            ticker: "NVDA".to_string(),
            change: "2025-01-15".to_string(),
            time: "2024-12-20".to_string(),
            action: "buy".to_string(),
            price: "$1M–$5M".to_string(),
        }];

        let page = reports_page("admin@pennocksystems.com", &trades, &[]);
        assert!(page.contains("NVDA"));
        assert!(page.contains("$1M–$5M"));
        assert!(!page.contains("No trades available."));

        let page = reports_page("admin@pennocksystems.com", &[], &[]);
        assert!(page.contains("No trades available."));
    }

    #[test]
    fn test_agent_page_posts_to_chat_route() {
        let page = agent_page("admin@pennocksystems.com", &[]);
        assert!(page.contains("/agent_chat"));
    }
}
