//! Profile stat extraction.
//!
//! Name and subtitle come from structural lookups (first `h1`, then an
//! ordered `h2`-or-`p` chain). The eight numeric/date stats are matched
//! against the flattened page text instead of CSS selectors: the visible
//! label words ("Trades", "Volume", ...) are far more stable than the DOM
//! around them, so a markup redesign degrades individual fields to the
//! sentinel instead of breaking the whole page.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::constants::scrape::{DEFAULT_NAME, DEFAULT_SUBTITLE, SENTINEL};

/// Headline stats for one profile scrape. Every field is always populated:
/// a failed match yields the sentinel, never an absent value.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ProfileStats {
    pub name: String,
    pub subtitle: String,
    pub trades: String,
    pub issuers: String,
    pub volume: String,
    pub last_traded: String,
    pub district: String,
    pub years_active: String,
    pub dob: String,
    pub age: String,
}

impl ProfileStats {
    /// Stats rendered when the page could not be fetched at all.
    pub fn fallback() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            trades: SENTINEL.to_string(),
            issuers: SENTINEL.to_string(),
            volume: SENTINEL.to_string(),
            last_traded: SENTINEL.to_string(),
            district: SENTINEL.to_string(),
            years_active: SENTINEL.to_string(),
            dob: SENTINEL.to_string(),
            age: SENTINEL.to_string(),
        }
    }
}

/// The stats matched by label patterns (everything except name/subtitle)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabeledStat {
    Trades,
    Issuers,
    Volume,
    LastTraded,
    District,
    YearsActive,
    DateOfBirth,
    Age,
}

/// One row of the extraction table: which stat it fills and the pattern
/// capturing the value that precedes its on-page label word.
pub struct LabelPattern {
    pub stat: LabeledStat,
    pub pattern: Regex,
}

static LABEL_PATTERNS: LazyLock<Vec<LabelPattern>> = LazyLock::new(|| {
    // Value first, label word second, as rendered on the page.
    // The trailing \b keeps "42 Trades" from matching "42 Tradesmen".
    let table = [
        (LabeledStat::Trades, r"(?i)(\d+)\s+Trades\b"),
        (LabeledStat::Issuers, r"(?i)(\d+)\s+Issuers\b"),
        (LabeledStat::Volume, r"(?i)(\$?\d[\d.,]*\s*[KMB]?)\s+Volume\b"),
        (LabeledStat::LastTraded, r"(?i)(\d{4}-\d{2}-\d{2})\s+Last Traded\b"),
        (LabeledStat::District, r"(?i)(\d+)\s+District\b"),
        (LabeledStat::YearsActive, r"(?i)(\d{4}\s*–\s*\d{4})\s+Years Active\b"),
        (LabeledStat::DateOfBirth, r"(?i)(\d{4}-\d{2}-\d{2})\s+Date of Birth\b"),
        (LabeledStat::Age, r"(?i)(\d+)\s+Age\b"),
    ];

    table
        .into_iter()
        .map(|(stat, pattern)| LabelPattern {
            stat,
            pattern: Regex::new(pattern).expect("static pattern"),
        })
        .collect()
});

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("static selector"));
static H2_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("static selector"));
static P_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("static selector"));

pub fn label_patterns() -> &'static [LabelPattern] {
    LABEL_PATTERNS.as_slice()
}

/// Builds a fully populated `ProfileStats` from raw markup. Extraction is
/// infallible: each stat degrades to the sentinel on its own, and missing
/// headings degrade to the literal defaults.
pub fn extract_stats(html: &str) -> ProfileStats {
    let doc = Html::parse_document(html);
    let mut stats = ProfileStats::fallback();

    if let Some(h1) = doc.select(&H1_SELECTOR).next() {
        stats.name = joined_text(h1, " ");
    }
    if let Some(subtitle) = subtitle_text(&doc) {
        stats.subtitle = subtitle;
    }

    let page_text = flatten_text(&doc);
    for entry in label_patterns() {
        let value = grab(&page_text, &entry.pattern);
        let slot = match entry.stat {
            LabeledStat::Trades => &mut stats.trades,
            LabeledStat::Issuers => &mut stats.issuers,
            LabeledStat::Volume => &mut stats.volume,
            LabeledStat::LastTraded => &mut stats.last_traded,
            LabeledStat::District => &mut stats.district,
            LabeledStat::YearsActive => &mut stats.years_active,
            LabeledStat::DateOfBirth => &mut stats.dob,
            LabeledStat::Age => &mut stats.age,
        };
        *slot = value;
    }

    stats
}

/// Ordered lookup chain for the subtitle: the first `h2` wins, otherwise
/// the first paragraph. Presence of the element decides, not its content.
pub fn subtitle_text(doc: &Html) -> Option<String> {
    for selector in [&*H2_SELECTOR, &*P_SELECTOR] {
        if let Some(el) = doc.select(selector).next() {
            return Some(joined_text(el, " / "));
        }
    }
    None
}

/// Reduces the whole document to one reading-order string with element
/// boundaries collapsed to single spaces. Substrate for label matching.
pub fn flatten_text(doc: &Html) -> String {
    doc.root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn grab(page_text: &str, pattern: &Regex) -> String {
    pattern
        .captures(page_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| SENTINEL.to_string())
}

fn joined_text(el: ElementRef<'_>, separator: &str) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
