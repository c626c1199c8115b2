//! Trade-history table extraction.
//!
//! Finds the first table on the profile page and maps fixed column
//! positions to record fields. Rows with fewer than six cells are dropped
//! silently; source order is preserved, nothing is deduplicated.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::constants::scrape::TRADE_ROW_MIN_COLS;
use crate::error::ScrapeError;

/// One disclosed trade, cell text kept verbatim.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct TradeRecord {
    /// Column 0: security identifier
    pub ticker: String,
    /// Column 1: the table's disclosure-date column. The field name does
    /// not match that label; it is kept for template compatibility.
    pub change: String,
    /// Column 2: transaction date
    pub time: String,
    /// Column 4: buy/sell indicator
    pub action: String,
    /// Column 5: disclosed amount/range
    pub price: String,
}

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("static selector"));
static BODY_ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody tr").expect("static selector"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("static selector"));

/// Extracts trade records from raw markup. Fails only when no table
/// exists at all; malformed rows degrade to skips, not errors.
pub fn extract_trades(html: &str) -> Result<Vec<TradeRecord>, ScrapeError> {
    let doc = Html::parse_document(html);
    let table = doc
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or(ScrapeError::TableMissing)?;

    let mut records = Vec::new();
    for row in table.select(&BODY_ROW_SELECTOR) {
        let cols: Vec<String> = row.select(&CELL_SELECTOR).map(cell_text).collect();
        if cols.len() < TRADE_ROW_MIN_COLS {
            continue;
        }
        records.push(TradeRecord {
            ticker: cols[0].clone(),
            change: cols[1].clone(),
            time: cols[2].clone(),
            action: cols[4].clone(),
            price: cols[5].clone(),
        });
    }

    Ok(records)
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
