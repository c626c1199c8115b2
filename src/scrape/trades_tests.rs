//! Unit tests for trade-table extraction.

#[cfg(test)]
mod trades_tests {
    use crate::error::ScrapeError;
    use crate::scrape::trades::*;

    fn row(cells: &[&str]) -> String {
        let tds: String = cells.iter().map(|c| format!("<td>{}</td>", c)).collect();
        format!("<tr>{}</tr>", tds)
    }

    fn table_doc(rows: &[String]) -> String {
        format!(
            "<html><body><table><thead><tr><th>Ticker</th></tr></thead><tbody>{}</tbody></table></body></html>",
            rows.concat()
        )
    }

    #[test]
    fn test_missing_table_is_reported() {
        let err = extract_trades("<html><body><p>no table here</p></body></html>").unwrap_err();
        assert!(matches!(err, ScrapeError::TableMissing));
        assert_eq!(err.to_string(), "Could not find trade table on CapitolTrades.");
    }

    #[test]
    fn test_row_maps_fixed_column_positions() {
        let html = table_doc(&[row(&[
            "NVDA",
            "2025-01-15",
            "2024-12-20",
            "House",
            "buy",
            "$1M–$5M",
        ])]);

        let records = extract_trades(&html).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.ticker, "NVDA");
        assert_eq!(record.change, "2025-01-15"); // disclosure-date column
        assert_eq!(record.time, "2024-12-20");
        assert_eq!(record.action, "buy");
        assert_eq!(record.price, "$1M–$5M");
        // Column 3 is intentionally unused
    }

    #[test]
    fn test_short_rows_are_skipped_silently() {
        let html = table_doc(&[
            row(&["AAPL", "a", "b", "c", "sell"]), // 5 cells: dropped
            row(&["MSFT", "a", "b", "c", "buy", "$15K"]),
            row(&["too", "short"]),
        ]);

        let records = extract_trades(&html).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ticker, "MSFT");
    }

    #[test]
    fn test_rows_with_extra_columns_still_map() {
        let html = table_doc(&[row(&["GOOG", "d1", "d2", "owner", "sell", "$50K", "extra", "more"])]);

        let records = extract_trades(&html).unwrap();
        assert_eq!(records[0].ticker, "GOOG");
        assert_eq!(records[0].price, "$50K");
    }

    #[test]
    fn test_row_order_is_preserved() {
        let html = table_doc(&[
            row(&["AAA", "1", "2", "3", "buy", "$1"]),
            row(&["BBB", "1", "2", "3", "sell", "$2"]),
            row(&["CCC", "1", "2", "3", "buy", "$3"]),
        ]);

        let tickers: Vec<String> = extract_trades(&html)
            .unwrap()
            .into_iter()
            .map(|r| r.ticker)
            .collect();
        assert_eq!(tickers, vec!["AAA", "BBB", "CCC"]);
    }

    #[test]
    fn test_table_without_explicit_tbody() {
        // The HTML parser inserts an implicit tbody around bare rows
        let html = "<html><body><table>\
            <tr><td>TSLA</td><td>d1</td><td>d2</td><td>x</td><td>buy</td><td>$10K</td></tr>\
            </table></body></html>";

        let records = extract_trades(html).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ticker, "TSLA");
    }

    #[test]
    fn test_empty_table_yields_no_records() {
        let html = table_doc(&[]);
        assert!(extract_trades(&html).unwrap().is_empty());
    }

    #[test]
    fn test_cell_text_is_trimmed_and_joined() {
        let html = "<html><body><table><tbody><tr>\
            <td> <span>NVDA</span> <span>NVIDIA Corp</span> </td>\
            <td>d1</td><td>d2</td><td>x</td><td> buy </td><td>$1K</td>\
            </tr></tbody></table></body></html>";

        let records = extract_trades(html).unwrap();
        assert_eq!(records[0].ticker, "NVDA NVIDIA Corp");
        assert_eq!(records[0].action, "buy");
    }

    #[test]
    fn test_only_first_table_is_read() {
        let html = format!(
            "<html><body>\
             <table><tbody>{}</tbody></table>\
             <table><tbody>{}</tbody></table>\
             </body></html>",
            row(&["FIRST", "1", "2", "3", "buy", "$1"]),
            row(&["SECOND", "1", "2", "3", "sell", "$2"]),
        );

        let records = extract_trades(&html).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ticker, "FIRST");
    }
}
