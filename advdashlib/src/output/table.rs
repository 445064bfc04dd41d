//! Table-ready view of one page of records.

use serde::{Deserialize, Serialize};

use crate::page::PageInfo;
use crate::record::{Record, DISPLAY_HEADERS};

use super::format_thousands;

/// One page of advisories, formatted as display strings.
///
/// Row values line up with `headers`; `footer` carries the results
/// summary ("Showing X-Y of Z results"), or the explicit no-results /
/// no-data message when the page is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryTable {
    /// Column headers for the 8 display fields
    pub headers: Vec<String>,
    /// One row per record on the current page
    pub rows: Vec<Vec<String>>,
    /// Results summary line
    pub footer: String,
}

impl AdvisoryTable {
    /// Build the table for one page of the filtered subset.
    pub fn from_page(records: &[Record], info: &PageInfo) -> Self {
        let headers = DISPLAY_HEADERS.iter().map(|h| h.to_string()).collect();
        let rows = records
            .iter()
            .map(|r| r.display_fields().iter().map(|f| f.to_string()).collect())
            .collect();

        AdvisoryTable {
            headers,
            rows,
            footer: footer_for(info),
        }
    }

    /// Whether this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn footer_for(info: &PageInfo) -> String {
    if info.total_records == 0 {
        "No results found".to_string()
    } else if info.first_item == 0 {
        // Non-empty set but the requested page is past the end.
        format!("No data on page {}", info.current_page)
    } else {
        format!(
            "Showing {}-{} of {} results",
            info.first_item,
            info.last_item,
            format_thousands(info.total_records)
        )
    }
}

/// Escape a value for embedding in HTML text or attribute context.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::page_info;

    fn record(id: &str, title: &str) -> Record {
        Record {
            advisory_id: id.to_string(),
            title: title.to_string(),
            ..Record::default()
        }
    }

    #[test]
    fn test_table_rows_follow_display_order() {
        let records = vec![record("ICSA-1", "First"), record("ICSA-2", "Second")];
        let table = AdvisoryTable::from_page(&records, &page_info(2, 50, 1));

        assert_eq!(table.headers.len(), 8);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "ICSA-1");
        assert_eq!(table.rows[0][2], "First");
        assert_eq!(table.rows[1][0], "ICSA-2");
    }

    #[test]
    fn test_footer_shows_item_range() {
        let table = AdvisoryTable::from_page(&[], &page_info(2539, 50, 2));
        assert_eq!(table.footer, "Showing 51-100 of 2,539 results");
    }

    #[test]
    fn test_footer_no_results_state() {
        let table = AdvisoryTable::from_page(&[], &page_info(0, 50, 1));
        assert!(table.is_empty());
        assert_eq!(table.footer, "No results found");
    }

    #[test]
    fn test_footer_past_the_end() {
        let table = AdvisoryTable::from_page(&[], &page_info(10, 50, 4));
        assert_eq!(table.footer, "No data on page 4");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert(\"x\")</script> & 'more'"),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;more&#39;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
