//! Presentation-ready data structures.
//!
//! This layer is pure formatting: it turns records, statistics and page
//! state into display-ready strings and chart geometry. No filtering,
//! sorting, or counting happens here; all computation lives in the
//! store/aggregate/page layers. Renderers (terminal, JSON, HTML) consume
//! these structures without touching the core.

pub mod chart;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::aggregate::Statistics;
use crate::page::PageInfo;
use crate::parser::ParseWarning;

pub use chart::{ChartBar, CountryChart};
pub use table::AdvisoryTable;

/// Format a count with grouped thousands separators.
///
/// The grouping character is a fixed comma, independent of locale.
pub fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The complete dashboard payload for one render pass.
///
/// This is what the JSON output mode serializes: the statistics triple,
/// the ranked country chart, the current page as a table, page info, and
/// any parse warnings collected at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Statistics over the filtered subset
    pub statistics: Statistics,
    /// Top countries by advisory count
    pub chart: CountryChart,
    /// Current page, formatted for display
    pub table: AdvisoryTable,
    /// Pagination state for the filtered subset
    pub page: PageInfo,
    /// Diagnostics collected while parsing the source
    pub warnings: Vec<ParseWarning>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(2539), "2,539");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_report_serializes_with_stable_keys() {
        use crate::page::page_info;

        let report = DashboardReport {
            statistics: Statistics::default(),
            chart: CountryChart::from_counts(&[], 30),
            table: AdvisoryTable::from_page(&[], &page_info(0, 50, 1)),
            page: page_info(0, 50, 1),
            warnings: Vec::new(),
        };

        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("statistics").is_some());
        assert!(value.get("chart").is_some());
        assert!(value.get("table").is_some());
        assert!(value.get("page").is_some());
        assert_eq!(value["table"]["footer"], "No results found");
    }
}
