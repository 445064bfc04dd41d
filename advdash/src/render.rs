//! Terminal and HTML rendering for the dashboard report.
//!
//! Everything here consumes the presentation-ready structures from
//! advdashlib and turns them into final output strings. The chart has two
//! renditions: styled block bars when the terminal supports color, plain
//! ASCII otherwise. The choice is made once per run and never re-probed.

use std::collections::BTreeSet;

use advdashlib::{escape_html, format_thousands, AdvisoryTable, CountryChart, DashboardReport};
use console::Style;

/// Per-column display caps for the advisory table, in field order.
/// Columns narrower than the cap shrink to their content.
const COLUMN_CAPS: [usize; 8] = [16, 12, 44, 24, 24, 16, 18, 10];

/// Whether the attached terminal can take styled output.
pub fn terminal_supports_color() -> bool {
    console::Term::stdout().features().colors_supported()
}

/// Render the full text dashboard: statistics, chart, table, footer.
pub fn render_dashboard(report: &DashboardReport, styled: bool) -> String {
    let mut out = String::new();

    let stats = &report.statistics;
    out.push_str(&format!(
        "Total advisories   {}\n",
        format_thousands(stats.total_count)
    ));
    out.push_str(&format!(
        "Distinct vendors   {}\n",
        format_thousands(stats.distinct_vendor_count)
    ));
    out.push_str(&format!(
        "Distinct products  {}\n",
        format_thousands(stats.distinct_product_count)
    ));
    out.push('\n');

    if !report.chart.is_empty() {
        out.push_str("Top countries by advisory count\n");
        out.push_str(&render_chart(&report.chart, styled));
        out.push('\n');
    }

    out.push_str(&render_table(&report.table));

    let info = &report.page;
    if info.total_pages > 1 {
        out.push_str(&format!(
            "{} (page {} of {})\n",
            report.table.footer, info.current_page, info.total_pages
        ));
    } else {
        out.push_str(&format!("{}\n", report.table.footer));
    }

    out
}

/// Render the country chart as horizontal bars.
fn render_chart(chart: &CountryChart, styled: bool) -> String {
    let label_width = chart.label_width();
    let bar_style = Style::new().cyan();
    let mut out = String::new();

    for bar in &chart.bars {
        let glyphs = if styled { "\u{2588}" } else { "#" }.repeat(bar.width);
        let painted = if styled {
            bar_style.apply_to(glyphs).to_string()
        } else {
            glyphs
        };
        out.push_str(&format!(
            "{:<label_width$}  {} {}\n",
            bar.label,
            painted,
            format_thousands(bar.count)
        ));
    }

    out
}

/// Render the advisory table with fixed-width columns.
///
/// The footer line is appended by the caller so page info can be folded
/// in; an empty page renders nothing here and leaves the no-results
/// message to the footer.
fn render_table(table: &AdvisoryTable) -> String {
    if table.rows.is_empty() {
        return String::new();
    }

    let widths = column_widths(table);
    let mut out = String::new();

    let header: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<width$}", h, width = *w))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    let total_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total_width));
    out.push('\n');

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(value, w)| format!("{:<width$}", truncate_value(value, *w), width = *w))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out
}

/// Column widths: each column fits its widest value, capped per column
/// and never narrower than its header.
fn column_widths(table: &AdvisoryTable) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let widest = table
                .rows
                .iter()
                .map(|row| row.get(i).map(|v| v.chars().count()).unwrap_or(0))
                .max()
                .unwrap_or(0);
            widest.min(COLUMN_CAPS[i]).max(header.chars().count())
        })
        .collect()
}

/// Truncate a value to fit within max_len, adding a ".." suffix if needed.
fn truncate_value(value: &str, max_len: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= max_len {
        return value.to_string();
    }
    let kept: String = chars[..max_len.saturating_sub(2)].iter().collect();
    format!("{kept}..")
}

/// Render the report as an HTML table fragment with escaped cells.
pub fn render_html(report: &DashboardReport) -> String {
    let table = &report.table;
    let mut out = String::from("<table>\n<thead>\n<tr>");

    for header in &table.headers {
        out.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    if table.rows.is_empty() {
        out.push_str(&format!(
            "<tr><td colspan=\"{}\">{}</td></tr>\n",
            table.headers.len(),
            escape_html(&table.footer)
        ));
    } else {
        for row in &table.rows {
            out.push_str("<tr>");
            for value in row {
                out.push_str(&format!("<td>{}</td>", escape_html(value)));
            }
            out.push_str("</tr>\n");
        }
    }

    out.push_str("</tbody>\n</table>\n");
    out.push_str(&format!("<p>{}</p>\n", escape_html(&table.footer)));
    out
}

/// Render a selection list (vendors or countries), one entry per line.
pub fn render_list(entries: BTreeSet<String>) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use advdashlib::{page_info, CountryCount, Record, Statistics};

    fn sample_report(rows: usize) -> DashboardReport {
        let records: Vec<Record> = (0..rows)
            .map(|i| Record {
                advisory_id: format!("ICSA-21-00{i}"),
                release_date: "2021-04-29".to_string(),
                title: "A very long advisory title that keeps going well past the cap".to_string(),
                vendor: "Siemens".to_string(),
                product: "Nucleus".to_string(),
                headquarters_country: "Germany".to_string(),
                cve_number: "CVE-2021-22156".to_string(),
                severity: "Critical".to_string(),
            })
            .collect();
        let info = page_info(rows, 50, 1);
        let counts = vec![CountryCount {
            country: "Germany".to_string(),
            count: rows,
        }];

        DashboardReport {
            statistics: Statistics {
                total_count: rows,
                distinct_vendor_count: 1,
                distinct_product_count: 1,
            },
            chart: CountryChart::from_counts(&counts, 40),
            table: AdvisoryTable::from_page(&records, &info),
            page: info,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_truncate_value() {
        assert_eq!(truncate_value("short", 10), "short");
        assert_eq!(truncate_value("exactly-ten", 11), "exactly-ten");
        assert_eq!(truncate_value("much too long for this", 10), "much too..");
    }

    #[test]
    fn test_truncate_value_is_char_safe() {
        assert_eq!(truncate_value("Müller Industries GmbH", 10), "Müller I..");
    }

    #[test]
    fn test_plain_chart_uses_ascii_bars() {
        let report = sample_report(3);
        let out = render_dashboard(&report, false);

        assert!(out.contains("Top countries by advisory count"));
        assert!(out.contains('#'));
        assert!(!out.contains('\u{2588}'));
    }

    #[test]
    fn test_dashboard_contains_stats_and_footer() {
        let report = sample_report(2);
        let out = render_dashboard(&report, false);

        assert!(out.contains("Total advisories   2"));
        assert!(out.contains("Distinct vendors   1"));
        assert!(out.contains("Showing 1-2 of 2 results"));
    }

    #[test]
    fn test_empty_report_renders_no_results_state() {
        let report = sample_report(0);
        let out = render_dashboard(&report, false);

        assert!(out.contains("No results found"));
        assert!(!out.contains("Advisory  "));
    }

    #[test]
    fn test_table_truncates_long_titles() {
        let report = sample_report(1);
        let out = render_dashboard(&report, false);
        assert!(out.contains(".."));
    }

    #[test]
    fn test_html_output_is_escaped() {
        let mut report = sample_report(1);
        report.table.rows[0][2] = "<b>Bold & \"quoted\"</b>".to_string();
        let out = render_html(&report);

        assert!(out.contains("&lt;b&gt;Bold &amp; &quot;quoted&quot;&lt;/b&gt;"));
        assert!(!out.contains("<b>"));
    }

    #[test]
    fn test_html_no_results_row_spans_all_columns() {
        let report = sample_report(0);
        let out = render_html(&report);

        assert!(out.contains("colspan=\"8\""));
        assert!(out.contains("No results found"));
    }

    #[test]
    fn test_render_list() {
        let entries: BTreeSet<String> =
            ["Siemens", "Acme"].iter().map(|s| s.to_string()).collect();
        assert_eq!(render_list(entries), "Acme\nSiemens\n");
    }
}
