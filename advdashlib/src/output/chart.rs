//! Bar-chart geometry for the country breakdown.
//!
//! The chart layer computes bar widths only; whether bars are drawn with
//! color, plain ASCII, or HTML is the renderer's concern.

use serde::{Deserialize, Serialize};

use crate::aggregate::CountryCount;

/// One horizontal bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    /// Bar label (country name)
    pub label: String,
    /// Advisory count for this country
    pub count: usize,
    /// Bar width in cells, scaled so the largest count fills the chart
    pub width: usize,
}

/// A ranked horizontal bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryChart {
    /// Bars, largest first
    pub bars: Vec<ChartBar>,
    /// Drawing width the bars were scaled to
    pub max_width: usize,
}

impl CountryChart {
    /// Scale ranked counts to a drawing width.
    ///
    /// The largest count maps to `max_width` cells; every non-zero count
    /// gets at least one cell so short bars stay visible.
    pub fn from_counts(counts: &[CountryCount], max_width: usize) -> Self {
        let max_count = counts.iter().map(|c| c.count).max().unwrap_or(0);

        let bars = counts
            .iter()
            .map(|c| ChartBar {
                label: c.country.clone(),
                count: c.count,
                width: scale(c.count, max_count, max_width),
            })
            .collect();

        CountryChart { bars, max_width }
    }

    /// Whether there is anything to draw.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Widest label, for renderer alignment.
    pub fn label_width(&self) -> usize {
        self.bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or(0)
    }
}

fn scale(count: usize, max_count: usize, max_width: usize) -> usize {
    if count == 0 || max_count == 0 || max_width == 0 {
        return 0;
    }
    ((count * max_width) / max_count).max(1)
}
