//! Summary statistics and ranked breakdowns over a record subset.
//!
//! All functions here work on whatever slice they are given (the full set
//! or the currently filtered set); the store decides which subset applies.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Default number of entries in ranked breakdowns.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Summary statistics for a record subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of advisories in the subset
    pub total_count: usize,
    /// Distinct vendor names, after splitting comma-joined fields
    pub distinct_vendor_count: usize,
    /// Distinct product values (the product field is a single value and
    /// is deliberately not split, unlike vendors)
    pub distinct_product_count: usize,
}

/// One entry in a ranked country breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    /// Trimmed country name
    pub country: String,
    /// Number of advisories headquartered there
    pub count: usize,
}

/// Compute the statistics triple for a subset.
pub fn summarize(records: &[Record]) -> Statistics {
    let mut vendors = HashSet::new();
    let mut products = HashSet::new();

    for record in records {
        if !record.vendor.trim().is_empty() {
            for vendor in record.split_vendors() {
                vendors.insert(vendor);
            }
        }
        let product = record.product.trim();
        if !product.is_empty() {
            products.insert(product);
        }
    }

    Statistics {
        total_count: records.len(),
        distinct_vendor_count: vendors.len(),
        distinct_product_count: products.len(),
    }
}

/// Rank countries by advisory count, descending, truncated to `limit`.
///
/// Blank country fields are skipped; values are trimmed before counting.
/// The sort is stable, so countries with equal counts keep their
/// first-encounter order from the input. That tie-break rule is part of
/// the contract and is pinned by tests.
pub fn top_by_country(records: &[Record], limit: usize) -> Vec<CountryCount> {
    let mut counts: Vec<CountryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let country = record.headquarters_country.trim();
        if country.is_empty() {
            continue;
        }
        match index.get(country) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(country.to_string(), counts.len());
                counts.push(CountryCount {
                    country: country.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}
