//! Core data model: advisory records and filter criteria.

use serde::{Deserialize, Serialize};

/// Source column name for the advisory identifier.
pub const COL_ADVISORY_ID: &str = "ICS-CERT_Number";
/// Source column name for the release date.
pub const COL_RELEASE_DATE: &str = "Original_Release_Date";
/// Source column name for the advisory title.
pub const COL_TITLE: &str = "ICS-CERT_Advisory_Title";
/// Source column name for the vendor list.
pub const COL_VENDOR: &str = "Vendor";
/// Source column name for the product.
pub const COL_PRODUCT: &str = "Product";
/// Source column name for the vendor headquarters country.
pub const COL_COUNTRY: &str = "Company_Headquarters";
/// Source column name for the CVE number.
pub const COL_CVE: &str = "CVE_Number";
/// Source column name for the CVSS severity.
pub const COL_SEVERITY: &str = "CVSS_Severity";

/// The expected source columns, in display order.
pub const EXPECTED_COLUMNS: [&str; 8] = [
    COL_ADVISORY_ID,
    COL_RELEASE_DATE,
    COL_TITLE,
    COL_VENDOR,
    COL_PRODUCT,
    COL_COUNTRY,
    COL_CVE,
    COL_SEVERITY,
];

/// Human-readable headers for the 8 display fields, in the same order
/// as [`EXPECTED_COLUMNS`].
pub const DISPLAY_HEADERS: [&str; 8] = [
    "Advisory",
    "Released",
    "Title",
    "Vendor",
    "Product",
    "Headquarters",
    "CVE",
    "Severity",
];

/// One published ICS security advisory.
///
/// All fields are kept as raw text from the source file; nothing is
/// date-parsed or normalized beyond what the parser strips (quotes,
/// surrounding whitespace in fallback mode). The `vendor` field is a
/// display string that may hold a comma-separated list of vendor names;
/// see [`Record::split_vendors`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Advisory identifier (e.g. "ICSA-21-119-04"); blank means the row
    /// is not part of the dataset
    pub advisory_id: String,
    /// Original release date, verbatim from the source
    pub release_date: String,
    /// Advisory title
    pub title: String,
    /// Vendor name, possibly a comma-separated list of names
    pub vendor: String,
    /// Affected product
    pub product: String,
    /// Country of the vendor's headquarters
    pub headquarters_country: String,
    /// Associated CVE number(s)
    pub cve_number: String,
    /// CVSS severity label
    pub severity: String,
}

impl Record {
    /// A record belongs to the dataset only if its advisory id is
    /// non-blank after trimming. Rows without an id are treated as
    /// intentionally absent data, not as errors.
    pub fn is_valid(&self) -> bool {
        !self.advisory_id.trim().is_empty()
    }

    /// Split the vendor field into individual vendor names.
    ///
    /// The field is semantically a set: aggregations split on comma and
    /// trim each part. Tokens are yielded as-is after trimming; an empty
    /// token from a stray comma is still a token.
    pub fn split_vendors(&self) -> impl Iterator<Item = &str> {
        self.vendor.split(',').map(str::trim)
    }

    /// The 8 display fields in table column order.
    pub fn display_fields(&self) -> [&str; 8] {
        [
            &self.advisory_id,
            &self.release_date,
            &self.title,
            &self.vendor,
            &self.product,
            &self.headquarters_country,
            &self.cve_number,
            &self.severity,
        ]
    }
}

/// Filter criteria for the dataset. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the raw vendor field
    pub vendor: String,
    /// Case-insensitive substring match against the advisory id
    pub advisory_id: String,
    /// Exact, case-sensitive match against the headquarters country
    pub country: String,
}

impl FilterCriteria {
    /// Criteria with no constraints (matches every record).
    pub fn none() -> Self {
        Self::default()
    }

    /// Builder: set the vendor substring.
    pub fn vendor(mut self, substring: impl Into<String>) -> Self {
        self.vendor = substring.into();
        self
    }

    /// Builder: set the advisory id substring.
    pub fn advisory_id(mut self, substring: impl Into<String>) -> Self {
        self.advisory_id = substring.into();
        self
    }

    /// Builder: set the exact country.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// True if no constraint is active.
    pub fn is_empty(&self) -> bool {
        self.vendor.is_empty() && self.advisory_id.is_empty() && self.country.is_empty()
    }

    /// Whether a record satisfies every active constraint.
    ///
    /// The vendor test runs against the raw comma-joined field, not the
    /// split vendor names, so it differs from how vendors are *counted*
    /// (see [`crate::aggregate`]): a record can match on a substring that
    /// spans two vendor names.
    pub fn matches(&self, record: &Record) -> bool {
        if !self.vendor.is_empty()
            && !record
                .vendor
                .to_lowercase()
                .contains(&self.vendor.to_lowercase())
        {
            return false;
        }

        if !self.advisory_id.is_empty()
            && !record
                .advisory_id
                .to_lowercase()
                .contains(&self.advisory_id.to_lowercase())
        {
            return false;
        }

        if !self.country.is_empty() && record.headquarters_country != self.country {
            return false;
        }

        true
    }
}
