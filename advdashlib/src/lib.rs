//! # advdashlib
//!
//! Core data pipeline for the ICS advisory dashboard: load a CSV export of
//! ICS-CERT security advisories, then browse it through filters, summary
//! statistics, a ranked country breakdown, and pagination.
//!
//! ## Overview
//!
//! The pipeline is:
//!
//! 1. [`parser`] — raw delimited text to typed [`Record`]s, defensively
//!    (malformed lines become warnings, never failures), with a primary
//!    csv-crate backend and a built-in minimal fallback tokenizer.
//! 2. [`store`] — the full record set plus the currently filtered subset;
//!    filter changes rebuild the subset wholesale and reset pagination.
//! 3. [`aggregate`] — the statistics triple and the top-countries ranking
//!    over whichever subset is passed in.
//! 4. [`page`] — bounded page slices and page info, clamped at the bounds.
//! 5. [`output`] — presentation-ready tables, chart geometry, and the JSON
//!    report payload. Pure formatting, no rendering dependency.
//!
//! ## Example
//!
//! ```rust
//! use advdashlib::{parse, Dataset, FilterCriteria, summarize, top_by_country};
//!
//! let raw = "\
//! ICS-CERT_Number,Vendor,Company_Headquarters
//! ICSA-21-119-04,Siemens,Germany
//! ICSA-21-119-05,\"Acme, Globex\",US
//! ";
//!
//! let parsed = parse(raw);
//! assert!(parsed.warnings.is_empty());
//!
//! let mut store = Dataset::new();
//! store.load(parsed.records);
//!
//! let stats = summarize(store.filtered());
//! assert_eq!(stats.total_count, 2);
//! assert_eq!(stats.distinct_vendor_count, 3); // Siemens, Acme, Globex
//!
//! store.apply_filter(FilterCriteria::none().country("Germany"));
//! assert_eq!(store.filtered().len(), 1);
//!
//! let top = top_by_country(store.filtered(), 10);
//! assert_eq!(top[0].country, "Germany");
//! ```

pub mod aggregate;
pub mod error;
pub mod output;
pub mod page;
pub mod parser;
pub mod record;
pub mod store;

pub use aggregate::{summarize, top_by_country, CountryCount, Statistics, DEFAULT_TOP_LIMIT};
pub use error::AdvdashError;
pub use output::{
    format_thousands, table::escape_html, AdvisoryTable, ChartBar, CountryChart, DashboardReport,
};
pub use page::{page, page_info, PageInfo, PageState, DEFAULT_PAGE_SIZE};
pub use parser::{
    detect_backend, parse, parse_file, parse_with, FallbackBackend, ParseOutput, ParseWarning,
    ParserBackend,
};
pub use record::{FilterCriteria, Record};
pub use store::{Dataset, StoreObserver};

#[cfg(feature = "csv-backend")]
pub use parser::CsvBackend;

/// Result type for advdashlib operations
pub type Result<T> = std::result::Result<T, AdvdashError>;
