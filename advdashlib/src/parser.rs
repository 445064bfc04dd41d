//! Delimited-text parsing for advisory records.
//!
//! This module converts raw CSV text into an ordered sequence of typed
//! [`Record`]s. Parsing is defensive: a malformed line never aborts the
//! parse. Problems are collected as [`ParseWarning`]s and parsing continues
//! with the remaining lines.
//!
//! Two interchangeable tokenizer backends sit behind the [`ParserBackend`]
//! trait:
//!
//! - [`CsvBackend`] (behind the default `csv-backend` feature): the full
//!   csv crate, with quoted fields, escaped quotes and embedded newlines.
//! - [`FallbackBackend`]: a minimal tokenizer that splits on newlines and
//!   tracks quote state character by character. It does not support
//!   escaped quotes or newlines inside fields, which is acceptable for the
//!   advisory export format.
//!
//! The backend is resolved once per session via [`detect_backend`]; both
//! backends produce records with the same field contract.

use std::fs;
use std::mem;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AdvdashError;
use crate::record::{
    Record, COL_ADVISORY_ID, COL_COUNTRY, COL_CVE, COL_PRODUCT, COL_RELEASE_DATE, COL_SEVERITY,
    COL_TITLE, COL_VENDOR,
};
use crate::Result;

/// A recoverable problem found while tokenizing the source text.
///
/// Warnings are diagnostics only: they are never surfaced to the user and
/// never abort the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// 1-based line number in the source text (0 when unknown)
    pub line: usize,
    /// Human-readable description of the problem
    pub message: String,
}

/// Result of parsing the source text.
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    /// Valid records, in source order
    pub records: Vec<Record>,
    /// Recoverable problems encountered along the way
    pub warnings: Vec<ParseWarning>,
}

/// A tokenizer that turns raw delimited text into rows of fields.
///
/// The first produced row is the header row. Blank lines produce no row.
pub trait ParserBackend {
    /// Backend name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Tokenize the raw text into rows of field values.
    fn rows(&self, raw: &str) -> (Vec<Vec<String>>, Vec<ParseWarning>);
}

/// Primary tokenizer built on the csv crate.
#[cfg(feature = "csv-backend")]
#[derive(Debug, Default)]
pub struct CsvBackend;

#[cfg(feature = "csv-backend")]
impl ParserBackend for CsvBackend {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn rows(&self, raw: &str) -> (Vec<Vec<String>>, Vec<ParseWarning>) {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(raw.as_bytes());

        let mut rows = Vec::new();
        let mut warnings = Vec::new();

        for result in reader.records() {
            match result {
                Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
                Err(err) => {
                    let line = err
                        .position()
                        .map(|p| p.line() as usize)
                        .unwrap_or_default();
                    warnings.push(ParseWarning {
                        line,
                        message: err.to_string(),
                    });
                }
            }
        }

        (rows, warnings)
    }
}

/// Minimal fallback tokenizer.
///
/// Splits on newlines and walks each line character by character, toggling
/// quote state to decide whether a comma is a delimiter or literal. Quote
/// characters are stripped and field values trimmed. A line that ends
/// inside a quoted field is closed implicitly and reported as a warning.
#[derive(Debug, Default)]
pub struct FallbackBackend;

impl ParserBackend for FallbackBackend {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn rows(&self, raw: &str) -> (Vec<Vec<String>>, Vec<ParseWarning>) {
        let mut rows = Vec::new();
        let mut warnings = Vec::new();

        for (index, line) in raw.split('\n').enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let (fields, balanced) = split_line(line);
            if !balanced {
                warnings.push(ParseWarning {
                    line: index + 1,
                    message: "unbalanced quote, field closed at end of line".to_string(),
                });
            }
            rows.push(fields);
        }

        (rows, warnings)
    }
}

/// Split a single line into fields, honoring double-quoted sections.
///
/// Returns the fields and whether the quote state was balanced at the end
/// of the line.
fn split_line(line: &str) -> (Vec<String>, bool) {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                let field = mem::take(&mut current);
                fields.push(field.trim().to_string());
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    (fields, !in_quotes)
}

/// Resolve the tokenizer backend for this session.
///
/// Resolution happens once; there is no mid-session re-probe. With the
/// default `csv-backend` feature the csv crate is used, otherwise the
/// built-in fallback tokenizer.
pub fn detect_backend() -> Box<dyn ParserBackend> {
    #[cfg(feature = "csv-backend")]
    {
        Box::new(CsvBackend)
    }
    #[cfg(not(feature = "csv-backend"))]
    {
        Box::new(FallbackBackend)
    }
}

/// Positions of the expected columns within the header row.
///
/// Header names are trimmed and matched case-sensitively. Unmapped source
/// columns are ignored; a missing expected column yields empty values for
/// that field in every record rather than an error.
#[derive(Debug, Default)]
struct ColumnMap {
    advisory_id: Option<usize>,
    release_date: Option<usize>,
    title: Option<usize>,
    vendor: Option<usize>,
    product: Option<usize>,
    country: Option<usize>,
    cve_number: Option<usize>,
    severity: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &[String]) -> Self {
        let find = |name: &str| header.iter().position(|h| h.trim() == name);

        Self {
            advisory_id: find(COL_ADVISORY_ID),
            release_date: find(COL_RELEASE_DATE),
            title: find(COL_TITLE),
            vendor: find(COL_VENDOR),
            product: find(COL_PRODUCT),
            country: find(COL_COUNTRY),
            cve_number: find(COL_CVE),
            severity: find(COL_SEVERITY),
        }
    }

    fn record_from_row(&self, row: &[String]) -> Record {
        let field =
            |index: Option<usize>| index.and_then(|i| row.get(i)).cloned().unwrap_or_default();

        Record {
            advisory_id: field(self.advisory_id),
            release_date: field(self.release_date),
            title: field(self.title),
            vendor: field(self.vendor),
            product: field(self.product),
            headquarters_country: field(self.country),
            cve_number: field(self.cve_number),
            severity: field(self.severity),
        }
    }
}

/// Parse raw delimited text with the session backend.
///
/// The first line is the header. Rows whose advisory id is blank are
/// silently excluded from the result (they are intentionally absent data,
/// not errors).
pub fn parse(raw: &str) -> ParseOutput {
    parse_with(detect_backend().as_ref(), raw)
}

/// Parse raw delimited text with an explicit backend.
pub fn parse_with(backend: &dyn ParserBackend, raw: &str) -> ParseOutput {
    let (rows, warnings) = backend.rows(raw);
    let mut rows = rows.into_iter();

    let header = match rows.next() {
        Some(header) => header,
        None => return ParseOutput { warnings, ..Default::default() },
    };
    let columns = ColumnMap::from_header(&header);

    let mut records = Vec::new();
    for row in rows {
        if row.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let record = columns.record_from_row(&row);
        if record.is_valid() {
            records.push(record);
        }
    }

    ParseOutput { records, warnings }
}

/// Read and parse a source file.
///
/// A read failure is the one fatal error class: callers should surface it
/// and render nothing else.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ParseOutput> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| AdvdashError::SourceRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse(&raw))
}
