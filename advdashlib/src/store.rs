//! The dataset store: full record set, filtered subset, and pagination
//! state.
//!
//! The full set is immutable after [`Dataset::load`]. The filtered subset
//! is never mutated in place; every filter change rebuilds it wholesale
//! and resets pagination to the first page, so consumers always observe a
//! consistent snapshot. Presentation code attaches through the
//! [`StoreObserver`] contract and receives read-only snapshots; the store
//! itself has zero rendering dependencies.

use std::collections::BTreeSet;

use crate::page::{self, PageInfo, PageState};
use crate::record::{FilterCriteria, Record};

/// Subscriber to filtered-set changes.
///
/// Observers are notified after every [`Dataset::apply_filter`] with a
/// snapshot of the new filtered subset.
pub trait StoreObserver {
    /// Called when the filtered subset has been replaced.
    fn filtered_changed(&mut self, snapshot: &[Record]);
}

/// In-memory store for the advisory dataset.
#[derive(Default)]
pub struct Dataset {
    full: Vec<Record>,
    filtered: Vec<Record>,
    criteria: FilterCriteria,
    page: PageState,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl std::fmt::Debug for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dataset")
            .field("full", &self.full.len())
            .field("filtered", &self.filtered.len())
            .field("criteria", &self.criteria)
            .field("page", &self.page)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Dataset {
    /// Create an empty store with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with a custom page size.
    pub fn with_page_size(size: usize) -> crate::Result<Self> {
        Ok(Self {
            page: PageState::new(size)?,
            ..Self::default()
        })
    }

    /// Load the full record set.
    ///
    /// The filtered subset starts as an independent copy of the full set,
    /// in source order. Loading an empty sequence is valid and yields an
    /// empty dataset, not an error; downstream consumers render an
    /// explicit no-data state.
    pub fn load(&mut self, records: Vec<Record>) {
        self.filtered = records.clone();
        self.full = records;
        self.criteria = FilterCriteria::none();
        self.page.reset();
    }

    /// The full record set, in source order.
    pub fn full(&self) -> &[Record] {
        &self.full
    }

    /// The currently filtered subset, in source order.
    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    /// The active filter criteria.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Recompute the filtered subset for new criteria.
    ///
    /// Filtering is stable: records keep their relative order from the
    /// full set. Pagination resets to page 1 and observers are notified
    /// with the new snapshot.
    pub fn apply_filter(&mut self, criteria: FilterCriteria) -> &[Record] {
        self.filtered = self
            .full
            .iter()
            .filter(|r| criteria.matches(r))
            .cloned()
            .collect();
        self.criteria = criteria;
        self.page.reset();

        let mut observers = std::mem::take(&mut self.observers);
        for observer in &mut observers {
            observer.filtered_changed(&self.filtered);
        }
        self.observers = observers;

        &self.filtered
    }

    /// Register an observer for filtered-set changes.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// Distinct vendor names over the FULL set, sorted.
    ///
    /// Vendor fields are split on comma and trimmed; the result is used to
    /// populate the vendor selection control, independent of the current
    /// filter.
    pub fn distinct_vendors(&self) -> BTreeSet<String> {
        let mut vendors = BTreeSet::new();
        for record in &self.full {
            if record.vendor.trim().is_empty() {
                continue;
            }
            for vendor in record.split_vendors() {
                vendors.insert(vendor.to_string());
            }
        }
        vendors
    }

    /// Distinct non-empty country values over the FULL set, sorted.
    pub fn distinct_countries(&self) -> BTreeSet<String> {
        self.full
            .iter()
            .map(|r| r.headquarters_country.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// The records on the current page of the filtered subset.
    pub fn current_page(&self) -> &[Record] {
        page::page(&self.filtered, self.page.size, self.page.current)
    }

    /// Page information for the current state.
    pub fn page_info(&self) -> PageInfo {
        self.page.info(self.filtered.len())
    }

    /// Jump to a page (clamped by slicing; out-of-range pages are empty).
    pub fn goto_page(&mut self, index: usize) {
        self.page.current = index.max(1);
    }

    /// Advance one page; a no-op at the last page.
    pub fn next_page(&mut self) -> bool {
        self.page.next(self.filtered.len())
    }

    /// Go back one page; a no-op at the first page.
    pub fn previous_page(&mut self) -> bool {
        self.page.previous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record(id: &str, vendor: &str, country: &str) -> Record {
        Record {
            advisory_id: id.to_string(),
            vendor: vendor.to_string(),
            headquarters_country: country.to_string(),
            ..Record::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("ICSA-1", "Siemens", "Germany"),
            record("ICSA-2", "Acme, Globex", "US"),
            record("ICSA-3", "Schneider Electric", "France"),
            record("ICSA-4", "Siemens Energy", "germany"),
        ]
    }

    #[test]
    fn test_load_copies_full_set_into_filtered() {
        let mut store = Dataset::new();
        store.load(sample());

        assert_eq!(store.full().len(), 4);
        assert_eq!(store.filtered().len(), 4);
        assert_eq!(store.full(), store.filtered());
    }

    #[test]
    fn test_load_empty_input_yields_empty_dataset() {
        let mut store = Dataset::new();
        store.load(Vec::new());

        assert!(store.full().is_empty());
        assert!(store.filtered().is_empty());
        assert_eq!(store.page_info().total_pages, 0);
    }

    #[test]
    fn test_filter_is_stable_and_preserves_order() {
        let mut store = Dataset::new();
        store.load(sample());

        let filtered = store.apply_filter(FilterCriteria::none().vendor("siemens"));
        let ids: Vec<&str> = filtered.iter().map(|r| r.advisory_id.as_str()).collect();
        assert_eq!(ids, vec!["ICSA-1", "ICSA-4"]);
    }

    #[test]
    fn test_country_filter_is_case_sensitive() {
        let mut store = Dataset::new();
        store.load(sample());

        let filtered = store.apply_filter(FilterCriteria::none().country("Germany"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].advisory_id, "ICSA-1");
    }

    #[test]
    fn test_filter_matching_nothing_is_not_an_error() {
        let mut store = Dataset::new();
        store.load(sample());

        let filtered = store.apply_filter(FilterCriteria::none().vendor("nonexistent"));
        assert!(filtered.is_empty());
        assert_eq!(store.page_info().total_pages, 0);
    }

    #[test]
    fn test_filter_change_resets_pagination() {
        let mut store = Dataset::with_page_size(2).unwrap();
        store.load(sample());
        store.next_page();
        assert_eq!(store.page_info().current_page, 2);

        store.apply_filter(FilterCriteria::none());
        assert_eq!(store.page_info().current_page, 1);
    }

    #[test]
    fn test_filter_does_not_touch_full_set() {
        let mut store = Dataset::new();
        store.load(sample());
        store.apply_filter(FilterCriteria::none().country("US"));

        assert_eq!(store.full().len(), 4);
        assert_eq!(store.filtered().len(), 1);
    }

    #[test]
    fn test_distinct_vendors_split_trim_and_sort() {
        let mut store = Dataset::new();
        store.load(sample());

        let vendors: Vec<String> = store.distinct_vendors().into_iter().collect();
        assert_eq!(
            vendors,
            vec![
                "Acme",
                "Globex",
                "Schneider Electric",
                "Siemens",
                "Siemens Energy"
            ]
        );
    }

    #[test]
    fn test_distinct_vendors_ignore_current_filter() {
        let mut store = Dataset::new();
        store.load(sample());
        store.apply_filter(FilterCriteria::none().country("US"));

        assert_eq!(store.distinct_vendors().len(), 5);
    }

    #[test]
    fn test_distinct_countries_are_trimmed_nonempty_and_sorted() {
        let mut store = Dataset::new();
        let mut records = sample();
        records.push(record("ICSA-5", "X", "  "));
        store.load(records);

        let countries: Vec<String> = store.distinct_countries().into_iter().collect();
        assert_eq!(countries, vec!["France", "Germany", "US", "germany"]);
    }

    #[test]
    fn test_current_page_and_navigation() {
        let mut store = Dataset::with_page_size(3).unwrap();
        store.load(sample());

        assert_eq!(store.current_page().len(), 3);
        assert!(store.next_page());
        assert_eq!(store.current_page().len(), 1);
        assert!(!store.next_page());
        assert!(store.previous_page());
        assert!(!store.previous_page());
        assert_eq!(store.page_info().current_page, 1);
    }

    struct Recorder {
        seen: Rc<RefCell<Vec<usize>>>,
    }

    impl StoreObserver for Recorder {
        fn filtered_changed(&mut self, snapshot: &[Record]) {
            self.seen.borrow_mut().push(snapshot.len());
        }
    }

    #[test]
    fn test_observers_receive_snapshots_on_filter_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Dataset::new();
        store.load(sample());
        store.subscribe(Box::new(Recorder { seen: seen.clone() }));

        store.apply_filter(FilterCriteria::none().country("US"));
        store.apply_filter(FilterCriteria::none());

        assert_eq!(*seen.borrow(), vec![1, 4]);
    }
}
