// src/store/mod.rs

mod filter;
mod sort;

pub use filter::{Filter, FilterOptions};
pub use sort::{SortKey, UnknownSortKey};

use crate::domain::{Document, Listing};
use std::sync::Arc;

/// Holds the canonical listings plus the active query (two filters, one sort key)
/// and the displayed sequence derived from them.
///
/// The canonical array and the filter options are shared behind `Arc`, so a
/// clone is a cheap, independent query session over the same data. Nothing here
/// ever mutates the canonical array; the displayed sequence is a list of
/// positions into it.
#[derive(Debug, Clone, Default)]
pub struct ListingStore {
    canonical: Arc<Vec<Listing>>,
    options: Arc<FilterOptions>,
    scrape_time: Option<Arc<str>>,

    unit_type_filter: Filter,
    status_filter: Filter,
    sort_key: SortKey,
    displayed: Vec<usize>,
}

impl ListingStore {
    /// Empty store: no listings and no filter options.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Populates the canonical array and derives both filter domains, once.
    pub fn load(document: Document) -> Self {
        let options = FilterOptions::from_listings(&document.loupans);
        let displayed = (0..document.loupans.len()).collect();

        Self {
            canonical: Arc::new(document.loupans),
            options: Arc::new(options),
            scrape_time: document.scrape_time.map(Arc::from),
            unit_type_filter: Filter::All,
            status_filter: Filter::All,
            sort_key: SortKey::Default,
            displayed,
        }
    }

    pub fn scrape_time(&self) -> Option<&str> {
        self.scrape_time.as_deref()
    }

    pub fn canonical(&self) -> &[Listing] {
        &self.canonical
    }

    pub fn listing(&self, index: usize) -> Option<&Listing> {
        self.canonical.get(index)
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn unit_type_filter(&self) -> &Filter {
        &self.unit_type_filter
    }

    pub fn status_filter(&self) -> &Filter {
        &self.status_filter
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// Positions into the canonical array, in display order.
    pub fn displayed_indices(&self) -> &[usize] {
        &self.displayed
    }

    /// The displayed listings with their canonical positions.
    pub fn displayed(&self) -> impl Iterator<Item = (usize, &Listing)> + '_ {
        self.displayed.iter().map(|&i| (i, &self.canonical[i]))
    }

    pub fn set_unit_type_filter(&mut self, filter: Filter) {
        self.unit_type_filter = filter;
        self.refilter();
    }

    pub fn set_status_filter(&mut self, filter: Filter) {
        self.status_filter = filter;
        self.refilter();
    }

    /// Re-sorts the displayed sequence.
    ///
    /// `SortKey::Default` restores the full canonical order and drops the
    /// filtered view, even though both filters keep their values.
    pub fn sort(&mut self, key: SortKey) {
        self.sort_key = key;

        if key == SortKey::Default {
            self.displayed = (0..self.canonical.len()).collect();
            return;
        }

        sort::sort_indices(&self.canonical, &mut self.displayed, key);
    }

    // Every filter change discards the current sort order.
    fn refilter(&mut self) {
        let unit_type = &self.unit_type_filter;
        let status = &self.status_filter;

        self.displayed = self
            .canonical
            .iter()
            .enumerate()
            .filter(|(_, l)| unit_type.matches_unit_type(l) && status.matches_status(l))
            .map(|(i, _)| i)
            .collect();
        self.sort_key = SortKey::Default;
    }
}
