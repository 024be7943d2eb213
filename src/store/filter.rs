// src/store/filter.rs

use crate::domain::Listing;
use std::collections::HashSet;

/// One filter predicate. `All` is the sentinel that matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    pub const ALL: &'static str = "__all__";

    /// Query-string form: `__all__` (or empty) is the sentinel, anything else a value.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | Self::ALL => Filter::All,
            value => Filter::Only(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => Self::ALL,
            Filter::Only(value) => value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    /// True when a listing has at least one unit type with this name.
    pub fn matches_unit_type(&self, listing: &Listing) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(name) => listing.has_unit_type(name),
        }
    }

    pub fn matches_status(&self, listing: &Listing) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(status) => listing.status.as_deref() == Some(status.as_str()),
        }
    }
}

/// The selectable values for both filter dimensions.
///
/// Computed once from the canonical array, each list led by [`Filter::All`]
/// and otherwise in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub unit_types: Vec<Filter>,
    pub statuses: Vec<Filter>,
}

impl FilterOptions {
    pub fn from_listings(listings: &[Listing]) -> Self {
        let unit_types = listings
            .iter()
            .flat_map(|l| l.house_types.iter().map(|h| h.name.as_str()));
        let statuses = listings.iter().filter_map(|l| l.status.as_deref());

        Self {
            unit_types: with_sentinel(unit_types),
            statuses: with_sentinel(statuses),
        }
    }
}

fn with_sentinel<'a>(values: impl Iterator<Item = &'a str>) -> Vec<Filter> {
    let mut seen = HashSet::new();
    let mut out = vec![Filter::All];

    for value in values {
        if seen.insert(value) {
            out.push(Filter::Only(value.to_string()));
        }
    }

    out
}
