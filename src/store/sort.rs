// src/store/sort.rs

use crate::domain::coerce::{money_to_number, parse_float, parse_open_date};
use crate::domain::{FieldValue, Listing};
use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;

/// The user-selectable sort orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Default,
    Price,
    TotalPrice,
    OpenDate,
    GreenRatio,
    PlotRatio,
    PropertyFee,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::Default,
        SortKey::Price,
        SortKey::TotalPrice,
        SortKey::OpenDate,
        SortKey::GreenRatio,
        SortKey::PlotRatio,
        SortKey::PropertyFee,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::Price => "price",
            SortKey::TotalPrice => "totalPrice",
            SortKey::OpenDate => "openDate",
            SortKey::GreenRatio => "greenRatio",
            SortKey::PlotRatio => "plotRatio",
            SortKey::PropertyFee => "propertyFee",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Default => "默认排序",
            SortKey::Price => "单价从低到高",
            SortKey::TotalPrice => "总价从低到高",
            SortKey::OpenDate => "最新开盘",
            SortKey::GreenRatio => "绿化率从高到低",
            SortKey::PlotRatio => "容积率从低到高",
            SortKey::PropertyFee => "物业费从低到高",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Reorders `indices` (positions into `listings`) for a non-default key.
///
/// Coerced money-like fields always yield a number (negative infinity when
/// unparseable) and are fully ordered. A missing or invalid opening date counts
/// as the oldest. The raw price can be NaN: those entries keep the slot they
/// were in, while the ordered entries are stably sorted into the remaining slots.
pub fn sort_indices(listings: &[Listing], indices: &mut [usize], key: SortKey) {
    match key {
        SortKey::Default => {}
        SortKey::Price => sort_partial(
            indices,
            |i| {
                let price = raw_float(listings[i].price.as_ref());
                (!price.is_nan()).then_some(price)
            },
            |a, b| a.total_cmp(b),
        ),
        SortKey::OpenDate => {
            indices.sort_by_key(|&i| {
                Reverse(
                    listings[i]
                        .latest_open_date
                        .as_deref()
                        .and_then(parse_open_date),
                )
            });
        }
        SortKey::TotalPrice => {
            indices.sort_by(|&a, &b| {
                money(listings[a].total_price.as_ref())
                    .total_cmp(&money(listings[b].total_price.as_ref()))
            });
        }
        SortKey::GreenRatio => {
            indices.sort_by(|&a, &b| {
                money(listings[b].green_ratio.as_ref())
                    .total_cmp(&money(listings[a].green_ratio.as_ref()))
            });
        }
        SortKey::PlotRatio => {
            indices.sort_by(|&a, &b| {
                money(listings[a].plot_ratio.as_ref())
                    .total_cmp(&money(listings[b].plot_ratio.as_ref()))
            });
        }
        SortKey::PropertyFee => {
            indices.sort_by(|&a, &b| {
                money(listings[a].property_fee.as_ref())
                    .total_cmp(&money(listings[b].property_fee.as_ref()))
            });
        }
    }
}

fn raw_float(value: Option<&FieldValue>) -> f64 {
    match value {
        Some(FieldValue::Number(n)) => *n,
        Some(FieldValue::Text(s)) => parse_float(s),
        None => f64::NAN,
    }
}

fn money(value: Option<&FieldValue>) -> f64 {
    match value {
        Some(v) => money_to_number(&v.as_text()),
        None => f64::NEG_INFINITY,
    }
}

fn sort_partial<K, F, C>(indices: &mut [usize], key_of: F, cmp: C)
where
    F: Fn(usize) -> Option<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut slots = Vec::new();
    let mut keyed = Vec::new();

    for (slot, &idx) in indices.iter().enumerate() {
        if let Some(key) = key_of(idx) {
            slots.push(slot);
            keyed.push((key, idx));
        }
    }

    keyed.sort_by(|a, b| cmp(&a.0, &b.0));

    for (slot, (_, idx)) in slots.into_iter().zip(keyed) {
        indices[slot] = idx;
    }
}
