// templates/pages/home.rs

use crate::store::ListingStore;
use crate::templates::{
    components::{results, ResultsVm},
    desktop_layout,
};
use maud::Markup;

pub fn home_page(title: &str, store: &ListingStore) -> Markup {
    desktop_layout(
        title,
        store.scrape_time(),
        results(&ResultsVm { store }),
    )
}
