use maud::{html, Markup};

pub mod carousel;
pub mod error;
pub mod lightbox;
pub mod listing_card;
pub mod query_bar;

pub use carousel::carousel;
pub use lightbox::lightbox;
pub use listing_card::listing_card;
pub use query_bar::{results, ResultsVm};

/// One labelled fact line of a card.
pub fn fact(label: &str, value: &str) -> Markup {
    html! {
        div class="fact" {
            dt { (label) }
            dd { (value) }
        }
    }
}
