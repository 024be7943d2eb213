use crate::domain::listing::{field_or_na, or_na};
use crate::domain::Listing;
use crate::images::photos_for;
use crate::store::Filter;
use crate::templates::components::{carousel, fact};
use crate::viewer::Carousel;
use maud::{html, Markup};

fn price_line(listing: &Listing) -> String {
    match (&listing.price, listing.price_unit.as_deref()) {
        (Some(price), Some(unit)) => format!("{price} {unit}"),
        (Some(price), None) => price.to_string(),
        (None, _) => crate::domain::NOT_AVAILABLE.to_string(),
    }
}

pub fn listing_card(index: usize, listing: &Listing, unit_type: &Filter) -> Markup {
    let photos = photos_for(listing, unit_type).len();

    html! {
        article class="card" id=(format!("card-{index}")) {
            div class="card-body" {
                h5 class="card-title" { (listing.name) }
                h6 class="card-subtitle" title=(or_na(listing.location.as_deref())) {
                    (listing.short_location())
                }

                div class="badges" {
                    span class="badge bg-primary" { (or_na(listing.status.as_deref())) }
                    span class="badge bg-secondary" { (or_na(listing.kind.as_deref())) }
                }

                dl class="facts" {
                    (fact("价格", &price_line(listing)))
                    (fact("总价", &field_or_na(listing.total_price.as_ref())))
                    (fact("最新开盘", or_na(listing.latest_open_date.as_deref())))
                    (fact("绿化率", &field_or_na(listing.green_ratio.as_ref())))
                    (fact("容积率", &field_or_na(listing.plot_ratio.as_ref())))
                    (fact("物业费", &field_or_na(listing.property_fee.as_ref())))
                    (fact("户型", or_na(listing.room_types.as_deref())))
                    (fact("面积", or_na(listing.area.as_deref())))
                }

                @if let Some(tags) = listing.tags.as_deref().filter(|t| !t.is_empty()) {
                    p class="tags" { (tags) }
                }

                (carousel(index, listing, unit_type, Carousel::new(photos, 0)))
            }
        }
    }
}
