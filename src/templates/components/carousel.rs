use crate::domain::{listing::or_na, Listing};
use crate::images::{image_src, photos_for, IMAGE_NOT_AVAILABLE};
use crate::store::Filter;
use crate::templates::urls::{carousel_url, viewer_url};
use crate::viewer::{Carousel, Direction, PhotoRef};
use maud::{html, Markup};

pub fn carousel_id(listing: usize) -> String {
    format!("carousel-{listing}")
}

/// `onerror` handler swapping in the "not available" placeholder once.
pub fn image_fallback() -> String {
    format!("this.onerror=null;this.src='{IMAGE_NOT_AVAILABLE}';")
}

// Arrow keys reach a carousel only while the pointer is over it.
fn key_trigger(id: &str, key: &str) -> String {
    format!(
        "click, keydown[key=='{key}'&&document.getElementById('{id}')?.matches(':hover')] from:body"
    )
}

/// Photo carousel of one listing card, showing the photos allowed by the
/// unit-type filter. Renders nothing when there are no photos.
pub fn carousel(
    listing_idx: usize,
    listing: &Listing,
    unit_type: &Filter,
    state: Carousel,
) -> Markup {
    let photos = photos_for(listing, unit_type);
    let id = carousel_id(listing_idx);
    let target = format!("#{id}");

    let Some(photo) = photos.get(state.index()) else {
        return html! {};
    };
    let open_url = viewer_url(
        PhotoRef {
            listing: listing_idx,
            photo: state.index(),
        },
        unit_type,
    );

    html! {
        div
            id=(id)
            class="carousel"
            data-swipe-url=(carousel_url(listing_idx, state.index(), unit_type, None))
        {
            img
                class="carousel-image"
                src=(image_src(photo))
                alt=(photo.name)
                onerror=(image_fallback())
                hx-get=(open_url)
                hx-target="#lightbox"
                hx-swap="outerHTML";

            div class="carousel-caption" {
                h5 { (photo.name) }
                p { (or_na(photo.area.as_deref())) }
                p { (or_na(photo.price.as_deref())) }
            }

            @if photos.len() > 1 {
                button
                    type="button"
                    class="carousel-control prev"
                    aria-label="上一张"
                    hx-get=(carousel_url(listing_idx, state.index(), unit_type, Some(Direction::Prev)))
                    hx-target=(target)
                    hx-swap="outerHTML"
                    hx-trigger=(key_trigger(&id, "ArrowLeft"))
                { "‹" }
                button
                    type="button"
                    class="carousel-control next"
                    aria-label="下一张"
                    hx-get=(carousel_url(listing_idx, state.index(), unit_type, Some(Direction::Next)))
                    hx-target=(target)
                    hx-swap="outerHTML"
                    hx-trigger=(key_trigger(&id, "ArrowRight"))
                { "›" }

                div class="carousel-indicators" {
                    @for i in 0..photos.len() {
                        span.dot.active[i == state.index()] {}
                    }
                }
            }
        }
    }
}
