// templates/urls.rs

use crate::store::{Filter, SortKey};
use crate::viewer::{Direction, Lightbox, PhotoRef};
use url::form_urlencoded::Serializer;

fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    let mut query = Serializer::new(String::new());
    for (k, v) in pairs {
        query.append_pair(k, v);
    }
    format!("{path}?{}", query.finish())
}

/// Results fragment URL. Filter changes leave `sort` out, so it falls back to default.
pub fn listings_url(unit_type: &Filter, status: &Filter, sort: Option<SortKey>) -> String {
    let mut pairs = vec![
        ("unit_type", unit_type.as_str().to_string()),
        ("status", status.as_str().to_string()),
    ];
    if let Some(key) = sort {
        pairs.push(("sort", key.as_str().to_string()));
    }
    with_query("/listings", &pairs)
}

/// Carousel fragment URL. Without a direction the fragment is re-rendered as is
/// (the swipe handler appends `start_x`/`end_x`).
pub fn carousel_url(
    listing: usize,
    index: usize,
    unit_type: &Filter,
    direction: Option<Direction>,
) -> String {
    let mut pairs = vec![
        ("index", index.to_string()),
        ("unit_type", unit_type.as_str().to_string()),
    ];
    if let Some(dir) = direction {
        pairs.push(("dir", dir.as_str().to_string()));
    }
    with_query(&format!("/cards/{listing}/carousel"), &pairs)
}

pub fn viewer_url(photo: PhotoRef, unit_type: &Filter) -> String {
    with_query(
        "/viewer",
        &[
            ("listing", photo.listing.to_string()),
            ("image", photo.photo.to_string()),
            ("unit_type", unit_type.as_str().to_string()),
        ],
    )
}

/// Event URL carrying the whole lightbox state; the client appends `kind` and
/// the event payload.
pub fn viewer_event_url(lightbox: &Lightbox, unit_type: &Filter) -> Option<String> {
    let photo = lightbox.photo()?;
    let offset = lightbox.offset();

    let mut pairs = vec![
        ("listing", photo.listing.to_string()),
        ("image", photo.photo.to_string()),
        ("unit_type", unit_type.as_str().to_string()),
        ("scale", lightbox.scale().to_string()),
        ("x", offset.x.to_string()),
        ("y", offset.y.to_string()),
    ];
    if let Some(pinch) = lightbox.pinch() {
        pairs.push(("pinch_dist", pinch.initial_distance.to_string()));
        pairs.push(("pinch_scale", pinch.initial_scale.to_string()));
    }
    if let Some(touch) = lightbox.last_touch() {
        pairs.push(("touch_x", touch.x.to_string()));
        pairs.push(("touch_y", touch.y.to_string()));
    }

    Some(with_query("/viewer/event", &pairs))
}
