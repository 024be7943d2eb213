// src/images.rs

use crate::domain::{Listing, UnitType};
use crate::store::Filter;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Shown in place of any image that fails to load in the browser.
pub const IMAGE_NOT_AVAILABLE: &str =
    "https://via.placeholder.com/300x200?text=Image+Not+Available";

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/300x200?text=";

// Everything encodeURIComponent escapes.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// The local image when there is one, otherwise a placeholder keyed by name.
pub fn image_src(unit: &UnitType) -> String {
    match unit.local_image.as_deref().filter(|s| !s.is_empty()) {
        Some(src) => src.to_string(),
        None => format!("{PLACEHOLDER_BASE}{}", encode_uri_component(&unit.name)),
    }
}

/// The photos a listing's carousel shows under the selected unit-type filter.
pub fn photos_for<'a>(listing: &'a Listing, unit_type: &Filter) -> Vec<&'a UnitType> {
    listing
        .house_types
        .iter()
        .filter(|h| match unit_type {
            Filter::All => true,
            Filter::Only(name) => &h.name == name,
        })
        .collect()
}
