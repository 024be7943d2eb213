// src/domain/listing.rs

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;

// document
//  ├── scrape_time
//  └── loupans[]
//       ├── name, location, status, type
//       ├── price, price_unit, total_price
//       ├── latest_open_date
//       ├── green_ratio, plot_ratio, property_fee
//       ├── room_types, area, tags
//       └── house_types[]
//            ├── name, area, price
//            ├── image_url
//            └── local_image

/// Rendered wherever an optional field is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// The static document produced by the scraper.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Document {
    #[serde(default)]
    pub scrape_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub loupans: Vec<Listing>,
}

/// A field the scraper emits either as a JSON number or as free text.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// One development ("loupan").
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Listing {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub price: Option<FieldValue>,
    #[serde(default)]
    pub price_unit: Option<String>,
    #[serde(default)]
    pub total_price: Option<FieldValue>,
    #[serde(default)]
    pub latest_open_date: Option<String>,

    #[serde(default)]
    pub green_ratio: Option<FieldValue>,
    #[serde(default)]
    pub plot_ratio: Option<FieldValue>,
    #[serde(default)]
    pub property_fee: Option<FieldValue>,

    #[serde(default)]
    pub room_types: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub house_types: Vec<UnitType>,
}

/// One floor-plan variant inside a development.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct UnitType {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub local_image: Option<String>,
}

impl Listing {
    /// Last "/"-delimited segment of the location, used as the short label.
    pub fn short_location(&self) -> &str {
        match self.location.as_deref() {
            Some(loc) => loc.rsplit('/').next().unwrap_or(loc).trim(),
            None => NOT_AVAILABLE,
        }
    }

    pub fn has_unit_type(&self, name: &str) -> bool {
        self.house_types.iter().any(|h| h.name == name)
    }
}

/// Display helper for optional free-text fields.
pub fn or_na(value: Option<&str>) -> &str {
    value.filter(|s| !s.is_empty()).unwrap_or(NOT_AVAILABLE)
}

/// Display helper for optional numeric-or-string fields.
pub fn field_or_na(value: Option<&FieldValue>) -> Cow<'_, str> {
    match value {
        Some(v) => v.as_text(),
        None => Cow::Borrowed(NOT_AVAILABLE),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
