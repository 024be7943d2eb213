pub mod coerce;
pub mod listing;

pub use listing::{Document, FieldValue, Listing, UnitType, NOT_AVAILABLE};
