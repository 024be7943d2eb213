// loader.rs
use crate::domain::{Document, Listing};
use crate::store::ListingStore;
use log::{error, info};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("loupan_viewer/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

// Earlier exports were a bare array of listings without the wrapper object.
#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentShape {
    Wrapped(Document),
    Bare(Vec<Listing>),
}

pub fn parse_document(bytes: &[u8]) -> Result<Document, LoadError> {
    let shape: DocumentShape = serde_json::from_slice(bytes)?;
    Ok(match shape {
        DocumentShape::Wrapped(doc) => doc,
        DocumentShape::Bare(loupans) => Document {
            scrape_time: None,
            loupans,
        },
    })
}

fn is_remote(source: &str) -> bool {
    url::Url::parse(source)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Fetches the document once, from disk or over HTTP. No retry.
pub fn fetch_document(source: &str) -> Result<Document, LoadError> {
    let bytes = if is_remote(source) {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        client
            .get(source)
            .send()?
            .error_for_status()?
            .bytes()?
            .to_vec()
    } else {
        std::fs::read(source)?
    };

    parse_document(&bytes)
}

/// Builds the store from `source`. Any failure is logged and yields an empty store.
pub fn load_store(source: &str) -> ListingStore {
    match fetch_document(source) {
        Ok(doc) => {
            info!(
                "Loaded {} listings from {source} (scraped {})",
                doc.loupans.len(),
                doc.scrape_time.as_deref().unwrap_or("at unknown time")
            );
            ListingStore::load(doc)
        }
        Err(e) => {
            error!("Error fetching data from {source}: {e}");
            ListingStore::empty()
        }
    }
}
