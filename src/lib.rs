pub mod config;
pub mod domain;
pub mod errors;
pub mod images;
pub mod loader;
pub mod logger;
pub mod responses;
pub mod router;
pub mod store;
pub mod templates;
pub mod viewer;
