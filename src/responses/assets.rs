// responses/assets.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use mime::Mime;

const VIEWER_JS: &str = include_str!("../../static/viewer.js");
const MAIN_CSS: &str = include_str!("../../static/main.css");

/// Serves one of the embedded static files by its path under `/static/`.
pub fn asset_response(name: &str) -> ResultResp {
    let (body, content_type): (&'static str, Mime) = match name {
        "viewer.js" => (VIEWER_JS, mime::APPLICATION_JAVASCRIPT_UTF_8),
        "main.css" => (MAIN_CSS, mime::TEXT_CSS_UTF_8),
        _ => return Err(ServerError::NotFound),
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=3600")
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}
