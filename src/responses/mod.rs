pub mod assets;
pub mod errors;
pub mod html;
pub mod json;

pub use assets::asset_response;
pub use errors::{error_to_response, html_error_response, ResultResp};

// Normal HTML response
pub use html::html_response;
pub use json::json_response;
