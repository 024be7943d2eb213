use crate::templates::components::error::error_body;
use maud::{html, Markup, DOCTYPE};

/// Standalone error page; does not depend on the loaded listings.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { "Error " (status) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                (error_body(status, message))
            }
        }
    }
}
